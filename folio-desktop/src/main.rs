use anyhow::Result;
use clap::Parser;
use folio_desktop_lib::app::{AppBootstrap, DesktopArgs, run};

#[tokio::main]
async fn main() -> Result<()> {
    let args = DesktopArgs::parse();
    let bootstrap = AppBootstrap::new(&args)?;
    run::run(bootstrap).await
}
