use anyhow::{Context, Result};
use folio_infrastructure::ConfigService;
use std::path::PathBuf;

/// Builds the config service for an explicit path or the platform default.
pub fn service(path: Option<PathBuf>) -> Result<ConfigService> {
    match path {
        Some(path) => Ok(ConfigService::with_path(path)),
        None => ConfigService::new().context("Failed to resolve config path"),
    }
}

pub fn path(service: &ConfigService) {
    println!("{}", service.path().display());
}

pub fn render(service: &ConfigService) -> Result<String> {
    let config = service
        .load()
        .with_context(|| format!("Failed to load {}", service.path().display()))?;
    toml::to_string_pretty(&config).context("Failed to serialize config")
}

pub fn show(service: &ConfigService) -> Result<()> {
    print!("{}", render(service)?);
    Ok(())
}

pub fn init(service: &ConfigService, force: bool) -> Result<()> {
    let written = service
        .init(force)
        .with_context(|| format!("Failed to write {}", service.path().display()))?;

    if written {
        println!("✓ Wrote default config to {}", service.path().display());
    } else {
        println!(
            "Config already exists at {} (use --force to overwrite)",
            service.path().display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_defaults_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(Some(temp_dir.path().join("config.toml"))).unwrap();
        let text = render(&service).unwrap();
        assert!(text.contains("title = \"PortfolioOS\""));
    }

    #[test]
    fn test_render_reports_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[window]\ntoggle_clears_all_minimized = 3\n").unwrap();
        let service = service(Some(path)).unwrap();
        let err = render(&service).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load"));
    }
}
