//! `folio-terminal`: the desktop's Terminal application as a standalone REPL.

mod helper;

use anyhow::{Context as _, Result};
use colored::Colorize;
use folio_core::content::builtin_content;
use folio_core::terminal::{BANNER, Interpretation, find_builtin_command, interpret};
use folio_execution::logging;
use folio_infrastructure::{ConfigService, FolioPaths};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use crate::helper::TerminalHelper;

fn print_banner() {
    for line in BANNER {
        println!("{}", line.bright_green());
    }
    println!();
}

/// The main entry point for the Folio terminal REPL.
///
/// Reads lines with completion and history, interprets them against the
/// compiled-in portfolio and prints the responses. `quit`, `exit` or Ctrl-D
/// leave the loop.
fn main() -> Result<()> {
    let config = ConfigService::new()
        .map(|service| service.get_config())
        .unwrap_or_default();
    let _log_guard = match FolioPaths::log_dir() {
        Ok(dir) => logging::init_file_logging(&dir, "folio-terminal.log", &config.debug.log_level)
            .map_err(|e| eprintln!("{}", format!("Logging disabled: {}", e).yellow()))
            .ok(),
        Err(_) => None,
    };

    let content = builtin_content();
    let mut rl: Editor<TerminalHelper, DefaultHistory> =
        Editor::new().context("Failed to initialise line editor")?;
    rl.set_helper(Some(TerminalHelper::new()));

    print_banner();
    tracing::info!("[Terminal] Session started");

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                match interpret(trimmed, content) {
                    Interpretation::Ignore => {}
                    Interpretation::Clear => {
                        rl.clear_screen().context("Failed to clear screen")?;
                    }
                    Interpretation::Respond(response) => {
                        tracing::debug!(input = trimmed, "[Terminal] Command handled");
                        if find_builtin_command(&trimmed.to_lowercase()).is_some() {
                            println!("{}", response.bright_blue());
                        } else {
                            println!("{}", response.bright_black());
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    tracing::info!("[Terminal] Session ended");
    Ok(())
}
