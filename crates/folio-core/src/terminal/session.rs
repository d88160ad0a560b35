//! Terminal history and command dispatch.

use super::builtin::{TerminalCommand, builtin_commands, find_builtin_command};
use crate::content::PortfolioContent;

/// Prompt line that ends the history while waiting for input.
pub const PROMPT: &str = "> ";

/// Lines shown when a session starts.
pub const BANNER: [&str; 2] = [
    "Welcome to Portfolio Terminal v1.0",
    "Type \"help\" to see available commands",
];

/// Result of interpreting one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpretation {
    /// Blank input; nothing happens.
    Ignore,
    /// `clear`: history is discarded.
    Clear,
    /// Any other input, with the line to print.
    Respond(String),
}

/// Interprets one line of input against `content`.
///
/// Input is trimmed and matched case-insensitively. Unknown input is echoed
/// back trimmed but with its original case.
pub fn interpret(input: &str, content: &PortfolioContent) -> Interpretation {
    let input = input.trim();
    if input.is_empty() {
        return Interpretation::Ignore;
    }

    let command = find_builtin_command(&input.to_lowercase()).map(|builtin| builtin.command);
    let response = match command {
        Some(TerminalCommand::Clear) => return Interpretation::Clear,
        Some(TerminalCommand::Help) => {
            let names: Vec<&str> = builtin_commands().iter().map(|c| c.name).collect();
            format!("Available commands: {}", names.join(", "))
        }
        Some(TerminalCommand::Projects) => {
            format!("Projects: {}", content.project_names().join(", "))
        }
        Some(TerminalCommand::Skills) => {
            format!("Skills: {}", content.profile.skills.join(", "))
        }
        Some(TerminalCommand::Contact) => format!(
            "Contact: {} | {}",
            content.profile.email, content.profile.phone
        ),
        None => format!("Command not found: {input}. Type \"help\" for available commands."),
    };
    Interpretation::Respond(response)
}

/// Ordered log of a terminal session.
///
/// The last line is always [`PROMPT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSession {
    history: Vec<String>,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSession {
    /// Starts a session with the welcome banner.
    pub fn new() -> Self {
        let mut history: Vec<String> = BANNER.iter().map(|line| line.to_string()).collect();
        history.push(PROMPT.to_string());
        Self { history }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Runs one line of input and records it.
    ///
    /// For everything but `clear` the trailing prompt becomes an echo of the
    /// input, followed by the response and a fresh prompt.
    pub fn submit(&mut self, input: &str, content: &PortfolioContent) -> Interpretation {
        let interpretation = interpret(input, content);
        match &interpretation {
            Interpretation::Ignore => {}
            Interpretation::Clear => {
                self.history = vec![PROMPT.to_string()];
            }
            Interpretation::Respond(response) => {
                let echo = format!("{PROMPT}{}", input.trim());
                match self.history.last_mut() {
                    Some(last) => *last = echo,
                    None => self.history.push(echo),
                }
                self.history.push(response.clone());
                self.history.push(PROMPT.to_string());
            }
        }
        interpretation
    }
}
