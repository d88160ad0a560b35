//! Builtin terminal commands.
//!
//! The command set is fixed. The table drives `help`, tab completion in the
//! standalone REPL and the input hints on the desktop.

use serde::Serialize;
use std::sync::OnceLock;

/// A command understood by the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalCommand {
    Help,
    Projects,
    Skills,
    Contact,
    Clear,
}

/// A builtin command with its help text.
#[derive(Debug, Clone, Serialize)]
pub struct BuiltinTerminalCommand {
    /// Name typed at the prompt
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    pub command: TerminalCommand,
}

impl BuiltinTerminalCommand {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        command: TerminalCommand,
    ) -> Self {
        Self {
            name,
            description,
            command,
        }
    }
}

/// Static storage for builtin commands (initialized once).
static BUILTIN_COMMANDS: OnceLock<Vec<BuiltinTerminalCommand>> = OnceLock::new();

/// Returns all builtin commands in help order.
pub fn builtin_commands() -> &'static [BuiltinTerminalCommand] {
    BUILTIN_COMMANDS.get_or_init(|| {
        vec![
            BuiltinTerminalCommand::new("help", "List available commands", TerminalCommand::Help),
            BuiltinTerminalCommand::new(
                "projects",
                "List portfolio projects",
                TerminalCommand::Projects,
            ),
            BuiltinTerminalCommand::new("skills", "List technical skills", TerminalCommand::Skills),
            BuiltinTerminalCommand::new(
                "contact",
                "Show email and phone number",
                TerminalCommand::Contact,
            ),
            BuiltinTerminalCommand::new("clear", "Clear the terminal", TerminalCommand::Clear),
        ]
    })
}

/// Find a builtin command by exact (already lowercased) name.
pub fn find_builtin_command(name: &str) -> Option<&'static BuiltinTerminalCommand> {
    builtin_commands().iter().find(|cmd| cmd.name == name)
}
