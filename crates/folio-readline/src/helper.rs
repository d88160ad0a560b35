//! Line-editing helper: completion, hints and highlighting for terminal commands.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use folio_core::terminal::{BuiltinTerminalCommand, builtin_commands, find_builtin_command};
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Rustyline helper that knows the builtin terminal commands.
#[derive(Clone)]
pub struct TerminalHelper {
    commands: &'static [BuiltinTerminalCommand],
}

impl TerminalHelper {
    pub fn new() -> Self {
        Self {
            commands: builtin_commands(),
        }
    }

    fn matching(&self, prefix: &str) -> Vec<&'static BuiltinTerminalCommand> {
        let prefix = prefix.trim_start().to_lowercase();
        if prefix.is_empty() || prefix.contains(' ') {
            return Vec::new();
        }
        self.commands
            .iter()
            .filter(|cmd| cmd.name.starts_with(&prefix))
            .collect()
    }

    /// Commands starting with `prefix` (case-insensitive).
    pub fn candidates(&self, prefix: &str) -> Vec<&'static str> {
        self.matching(prefix).into_iter().map(|cmd| cmd.name).collect()
    }

    /// Completion start and candidates for the text left of the cursor.
    ///
    /// The listing shows each command with its description; only the name is
    /// inserted.
    pub fn completions(&self, line: &str) -> (usize, Vec<Pair>) {
        let start = line.len() - line.trim_start().len();
        let pairs = self
            .matching(line)
            .into_iter()
            .map(|cmd| Pair {
                display: format!("{:<10}{}", cmd.name, cmd.description),
                replacement: cmd.name.to_string(),
            })
            .collect();
        (start, pairs)
    }
}

impl Default for TerminalHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for TerminalHelper {}

impl Completer for TerminalHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.completions(&line[..pos]))
    }
}

impl Highlighter for TerminalHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if find_builtin_command(&line.trim().to_lowercase()).is_some() {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for TerminalHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let typed = line.trim_start();
        if typed.is_empty() {
            return None;
        }
        self.candidates(typed)
            .into_iter()
            .find(|cmd| cmd.len() > typed.len())
            .map(|cmd| cmd[typed.len()..].to_string())
    }
}

impl Validator for TerminalHelper {}
