//! The Terminal application: a tiny fixed-command interpreter.

pub mod builtin;
pub mod session;

pub use builtin::{BuiltinTerminalCommand, TerminalCommand, builtin_commands, find_builtin_command};
pub use session::{BANNER, Interpretation, PROMPT, TerminalSession, interpret};
