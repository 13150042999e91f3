mod commands;
mod handlers;
mod shell;

pub use commands::{Cli, Commands};
pub use handlers::{handle_check, handle_run, handle_shell};
pub use shell::{Flow, Shell, ShellCommand, HELP};
