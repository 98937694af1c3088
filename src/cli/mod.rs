//! Command-line layer: argument parsing, command dispatch and reporting.

mod args;
mod commands;
mod exit_status;
pub mod report;

use anyhow::Result;

pub use args::{Arguments, Command, CommonArgs};
pub use commands::CommandContext;
pub use exit_status::ExitStatus;

use commands::{check::check, init::init, locales::locales, scaffold::scaffold, write};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments {
        command: Some(command),
    }) = args.with_command_or_help()
    else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Write(cmd) => write::write(cmd),
        Command::WriteAll(cmd) => write::write_all(cmd),
        Command::Scaffold(cmd) => scaffold(cmd),
        Command::Check(cmd) => check(cmd),
        Command::Locales => locales(),
        Command::Init(cmd) => init(cmd),
    }
}
