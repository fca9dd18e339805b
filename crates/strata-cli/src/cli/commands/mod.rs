use super::args::*;

pub mod analyze;
pub mod sample;
pub mod summary;
pub mod theme;

use crate::exit_codes::SUCCESS;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Analyze(args) => analyze::run(args),
        Command::Sample(args) => sample::run(args),
        Command::Theme(args) => Ok(theme::run(args)),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
