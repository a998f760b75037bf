mod commands;
mod terminal;

use std::env;
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use commands::{CommandLine, check};
use fibnext_common::{error::InputError, input::InputNumber};
use terminal::{logging, print};
use tracing::debug;

fn main() -> ExitCode {
    let args: Vec<OsString> = env::args_os().collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print::failure(&err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(args: &[OsString]) -> anyhow::Result<()> {
    logging::init(&commands::config());

    let commands = match CommandLine::parse_args(args) {
        Ok(commands) => commands,
        Err(err) => {
            debug!("rejected arguments: {:?}", err.kind());
            let program = commands::program_name(args);
            return Err(InputError::Usage { program }.into());
        }
    };

    let input: InputNumber = commands.number.parse()?;
    debug!("validated input {input}");

    check::check(&input, &mut io::stdout().lock())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<InputError>()
        .map_or(1, InputError::exit_code)
}
