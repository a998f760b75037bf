pub mod check;

use std::env;
use std::ffi::OsString;
use std::io::{self, IsTerminal};
use std::iter;
use std::path::Path;

use clap::Parser;
use fibnext_common::config::Config;

const DEFAULT_PROGRAM_NAME: &str = "fibnext";

/// Environment variable that turns colored diagnostics off.
const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Parser, Debug)]
#[command(name = "fibnext", disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Tells whether a number is a Fibonacci number and finds the next one.")]
pub struct CommandLine {
    /// Integer to check, taken verbatim
    pub number: String,
}

impl CommandLine {
    /// Parses `args` (program name first) with every user argument treated as
    /// positional, so text like `-abc` or `--help` still reaches integer parsing.
    pub fn parse_args(args: &[OsString]) -> Result<Self, clap::Error> {
        let program: OsString = args
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.into());
        let positionals = args.iter().skip(1).cloned();

        Self::try_parse_from(
            iter::once(program)
                .chain(iter::once(OsString::from("--")))
                .chain(positionals),
        )
    }
}

/// Ambient settings come from the environment; the command line carries only the number.
pub fn config() -> Config {
    let color = io::stderr().is_terminal() && env::var_os(NO_COLOR_ENV).is_none();
    Config::new(color)
}

/// Name the binary was invoked as, for the usage line.
pub fn program_name(args: &[OsString]) -> String {
    args.first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}
