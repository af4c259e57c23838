use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) const USAGE: &str = "\
Usage: snakescape [options]

Snake with Classic, Time Attack, Challenge, and Infinite modes

Options:
  -c PATH, --config PATH    Read configuration from the given file
  --log-file PATH           Write log messages to the given file
  --seed N                  Seed the random number generator with N
  -h, --help                Display this help message and exit
  -V, --version             Show the program version and exit
";

/// What the command line asks the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Invocation {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    /// Configuration file to use in place of the default one
    pub(crate) config: Option<PathBuf>,

    /// Log file to use in place of the one in the configuration
    pub(crate) log_file: Option<PathBuf>,

    pub(crate) seed: Option<u64>,
}

impl Invocation {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run(args))
    }
}
