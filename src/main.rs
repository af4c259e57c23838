mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod input;
mod logging;
mod ui;
mod util;
use crate::app::App;
use crate::cli::{Arguments, Invocation, USAGE};
use crate::config::Config;
use crate::game::Session;
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match Invocation::from_parser(lexopt::Parser::from_env()) {
        Ok(Invocation::Run(args)) => exit_status(run(args)),
        Ok(Invocation::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Invocation::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e}\n\n{USAGE}", env!("CARGO_PKG_NAME"));
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let config = match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::default_path().and_then(|path| Config::load(&path, true)),
    }
    .context("failed to load configuration")?;
    if let Some(path) = args.log_file.as_deref().or(config.log.file.as_deref()) {
        logging::init(path, config.log.level).context("failed to set up logging")?;
    }
    info!(
        "Starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let app = App::new(Session::new_with_rng(rng), config.display.frame_rate);
    let terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableMouseCapture).and_then(|()| app.run(terminal));
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    r?;
    Ok(())
}

fn exit_status(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e:?}", env!("CARGO_PKG_NAME"));
            ExitCode::from(2)
        }
    }
}
