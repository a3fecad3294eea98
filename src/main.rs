mod app;
mod audio;
mod cli;
mod config;
mod consts;
mod display;
mod events;
mod game;
mod input;
mod logging;
mod settings;
mod util;
use crate::app::App;
use crate::cli::Command;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let command = match Command::from_env() {
        Ok(command) => command,
        Err(e) => return usage_error(&e),
    };
    let settings = match command {
        Command::Help => {
            print!("{}", Command::usage());
            return ExitCode::SUCCESS;
        }
        Command::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Command::Run {
            config_path,
            overrides,
        } => match cli::resolve_settings(config_path.as_deref(), overrides) {
            Ok(settings) => settings,
            Err(e) => return usage_error(&e),
        },
    };
    if let Err(e) = logging::init(settings.debug_logging) {
        eprintln!("{}: {e:#}", env!("CARGO_PKG_NAME"));
        return ExitCode::from(2);
    }
    let terminal = ratatui::init();
    let r = App::new(settings).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn usage_error(e: &crate::cli::CliError) -> ExitCode {
    eprintln!("{}: {e}", env!("CARGO_PKG_NAME"));
    eprintln!("Try '{} --help' for more information.", env!("CARGO_PKG_NAME"));
    ExitCode::from(2)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
