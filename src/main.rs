use clap::Parser;
use std::io;
use std::process::ExitCode;

use getty::cli::{self, Args};
use getty::config::GettyConfig;
use getty::session::{Session, SessionSettings};
use getty::signals;
use getty::terminal::{RawStdin, TerminalHandle};

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match cli::exit_code(&e) {
            0 => e.exit(),
            code => {
                let _ = e.print();
                return ExitCode::from(code);
            }
        },
    };

    let mut config = match GettyConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("getty: {}", e);
            return ExitCode::FAILURE;
        }
    };
    args.apply(&mut config);

    let settings = match SessionSettings::from_config(&config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("getty: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Don't let QUIT dump core
    if let Err(e) = signals::exit_on_quit() {
        log::warn!("Cannot install SIGQUIT handler: {}", e);
    }

    let terminal = match TerminalHandle::from_stdin() {
        Ok(terminal) => terminal,
        Err(e) => {
            eprintln!("getty: unknown TTY");
            log::error!("{}", e);
            // Keep the supervisor from respawning us in a tight loop
            nix::unistd::pause();
            return ExitCode::FAILURE;
        }
    };

    log::debug!(
        "Serving {} at {}",
        terminal.path().display(),
        settings.speed
    );

    let session = Session::new(settings, terminal, RawStdin, io::stdout());
    match session.run() {
        Ok(never) => match never {},
        Err(e) => {
            if !e.is_hang_up() {
                eprintln!("getty: {}", e);
            }
            ExitCode::from(e.exit_code())
        }
    }
}
