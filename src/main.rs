use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::path::Path;
use std::{error::Error, io};

mod alerts;
mod app;
mod cli;
mod codes;
mod errors;
mod notify;
mod openmeteo;
mod weather;

use crate::alerts::Thresholds;
use crate::app::{run_app, App};
use crate::notify::Notifier;

fn init_logging(path: &Path, level: LevelFilter) -> Result<(), Box<dyn Error>> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}",
        )))
        .build(path)?;
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(Root::builder().appender("file").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = cli::Args::parse();

    // Logging goes to a file so it never scribbles over the alternate screen.
    if let Some(path) = &args.log_file {
        init_logging(path, args.log_level)?;
    }

    let thresholds = Thresholds {
        temp_threshold: args.temp_threshold,
        ..Thresholds::default()
    };
    let notifier = Notifier::probe(!args.no_notify);
    let app = App::new(thresholds, notifier);

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // create app and run it
    let res = run_app(&mut terminal, app, args.city);

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}
