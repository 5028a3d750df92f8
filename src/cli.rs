use std::path::PathBuf;

use clap::builder::{styling::AnsiColor, Styles};
use clap::Parser;
use log::LevelFilter;

use crate::alerts;

const ABOUT: &str = "Open-Meteo weather TUI";

const LONG_ABOUT: &str = "
TUI for looking up current weather by city name, sourced from the free Open-Meteo
APIs (no key required).

Type a city name and press Enter: the name is geocoded, today's forecast for the
best match is fetched, and the widget shows current conditions plus the next four
hours. When rain or mild temperatures are expected within those hours, a desktop
notification is raised through notify-send (if the host has it).
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(help = "City to look up on startup (e.g. Paris, Montreal, Tokyo)")]
    pub city: Option<String>,

    #[arg(
        long,
        value_name = "CELSIUS",
        default_value_t = alerts::TEMP_THRESHOLD,
        help = "Temperature above which a mild-weather alert fires"
    )]
    pub temp_threshold: f32,

    #[arg(long, help = "Never raise desktop notifications")]
    pub no_notify: bool,

    #[arg(
        long,
        value_name = "PATH",
        help = "Append logs to this file (logging is off without it)"
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "info",
        help = "Log level: off, error, warn, info, debug or trace"
    )]
    pub log_level: LevelFilter,
}
