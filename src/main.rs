use std::path::{Path, PathBuf};
use std::process;

use anyhow::{self, format_err};
use clap::Parser;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

use xtalsym::interfaces::cli::{log_heading, Cli};
use xtalsym::interfaces::input::Input;
use xtalsym::interfaces::InputHandle;
use xtalsym::io::read_xtalsym_yaml;

/// Default logging configuration used when no output file is given.
const LOG4RS_CONFIG: &str = "log4rs.yml";

/// Sets up a main log and an output file next to `output`.
fn init_logging(output: &Path, debug: bool) -> Result<(), anyhow::Error> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let main_log = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {M}:{L} - {m}{n}",
        )))
        .append(false)
        .build(output.with_extension("log"))
        .map_err(|err| format_err!(err))?;
    let output_log = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .append(false)
        .build(output)
        .map_err(|err| format_err!(err))?;
    let config = Config::builder()
        .appender(Appender::builder().build("main_log", Box::new(main_log)))
        .appender(Appender::builder().build("output", Box::new(output_log)))
        .logger(
            Logger::builder()
                .appender("output")
                .additive(false)
                .build("xtalsym-output", LevelFilter::Info),
        )
        .build(Root::builder().appender("main_log").build(level))
        .map_err(|err| format_err!(err))?;
    log4rs::init_config(config).map_err(|err| format_err!(err))?;
    Ok(())
}

fn run(cli: &Cli) -> Result<(), anyhow::Error> {
    match cli.output.as_ref() {
        Some(output) => init_logging(output, cli.debug)?,
        None => log4rs::init_file(LOG4RS_CONFIG, Default::default())
            .map_err(|err| format_err!("Unable to read {LOG4RS_CONFIG}: {err}"))?,
    }
    log_heading();

    let config = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("xtalsym.yml"));
    let input = read_xtalsym_yaml::<Input, _>(&config)
        .map_err(|err| format_err!("Unable to read {}: {err}", config.display()))?;
    input.handle()
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        log::error!("{err:#}");
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
