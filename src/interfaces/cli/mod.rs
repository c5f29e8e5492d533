//! Command-line interface of the `xtalsym` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::io::format::xtalsym_output;

const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Logs the `xtalsym` heading to the `xtalsym-output` logger.
pub fn log_heading() {
    let version = if let Some(ver) = VERSION {
        format!("v{ver}")
    } else {
        "v unknown".to_string()
    };
    xtalsym_output!("╭───────────────────────────────────────────────────────────────────────────────────────╮");
    xtalsym_output!("│                                                                                       │");
    xtalsym_output!("│   x   x  ttttt    a    l        ssss  y   y  m   m                                    │");
    xtalsym_output!("│    x x     t     a a   l       s       y y   mm mm                                    │");
    xtalsym_output!("│     x      t    aaaaa  l        sss     y    m m m                                    │");
    xtalsym_output!("│    x x     t    a   a  l           s    y    m   m                                    │");
    xtalsym_output!("│   x   x    t    a   a  lllll   ssss     y    m   m                                    │");
    xtalsym_output!("│                                                                                       │");
    xtalsym_output!("│   Space groups, unit cells and point groups                           {version:>13}   │");
    xtalsym_output!("╰───────────────────────────────────────────────────────────────────────────────────────╯");
    xtalsym_output!("");
}

/// Command-line arguments of the `xtalsym` binary.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a YAML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the file receiving the report output. The main log is written next to it with
    /// the `.log` extension.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Logs debug messages to the main log.
    #[arg(short, long)]
    pub debug: bool,
}
