//! CLI argument parsing

use clap::Parser;

#[derive(Parser)]
#[command(name = "rp5ctl")]
#[command(author, version, about = "Raspberry Pi 5 power and AV controller", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Command bytes to send, as hex values (e.g. 1, a, ff, 0x1f)
    pub tokens: Vec<String>,
}
