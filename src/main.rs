use anyhow::Result;
use clap::{Arg, Command};

use ohmygpu::commands;

fn main() -> Result<()> {
    let matches = Command::new("ohmygpu")
        .about("Detects the active GPU and reports its name, memory and utilization")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue)
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the result as JSON")
                .action(clap::ArgAction::SetTrue)
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Log each vendor probe to stderr")
                .action(clap::ArgAction::SetTrue)
        )
        .get_matches();

    ohmygpu::init_logging(matches.get_flag("verbose"));

    if matches.get_flag("version") {
        return commands::version();
    }

    commands::probe(&matches)
}
