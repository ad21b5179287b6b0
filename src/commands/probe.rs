use crate::core::probe_chain::ProbeChain;
use crate::platform::command::{CommandRunner, SystemCommandRunner};
use crate::ui::report::{self, render_json};
use anyhow::{Context, Result};
use clap::ArgMatches;
use std::io::{self, IsTerminal, Write};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    run(&SystemCommandRunner, matches.get_flag("json"))
}

/// Probe and print. A missing GPU is reported on stdout, not as an error.
pub fn run(runner: &dyn CommandRunner, json: bool) -> Result<()> {
    if json {
        let info = ProbeChain::default().detect(runner);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        render_json(info.as_ref(), &mut out).context("Failed to write JSON report")?;
        out.flush().context("Failed to flush stdout")?;
        return Ok(());
    }

    let styled = io::stdout().is_terminal();
    let info = report::report(runner, styled).context("Failed to write GPU report")?;

    if info.is_none() {
        log::info!("No GPU detected");
    }

    Ok(())
}
