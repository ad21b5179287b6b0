//! Console report for the detected GPU.

use crate::core::gpu_info::GpuInfo;
use crate::core::probe_chain::ProbeChain;
use crate::platform::command::CommandRunner;
use colored::*;
use std::io::{self, Write};

/// Width of the label column, including the trailing padding
const LABEL_WIDTH: usize = 16;

const BANNER: &str = "OH MY GPU:";
const CONFIRMATION: &str = "GPU is fine.";
const NOT_FOUND: &str = "[ERROR] GPU not found!";
const CHECK_DRIVERS: &str = "[ERROR] Make sure GPU drivers are installed.";

/// Write the human-readable report
///
/// With `styled` set, the same text is decorated with ANSI colors; the visible
/// characters do not change.
pub fn render_report<W: Write>(info: Option<&GpuInfo>, out: &mut W, styled: bool) -> io::Result<()> {
    match info {
        Some(gpu) => {
            writeln!(out)?;
            writeln!(out, "{}", paint(BANNER, styled, |s| s.bold().bright_cyan()))?;
            writeln!(out)?;
            write_field(out, "GPU model:", &gpu.name, styled)?;
            write_field(out, "Total memory:", &gpu.total_memory, styled)?;
            write_field(out, "Used memory:", &gpu.used_memory, styled)?;
            write_field(out, "Utilization:", &gpu.utilization, styled)?;
            writeln!(out)?;
            writeln!(out, "{}", paint(CONFIRMATION, styled, |s| s.green()))?;
        }
        None => {
            writeln!(out, "{}", paint(NOT_FOUND, styled, |s| s.red().bold()))?;
            writeln!(out, "{}", paint(CHECK_DRIVERS, styled, |s| s.red()))?;
        }
    }
    Ok(())
}

/// Write the result as JSON: the four fields, or `null` when nothing was found
pub fn render_json<W: Write>(info: Option<&GpuInfo>, out: &mut W) -> crate::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &info)?;
    writeln!(out)?;
    Ok(())
}

/// Detect the GPU and print the report to stdout
pub fn report(runner: &dyn CommandRunner, styled: bool) -> io::Result<Option<GpuInfo>> {
    let info = ProbeChain::default().detect(runner);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_report(info.as_ref(), &mut out, styled)?;
    out.flush()?;

    Ok(info)
}

fn write_field<W: Write>(out: &mut W, label: &str, value: &str, styled: bool) -> io::Result<()> {
    let padding = " ".repeat(LABEL_WIDTH.saturating_sub(label.len()));
    writeln!(out, "{}{}{}", paint(label, styled, |s| s.bold()), padding, value)
}

fn paint(text: &str, styled: bool, style: impl FnOnce(&str) -> ColoredString) -> String {
    if styled {
        style(text).to_string()
    } else {
        text.to_string()
    }
}
