use std::io;

use sysinfo_tool::report::is_broken_pipe;
use sysinfo_tool::{get_machine_info, logging, platform, Printer};

fn run() -> anyhow::Result<()> {
    let platform = platform::current();
    if let Err(err) = platform.enable_color_mode() {
        tracing::debug!("Colour mode not enabled: {err:#}");
    }
    colored::control::set_override(true);

    let machine_info = get_machine_info()?;
    let stdout = io::stdout();
    Printer::new(stdout.lock(), true).report(&machine_info)
}

fn main() {
    if let Err(err) = logging::init_logging() {
        eprintln!("Failed to initialize logging: {err:#}");
    }

    match run() {
        Ok(()) => {}
        Err(err) if is_broken_pipe(&err) => tracing::debug!("Output closed early: {err:#}"),
        Err(err) => tracing::error!("Report aborted: {err:#}"),
    }
}
