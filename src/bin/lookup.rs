use host_lookup::report::resolve_and_report;
use host_lookup::resolver::SystemResolver;
use std::{env, io, process::ExitCode};
use anyhow::Result;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let stdout = io::stdout();
    let status = resolve_and_report(&SystemResolver::new(), env::args_os(), &mut stdout.lock())?;
    Ok(status.into())
}
