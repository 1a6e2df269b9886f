use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use itertools::Itertools;
use log::debug;

use crate::error::{map_io_err, LookupError, Result};
use crate::query::ResolutionQuery;
use crate::record::AddressRecord;
use crate::resolver::{AddressRecords, NameResolver};

pub const RESOLUTION_FAILURE: &str = "Failed to resolve hostname";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> ExitCode {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Failure => ExitCode::FAILURE,
        }
    }
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} <hostname>")
}

// Checks that exactly one hostname follows the program name. Arguments are
// taken as raw OS strings; the hostname bytes go to the resolver untouched.
pub fn parse_args<I>(args: I) -> Result<OsString>
where I: IntoIterator<Item = OsString> {
    let mut args = args.into_iter();
    let program = args.next().unwrap_or_else(|| OsString::from("lookup"));
    match (args.next(), args.next()) {
        (Some(hostname), None) => Ok(hostname),
        _ => Err(LookupError::Usage(program.to_string_lossy().into_owned())),
    }
}

// Validates the arguments, resolves the hostname once and writes one entry
// per record to `out`. Only a failing writer surfaces as an error; every
// lookup problem ends in a failure status after a single line of text.
pub fn resolve_and_report<R, I, W>(resolver: &R, args: I, out: &mut W) -> Result<ExitStatus>
where
    R: NameResolver,
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    let hostname = match parse_args(args) {
        Ok(hostname) => hostname,
        Err(LookupError::Usage(program)) => {
            writeln!(out, "{}", usage(&program)).map_err(|e| map_io_err("write", &e))?;
            return Ok(ExitStatus::Failure);
        }
        Err(e) => return Err(e),
    };

    let query = ResolutionQuery::new(hostname);
    let lookup = match resolver.resolve(&query) {
        Ok(lookup) => lookup,
        Err(e) => return report_failure(out, &query, &e),
    };

    // `lookup` is dropped, and the list released, on every return below.
    let mut resolved: Vec<AddressRecord> = vec![];
    for record in lookup.records() {
        match record {
            Ok(record) => {
                write!(out, "{}", record).map_err(|e| map_io_err("write", &e))?;
                resolved.push(record);
            }
            Err(e) => return report_failure(out, &query, &e),
        }
    }
    out.flush().map_err(|e| map_io_err("flush", &e))?;

    debug!(
        "{} resolved to {} record(s): [{}]",
        query.hostname().to_string_lossy(),
        resolved.len(),
        resolved.iter().map(|r| r.address()).join(", ")
    );
    Ok(ExitStatus::Success)
}

fn report_failure<W: Write>(out: &mut W, query: &ResolutionQuery, err: &LookupError) -> Result<ExitStatus> {
    debug!("could not resolve {}: {}", query.hostname().to_string_lossy(), err);
    writeln!(out, "{}", RESOLUTION_FAILURE).map_err(|e| map_io_err("write", &e))?;
    Ok(ExitStatus::Failure)
}
