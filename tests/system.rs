use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::process::Command;

use host_lookup::report::{resolve_and_report, ExitStatus};
use host_lookup::resolver::SystemResolver;

// Numeric hosts are answered by getaddrinfo itself, so these need no network.

fn run(host: &str) -> (ExitStatus, String) {
    let mut out = vec![];
    let argv = vec![OsString::from("lookup"), OsString::from(host)];
    let status = resolve_and_report(&SystemResolver::new(), argv, &mut out).unwrap();
    (status, String::from_utf8(out).unwrap())
}

#[test]
fn ipv4_literal() {
    let (status, out) = run("127.0.0.1");
    assert_eq!(status, ExitStatus::Success);
    assert!(out.starts_with("Entry:\n"));
    assert!(out.contains(&format!("\tFamily: {}\n", libc::AF_INET)));
    assert!(out.lines().filter(|l| l.starts_with("\tAddress: ")).all(|l| l == "\tAddress: 127.0.0.1"));
}

#[test]
fn ipv6_literal() {
    let (status, out) = run("::1");
    assert_eq!(status, ExitStatus::Success);
    assert!(out.contains(&format!("\tFamily: {}\n", libc::AF_INET6)));
    assert!(out.contains("\tAddress: ::1\n"));
}

#[test]
fn hostname_with_nul_fails_generically() {
    let (status, out) = run("bad\0host");
    assert_eq!(status, ExitStatus::Failure);
    assert_eq!(out, "Failed to resolve hostname\n");
}

#[test]
fn binary_reports_non_utf8_hostname_without_panicking() {
    let output = Command::new(env!("CARGO_BIN_EXE_lookup"))
        .arg(OsStr::from_bytes(b"bad\xffhost.invalid"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Failed to resolve hostname\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn binary_prints_usage_for_missing_hostname() {
    let output = Command::new(env!("CARGO_BIN_EXE_lookup")).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage: "));
}
