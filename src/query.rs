use std::ffi::{CString, OsStr, OsString};
use std::os::unix::ffi::OsStrExt;

use crate::error::{LookupError, Result};
use crate::family::{AddressFamily, SocketType};

// The hints handed to the resolver alongside the hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupHints {
    family: AddressFamily,
    socktype: SocketType,
    protocol: i32,
    flags: i32,
}

impl Default for LookupHints {
    // Either IPv4 or IPv6, no preferred socket type, no flags.
    fn default() -> Self {
        LookupHints {
            family: AddressFamily::Unspecified,
            socktype: SocketType::Any,
            protocol: 0,
            flags: 0,
        }
    }
}

impl LookupHints {
    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn socktype(&self) -> SocketType {
        self.socktype
    }

    // Builds the `addrinfo` hint structure. Every field not named here,
    // including all pointers, must be zero.
    pub fn to_addrinfo(&self) -> libc::addrinfo {
        let mut hints: libc::addrinfo = unsafe { std::mem::zeroed() };
        hints.ai_family = self.family.raw();
        hints.ai_socktype = self.socktype.raw();
        hints.ai_protocol = self.protocol;
        hints.ai_flags = self.flags;
        hints
    }
}

// ResolutionQuery is a single hostname lookup. No service is ever requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionQuery {
    hostname: OsString,
    hints: LookupHints,
}

impl ResolutionQuery {
    pub fn new(hostname: impl Into<OsString>) -> ResolutionQuery {
        ResolutionQuery {
            hostname: hostname.into(),
            hints: LookupHints::default(),
        }
    }

    // The hostname as given, which need not be valid UTF-8.
    pub fn hostname(&self) -> &OsStr {
        &self.hostname
    }

    pub fn hints(&self) -> &LookupHints {
        &self.hints
    }

    pub fn c_hostname(&self) -> Result<CString> {
        CString::new(self.hostname.as_bytes())
            .map_err(|e| LookupError::InvalidHostname(self.hostname.to_string_lossy().into_owned(), e.to_string()))
    }
}
