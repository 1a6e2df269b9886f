use std::fmt;
use std::mem;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::{LookupError, Result};
use crate::family::AddressFamily;

// AddressRecord is one (family, socket type, address) tuple of a lookup.
// Family and socket type stay raw since their numbering is platform defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    family: i32,
    socktype: i32,
    address: IpAddr,
}

impl AddressRecord {
    pub fn new(family: i32, socktype: i32, address: IpAddr) -> AddressRecord {
        AddressRecord { family, socktype, address }
    }

    /// Builds a record from the binary address payload: 4 bytes for
    /// `AF_INET`, 16 bytes for `AF_INET6`, both in network order.
    pub fn from_bytes(family: i32, socktype: i32, payload: &[u8]) -> Result<AddressRecord> {
        let address = match AddressFamily::try_from(family)? {
            AddressFamily::Inet => {
                let octets: [u8; 4] = payload
                    .try_into()
                    .map_err(|_| malformed("IPv4", payload.len()))?;
                IpAddr::V4(Ipv4Addr::from(octets))
            }
            AddressFamily::Inet6 => {
                let octets: [u8; 16] = payload
                    .try_into()
                    .map_err(|_| malformed("IPv6", payload.len()))?;
                IpAddr::V6(Ipv6Addr::from(octets))
            }
            AddressFamily::Unspecified => return Err(LookupError::UnsupportedFamily(family)),
        };
        Ok(AddressRecord { family, socktype, address })
    }

    /// Decodes one entry of a `getaddrinfo` result.
    ///
    /// # Safety
    /// `addr` must be null or point to at least `len` readable bytes.
    pub unsafe fn from_sockaddr(
        family: i32,
        socktype: i32,
        addr: *const libc::sockaddr,
        len: libc::socklen_t,
    ) -> Result<AddressRecord> {
        if addr.is_null() {
            return Err(LookupError::MalformedAddress(String::from("null address")));
        }
        let len = len as usize;
        match AddressFamily::try_from(family)? {
            AddressFamily::Inet => {
                if len < mem::size_of::<libc::sockaddr_in>() {
                    return Err(malformed("sockaddr_in", len));
                }
                let sin = std::ptr::read_unaligned(addr as *const libc::sockaddr_in);
                AddressRecord::from_bytes(family, socktype, &sin.sin_addr.s_addr.to_ne_bytes())
            }
            AddressFamily::Inet6 => {
                if len < mem::size_of::<libc::sockaddr_in6>() {
                    return Err(malformed("sockaddr_in6", len));
                }
                let sin6 = std::ptr::read_unaligned(addr as *const libc::sockaddr_in6);
                AddressRecord::from_bytes(family, socktype, &sin6.sin6_addr.s6_addr)
            }
            AddressFamily::Unspecified => Err(LookupError::UnsupportedFamily(family)),
        }
    }

    pub fn family(&self) -> i32 {
        self.family
    }

    pub fn socktype(&self) -> i32 {
        self.socktype
    }

    pub fn address(&self) -> &IpAddr {
        &self.address
    }
}

fn malformed(what: &str, len: usize) -> LookupError {
    LookupError::MalformedAddress(format!("{what} payload of {len} bytes"))
}

// The report block for one record.
impl fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Entry:")?;
        writeln!(f, "\tType: {}", self.socktype)?;
        writeln!(f, "\tFamily: {}", self.family)?;
        writeln!(f, "\tAddress: {}", self.address)
    }
}
