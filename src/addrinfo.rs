use std::ffi::CStr;
use std::marker::PhantomData;
use std::ptr;

use log::{debug, trace};

use crate::error::{LookupError, Result};
use crate::family::{family_name, socktype_name};
use crate::query::ResolutionQuery;
use crate::record::AddressRecord;

/// Owned result list of a successful `getaddrinfo` call.
///
/// The list belongs to the system resolver library; it is walked through
/// `ai_next` and handed back with a single `freeaddrinfo` on the head when
/// the value is dropped.
#[derive(Debug)]
pub struct AddrInfoList {
    head: *mut libc::addrinfo,
}

impl AddrInfoList {
    // Runs one blocking `getaddrinfo` for the query's hostname with no service.
    pub fn lookup(query: &ResolutionQuery) -> Result<AddrInfoList> {
        let host = query.c_hostname()?;
        let hints = query.hints().to_addrinfo();
        let mut head: *mut libc::addrinfo = ptr::null_mut();

        debug!(
            "getaddrinfo for {} (family {}, socktype {})",
            query.hostname().to_string_lossy(),
            query.hints().family().as_ref(),
            query.hints().socktype().as_ref()
        );
        let code = unsafe { libc::getaddrinfo(host.as_ptr(), ptr::null(), &hints, &mut head) };
        if code != 0 {
            return Err(LookupError::Resolution(code, gai_message(code)));
        }
        Ok(AddrInfoList { head })
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            cursor: self.head,
            _list: PhantomData,
        }
    }
}

impl Drop for AddrInfoList {
    fn drop(&mut self) {
        if !self.head.is_null() {
            trace!("freeaddrinfo");
            unsafe { libc::freeaddrinfo(self.head) };
        }
    }
}

impl<'a> IntoIterator for &'a AddrInfoList {
    type Item = Result<AddressRecord>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

// Walks the list in resolver order, decoding every node.
pub struct Iter<'a> {
    cursor: *const libc::addrinfo,
    _list: PhantomData<&'a AddrInfoList>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Result<AddressRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_null() {
            return None;
        }
        // The node lives as long as the list borrowed by this iterator.
        let node = unsafe { &*self.cursor };
        self.cursor = node.ai_next;

        trace!(
            "decoding node: family {}, socktype {}, addrlen {}",
            family_name(node.ai_family),
            socktype_name(node.ai_socktype),
            node.ai_addrlen
        );
        Some(unsafe {
            AddressRecord::from_sockaddr(node.ai_family, node.ai_socktype, node.ai_addr, node.ai_addrlen)
        })
    }
}

fn gai_message(code: i32) -> String {
    if code == libc::EAI_SYSTEM {
        return std::io::Error::last_os_error().to_string();
    }
    let msg = unsafe { libc::gai_strerror(code) };
    if msg.is_null() {
        return format!("getaddrinfo error {code}");
    }
    unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned()
}
