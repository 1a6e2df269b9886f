use log::debug;

use crate::addrinfo::AddrInfoList;
use crate::error::Result;
use crate::query::ResolutionQuery;
use crate::record::AddressRecord;

// AddressRecords is the handle a resolver hands back for one successful
// lookup. Dropping it releases the underlying result list.
pub trait AddressRecords {
    // Yields the records in the order the resolver produced them.
    fn records(&self) -> Box<dyn Iterator<Item = Result<AddressRecord>> + '_>;
}

// NameResolver turns a query into its address records with a single,
// blocking call.
pub trait NameResolver {
    type Lookup: AddressRecords;

    fn resolve(&self, query: &ResolutionQuery) -> Result<Self::Lookup>;
}

// SystemResolver delegates to the platform's `getaddrinfo`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> SystemResolver {
        SystemResolver
    }
}

impl AddressRecords for AddrInfoList {
    fn records(&self) -> Box<dyn Iterator<Item = Result<AddressRecord>> + '_> {
        Box::new(self.iter())
    }
}

impl NameResolver for SystemResolver {
    type Lookup = AddrInfoList;

    fn resolve(&self, query: &ResolutionQuery) -> Result<AddrInfoList> {
        let list = AddrInfoList::lookup(query);
        if let Err(e) = &list {
            debug!("lookup of {} failed: {}", query.hostname().to_string_lossy(), e);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    impl AddressRecords for Vec<AddressRecord> {
        fn records(&self) -> Box<dyn Iterator<Item = Result<AddressRecord>> + '_> {
            Box::new(self.iter().cloned().map(Ok))
        }
    }

    #[test]
    fn system_resolver_handles_numeric_hosts() {
        let lookup = SystemResolver::new().resolve(&ResolutionQuery::new("127.0.0.1")).unwrap();
        let first = lookup.records().next().unwrap().unwrap();
        assert_eq!(first.address(), &IpAddr::V4(Ipv4Addr::LOCALHOST));
    }

    #[test]
    fn vec_records_keep_order() {
        let records = vec![
            AddressRecord::new(libc::AF_INET, 0, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2))),
            AddressRecord::new(libc::AF_INET, 0, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))),
        ];
        let seen: Vec<_> = records.records().map(|r| r.unwrap()).collect();
        assert_eq!(seen, records);
    }
}
