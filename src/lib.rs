pub mod addrinfo;
pub mod error;
pub mod family;
pub mod query;
pub mod record;
pub mod report;
pub mod resolver;
