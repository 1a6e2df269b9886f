use crate::error::{LookupError, Result};
use strum_macros::AsRefStr;

// Creates the provided enum and generates a TryFrom trait implementation
// to convert a raw libc integer to its equivalent variant.
macro_rules! libc_enum {
    ($(#[$meta:meta])* $vis:vis enum $name:ident ($err:ident) {
        $($variant:ident = $val:expr),*
    ,}) => {
        $(#[$meta])*
        $vis enum $name {
            $($variant = $val),*
        }

        impl TryFrom<i32> for $name {
            type Error = LookupError;

            fn try_from(v: i32) -> Result<Self> {
                match v {
                    $(x if x == $name::$variant as i32 => Ok($name::$variant),)*
                    _ => Err(LookupError::$err(v)),
                }
            }
        }
    };
}

libc_enum!(
    #[repr(i32)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
    pub enum AddressFamily (UnsupportedFamily) {
        Unspecified = libc::AF_UNSPEC,
        Inet = libc::AF_INET,
        Inet6 = libc::AF_INET6,
    }
);

libc_enum!(
    #[repr(i32)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
    pub enum SocketType (UnsupportedSocketType) {
        Any = 0,
        Stream = libc::SOCK_STREAM,
        Datagram = libc::SOCK_DGRAM,
        Raw = libc::SOCK_RAW,
    }
);

impl AddressFamily {
    pub fn raw(self) -> i32 {
        self as i32
    }
}

impl SocketType {
    pub fn raw(self) -> i32 {
        self as i32
    }
}

// Names a raw family value for log output; unknown values keep their number.
pub fn family_name(raw: i32) -> String {
    match AddressFamily::try_from(raw) {
        Ok(family) => family.as_ref().to_owned(),
        Err(_) => raw.to_string(),
    }
}

// Names a raw socket type for log output; unknown values keep their number.
pub fn socktype_name(raw: i32) -> String {
    match SocketType::try_from(raw) {
        Ok(socktype) => socktype.as_ref().to_owned(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_follow_libc_constants() {
        assert_eq!(AddressFamily::try_from(libc::AF_INET).unwrap(), AddressFamily::Inet);
        assert_eq!(AddressFamily::try_from(libc::AF_INET6).unwrap(), AddressFamily::Inet6);
        assert_eq!(AddressFamily::Unspecified.raw(), libc::AF_UNSPEC);
    }

    #[test]
    fn unknown_family_is_rejected() {
        let err = AddressFamily::try_from(libc::AF_UNIX).unwrap_err();
        assert!(matches!(err, LookupError::UnsupportedFamily(v) if v == libc::AF_UNIX));
    }

    #[test]
    fn socket_types() {
        assert_eq!(SocketType::try_from(0).unwrap(), SocketType::Any);
        assert_eq!(SocketType::try_from(libc::SOCK_DGRAM).unwrap(), SocketType::Datagram);
        assert!(SocketType::try_from(-7).is_err());
    }

    #[test]
    fn names() {
        assert_eq!(family_name(libc::AF_INET), "Inet");
        assert_eq!(family_name(-3), "-3");
        assert_eq!(socktype_name(libc::SOCK_STREAM), "Stream");
        assert_eq!(socktype_name(0), "Any");
        assert_eq!(socktype_name(-7), "-7");
    }
}
