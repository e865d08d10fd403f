use super::RecordType;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Address record synthesized from a question name.
///
/// The variant follows the family of the embedded literal, not the type the
/// client asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesizedRecord {
    V4 {
        name: Arc<str>,
        ttl: u32,
        address: Ipv4Addr,
    },
    V6 {
        name: Arc<str>,
        ttl: u32,
        address: Ipv6Addr,
    },
}

impl SynthesizedRecord {
    pub fn new(name: Arc<str>, ttl: u32, address: IpAddr) -> Self {
        match address {
            IpAddr::V4(address) => Self::V4 { name, ttl, address },
            IpAddr::V6(address) => Self::V6 { name, ttl, address },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::V4 { name, .. } | Self::V6 { name, .. } => name,
        }
    }

    pub fn ttl(&self) -> u32 {
        match self {
            Self::V4 { ttl, .. } | Self::V6 { ttl, .. } => *ttl,
        }
    }

    pub fn address(&self) -> IpAddr {
        match self {
            Self::V4 { address, .. } => IpAddr::V4(*address),
            Self::V6 { address, .. } => IpAddr::V6(*address),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            Self::V4 { .. } => RecordType::A,
            Self::V6 { .. } => RecordType::AAAA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_follows_address_family() {
        let v4 = SynthesizedRecord::new("1.2.3.4.echo.".into(), 60, "1.2.3.4".parse().unwrap());
        assert_eq!(v4.record_type(), RecordType::A);
        assert_eq!(v4.name(), "1.2.3.4.echo.");
        assert_eq!(v4.ttl(), 60);

        let v6 = SynthesizedRecord::new("::1.echo.".into(), 30, "::1".parse().unwrap());
        assert_eq!(v6.record_type(), RecordType::AAAA);
        assert_eq!(v6.address(), "::1".parse::<IpAddr>().unwrap());
    }
}
