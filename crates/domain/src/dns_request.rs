use super::RecordType;
use std::net::IpAddr;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub client_ip: IpAddr,
}

impl DnsRequest {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType, client_ip: IpAddr) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            client_ip,
        }
    }

    /// Labels of the queried name, root label and empty labels removed.
    pub fn labels(&self) -> Vec<&str> {
        self.domain
            .trim_end_matches('.')
            .split('.')
            .filter(|label| !label.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_labels_strip_root() {
        let request = DnsRequest::new(
            "24.Mask.cidr.",
            RecordType::A,
            IpAddr::V4(Ipv4Addr::LOCALHOST),
        );
        assert_eq!(request.labels(), vec!["24", "Mask", "cidr"]);
    }

    #[test]
    fn test_labels_of_root_name_is_empty() {
        let request = DnsRequest::new(".", RecordType::TXT, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert!(request.labels().is_empty());
    }
}
