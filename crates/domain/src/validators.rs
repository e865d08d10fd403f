use std::net::IpAddr;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Checks that `name` (without a trailing dot) is a syntactically valid DNS
/// host name.
///
/// Labels are 1-63 characters of ASCII letters, digits, `-` and `_`, and may
/// not start with `-`. IP literals are rejected even though every dotted-quad
/// label is otherwise well formed.
pub fn is_valid_dns_name(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return false;
    }
    if name.parse::<IpAddr>().is_ok() {
        return false;
    }
    name.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') {
        return false;
    }
    label
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_regular_names() {
        assert!(is_valid_dns_name("example.com"));
        assert!(is_valid_dns_name("echo"));
        assert!(is_valid_dns_name("ip-echo.example.org"));
        assert!(is_valid_dns_name("_srv.example.com"));
    }

    #[test]
    fn test_rejects_ip_literals() {
        assert!(!is_valid_dns_name("127.0.0.1"));
        assert!(!is_valid_dns_name("::1"));
    }

    #[test]
    fn test_rejects_bad_labels() {
        assert!(!is_valid_dns_name(""));
        assert!(!is_valid_dns_name("example..com"));
        assert!(!is_valid_dns_name("-bad.example.com"));
        assert!(!is_valid_dns_name("exa mple.com"));
        assert!(!is_valid_dns_name(&format!("{}.com", "a".repeat(64))));
    }

    #[test]
    fn test_rejects_overlong_names() {
        let name = vec!["a".repeat(60); 5].join(".");
        assert!(name.len() > 253);
        assert!(!is_valid_dns_name(&name));
    }
}
