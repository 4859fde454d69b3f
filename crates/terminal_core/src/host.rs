//! Prompt label helpers.

/// Returns the host name shown in the prompt label.
///
/// The port is dropped. Content-addressed gateway hosts such as `<cid>.ipfs.dweb.link` lose their
/// leading CID label so the prompt stays readable.
pub fn display_host(host: &str) -> String {
    let hostname = host.split(':').next().unwrap_or_default();
    let labels = hostname.split('.').collect::<Vec<_>>();
    match labels.as_slice() {
        [_, kind, rest @ ..] if !rest.is_empty() && matches!(*kind, "ipfs" | "ipns") => {
            labels[1..].join(".")
        }
        _ => hostname.to_string(),
    }
}

/// Formats the prompt label, for example `visitor@example.com:~$`.
pub fn prompt_label(visitor: &str, host: &str) -> String {
    format!("{visitor}@{}:~$", display_host(host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_hosts_are_kept() {
        assert_eq!(display_host("example.com"), "example.com");
        assert_eq!(display_host("localhost:3000"), "localhost");
    }

    #[test]
    fn gateway_cid_label_is_dropped() {
        assert_eq!(display_host("cid.ipfs.dweb.link"), "ipfs.dweb.link");
        assert_eq!(
            display_host("k51qzi5uqu5djdc6tg7g3k1e7d7j8jx7l6d5k4z3x2y1w0v9u8i7o6p.ipns.dweb.link"),
            "ipns.dweb.link"
        );
        assert_eq!(display_host("ipfs.io"), "ipfs.io");
    }

    #[test]
    fn prompt_label_combines_visitor_and_host() {
        assert_eq!(prompt_label("visitor", "example.com:443"), "visitor@example.com:~$");
    }
}
