//! The `SequenceRepository` data-proxy URI scheme parser (§6.1), part of the
//! public surface: `seqrepo+file://<path>` and `seqrepo+http(s)://<host>/seqrepo`.

use crate::error::{Error, Result};

/// A parsed data-proxy URI selecting a concrete `SequenceRepository` backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataProxyUri {
    /// `seqrepo+file://<path>` — a local directory of FASTA files.
    File(String),
    /// `seqrepo+http://<host>/seqrepo` or `seqrepo+https://...` — a remote
    /// seqrepo-rest-service-shaped endpoint.
    Http(String),
}

impl DataProxyUri {
    /// Parse a `GA4GH_VRS_DATAPROXY_URI`-style string.
    pub fn parse(uri: &str) -> Result<Self> {
        if let Some(rest) = uri.strip_prefix("seqrepo+file://") {
            if rest.is_empty() {
                return Err(Error::InvalidUri(format!(
                    "seqrepo+file:// URI is missing a path: {uri:?}"
                )));
            }
            return Ok(DataProxyUri::File(rest.to_string()));
        }
        if uri.starts_with("seqrepo+http://") || uri.starts_with("seqrepo+https://") {
            let rest = uri
                .strip_prefix("seqrepo+")
                .expect("checked by the branch guard above");
            return Ok(DataProxyUri::Http(rest.to_string()));
        }
        Err(Error::InvalidUri(format!(
            "unrecognized data-proxy URI scheme: {uri:?} (expected seqrepo+file://, seqrepo+http://, or seqrepo+https://)"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_scheme() {
        let uri = DataProxyUri::parse("seqrepo+file:///usr/local/share/seqrepo/latest").unwrap();
        assert_eq!(
            uri,
            DataProxyUri::File("/usr/local/share/seqrepo/latest".to_string())
        );
    }

    #[test]
    fn parses_https_scheme() {
        let uri = DataProxyUri::parse("seqrepo+https://example.org/seqrepo").unwrap();
        assert_eq!(
            uri,
            DataProxyUri::Http("https://example.org/seqrepo".to_string())
        );
    }

    #[test]
    fn rejects_unknown_scheme() {
        assert!(DataProxyUri::parse("postgres://localhost/db").is_err());
    }

    #[test]
    fn rejects_empty_file_path() {
        assert!(DataProxyUri::parse("seqrepo+file://").is_err());
    }
}
