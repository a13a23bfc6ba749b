use serde::Serialize;

/// Error document returned in place of a lookup result
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub code: &'static str,
    pub message: String,
}

impl ErrorResponse {
    fn new(code: &'static str, message: String) -> Self {
        Self {
            kind: "error",
            code,
            message,
        }
    }

    pub fn missing_domain() -> Self {
        Self::new(
            "MissingDomainParameter",
            "Domain parameter must be provided.".to_string(),
        )
    }

    pub fn dns_not_found(domain: &str) -> Self {
        Self::new(
            "DnsNotFound",
            format!(
                "Sorry, there was a problem looking up the DNS for \"{}\". Please try a different domain or retry later.",
                domain
            ),
        )
    }

    pub fn store_unavailable() -> Self {
        Self::new(
            "StoreUnavailable",
            "Sorry, the DNS cache is temporarily unavailable. Please retry later.".to_string(),
        )
    }
}
