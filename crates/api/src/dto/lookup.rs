use serde::Deserialize;

/// Query string of a lookup request
#[derive(Deserialize, Debug, Default)]
pub struct LookupQuery {
    pub domain: Option<String>,
    /// The literal value `update` asks for a refresh
    pub update: Option<String>,
}

impl LookupQuery {
    /// The domain exactly as the caller sent it; `None` when absent or empty.
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref().filter(|d| !d.is_empty())
    }

    pub fn force_update(&self) -> bool {
        self.update.as_deref() == Some("update")
    }
}
