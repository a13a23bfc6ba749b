use super::RecordType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single resource record as exposed to API callers.
///
/// Records are heterogeneous: every entry carries `host`, `class`, `ttl`
/// and the `type` discriminator, followed by type-specific scalar fields
/// (`ip`, `target`, `pri`, `serial`, ...). Field insertion order is kept
/// in the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DnsRecordEntry(Map<String, Value>);

impl DnsRecordEntry {
    pub fn new(host: &str, record_type: RecordType, ttl: u32) -> Self {
        let mut fields = Map::new();
        fields.insert("host".to_string(), Value::from(host.trim_end_matches('.')));
        fields.insert("class".to_string(), Value::from("IN"));
        fields.insert("ttl".to_string(), Value::from(ttl));
        fields.insert("type".to_string(), Value::from(record_type.as_str()));
        Self(fields)
    }

    /// Appends a type-specific field.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn host(&self) -> Option<&str> {
        self.0.get("host").and_then(Value::as_str)
    }

    pub fn record_type(&self) -> Option<RecordType> {
        self.0
            .get("type")
            .and_then(Value::as_str)
            .and_then(|t| t.parse().ok())
    }

    /// Serialized JSON form, also used as the sort key.
    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }
}

/// Ordered record sequence for one lookup (apex plus `www.`).
///
/// The order is part of the response contract: entries are sorted by
/// the byte order of their serialized form. Identical records from the
/// apex and `www.` answers are both kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DnsRecordSet(Vec<DnsRecordEntry>);

impl DnsRecordSet {
    pub fn from_merged(apex: Vec<DnsRecordEntry>, www: Vec<DnsRecordEntry>) -> Self {
        let mut keyed: Vec<(String, DnsRecordEntry)> = apex
            .into_iter()
            .chain(www)
            .map(|entry| (entry.to_json(), entry))
            .collect();

        keyed.sort_by(|a, b| a.0.cmp(&b.0));

        Self(keyed.into_iter().map(|(_, entry)| entry).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DnsRecordEntry> {
        self.0.iter()
    }

    /// JSON array text stored in the cache and returned as `data`.
    pub fn to_json(&self) -> String {
        Value::Array(self.0.iter().map(|e| Value::Object(e.0.clone())).collect()).to_string()
    }
}
