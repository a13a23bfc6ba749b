pub mod record;
pub mod record_type;

pub use record::{DnsRecordEntry, DnsRecordSet};
pub use record_type::{RecordType, APEX_RECORD_TYPES, WWW_RECORD_TYPES};
