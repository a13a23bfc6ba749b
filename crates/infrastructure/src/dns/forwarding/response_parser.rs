use super::record_type_map::RecordTypeMapper;
use ferrous_lookup_domain::{DnsRecordEntry, DomainError};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{Name, RData, Record};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Answer records of collected types, in answer-section order.
    pub records: Vec<DnsRecordEntry>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self.rcode,
            ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::NotImp
        )
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let records: Vec<DnsRecordEntry> =
            message.answers().iter().filter_map(Self::to_entry).collect();

        debug!(
            rcode = ?message.response_code(),
            answers = message.answers().len(),
            records = records.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            records,
        })
    }

    /// Converts an answer record into its caller-facing form.
    ///
    /// Returns `None` for record types that are not collected.
    pub fn to_entry(record: &Record) -> Option<DnsRecordEntry> {
        let record_type = RecordTypeMapper::from_hickory(record.record_type())?;
        let entry = DnsRecordEntry::new(&record.name().to_utf8(), record_type, record.ttl());

        let entry = match record.data() {
            RData::A(a) => entry.with("ip", a.0.to_string()),
            RData::AAAA(aaaa) => entry.with("ipv6", aaaa.0.to_string()),
            RData::CNAME(cname) => entry.with("target", host(&cname.0)),
            RData::NS(ns) => entry.with("target", host(&ns.0)),
            RData::MX(mx) => entry
                .with("pri", mx.preference())
                .with("target", host(mx.exchange())),
            RData::TXT(txt) => {
                let text: String = txt
                    .txt_data()
                    .iter()
                    .map(|chunk| String::from_utf8_lossy(chunk))
                    .collect();
                entry.with("txt", text)
            }
            RData::SOA(soa) => entry
                .with("mname", host(soa.mname()))
                .with("rname", host(soa.rname()))
                .with("serial", soa.serial())
                .with("refresh", soa.refresh())
                .with("retry", soa.retry())
                .with("expire", soa.expire())
                .with("minimum-ttl", soa.minimum()),
            _ => return None,
        };

        Some(entry)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

fn host(name: &Name) -> String {
    name.to_utf8().trim_end_matches('.').to_string()
}
