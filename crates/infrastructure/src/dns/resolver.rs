use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::Transport;
use async_trait::async_trait;
use ferrous_lookup_application::ports::RecordResolver;
use ferrous_lookup_domain::dns_record::{APEX_RECORD_TYPES, WWW_RECORD_TYPES};
use ferrous_lookup_domain::{DnsRecordEntry, DnsRecordSet, DomainError, RecordType};
use futures::future::join_all;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Looks up a domain's records against a single recursive upstream.
///
/// One question per record type, all sent concurrently over UDP. A
/// truncated UDP answer is retried over TCP.
pub struct HickoryRecordResolver {
    upstream: SocketAddr,
    timeout: Duration,
}

impl HickoryRecordResolver {
    pub fn new(upstream: SocketAddr, timeout: Duration) -> Self {
        Self { upstream, timeout }
    }

    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecordEntry>, DomainError> {
        let (id, message) = MessageBuilder::build_query_with_id(name, &record_type)?;

        let mut response = self.exchange(Transport::udp(self.upstream), id, &message).await?;

        if response.truncated {
            debug!(name = %name, record_type = %record_type, "Truncated UDP answer, retrying over TCP");
            response = self.exchange(Transport::tcp(self.upstream), id, &message).await?;
        }

        if response.is_nxdomain() {
            debug!(name = %name, record_type = %record_type, "NXDOMAIN");
            return Ok(Vec::new());
        }

        if response.is_server_error() {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} {} answered {}",
                name,
                record_type,
                ResponseParser::rcode_to_status(response.rcode)
            )));
        }

        // Answers through a CNAME also carry the alias itself; keep the asked type only.
        Ok(response
            .records
            .into_iter()
            .filter(|r| r.record_type() == Some(record_type))
            .collect())
    }

    async fn exchange(
        &self,
        transport: Transport,
        id: u16,
        message: &[u8],
    ) -> Result<DnsResponse, DomainError> {
        let raw = transport.send(message, self.timeout).await?;
        let response = ResponseParser::parse(&raw.bytes)?;

        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} response id {} does not match query id {}",
                transport.protocol_name(),
                response.id,
                id
            )));
        }

        Ok(response)
    }

    /// Runs every query for `name`; failed queries contribute nothing.
    async fn collect(&self, name: &str, record_types: &[RecordType]) -> Vec<DnsRecordEntry> {
        let results = join_all(record_types.iter().map(|rt| self.query(name, *rt))).await;

        record_types
            .iter()
            .zip(results)
            .flat_map(|(rt, result)| match result {
                Ok(records) => records,
                Err(e) => {
                    warn!(name = %name, record_type = %rt, error = %e, "DNS query failed");
                    Vec::new()
                }
            })
            .collect()
    }
}

#[async_trait]
impl RecordResolver for HickoryRecordResolver {
    #[instrument(skip(self), fields(upstream = %self.upstream))]
    async fn lookup(&self, domain: &str) -> Result<DnsRecordSet, DomainError> {
        let www = format!("www.{}", domain);

        let (apex, www_records) = tokio::join!(
            self.collect(domain, &APEX_RECORD_TYPES),
            self.collect(&www, &WWW_RECORD_TYPES)
        );

        if apex.is_empty() {
            debug!(domain = %domain, "No apex records");
            return Err(DomainError::DnsNotFound(domain.to_string()));
        }

        let records = DnsRecordSet::from_merged(apex, www_records);
        debug!(domain = %domain, records = records.len(), "Lookup complete");

        Ok(records)
    }
}
