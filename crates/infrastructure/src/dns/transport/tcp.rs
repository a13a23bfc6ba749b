use super::{with_timeout, DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_lookup_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP (RFC 1035 §4.2.2): every message is prefixed with its
/// length as a big-endian u16.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let length = u16::try_from(message_bytes.len()).map_err(|_| {
            DomainError::TransportError(format!(
                "DNS message too large for TCP: {} bytes",
                message_bytes.len()
            ))
        })?;

        let mut stream = with_timeout(timeout, TcpStream::connect(self.server_addr), || {
            format!("Failed to connect to {}", self.server_addr)
        })
        .await?;

        let mut framed = Vec::with_capacity(message_bytes.len() + 2);
        framed.extend_from_slice(&length.to_be_bytes());
        framed.extend_from_slice(message_bytes);

        with_timeout(timeout, stream.write_all(&framed), || {
            format!("Failed to send TCP query to {}", self.server_addr)
        })
        .await?;

        debug!(server = %self.server_addr, bytes_sent = framed.len(), "TCP query sent");

        let mut len_buf = [0u8; 2];
        with_timeout(timeout, stream.read_exact(&mut len_buf), || {
            format!("Failed to read TCP response length from {}", self.server_addr)
        })
        .await?;

        let mut response = vec![0u8; u16::from_be_bytes(len_buf) as usize];
        with_timeout(timeout, stream.read_exact(&mut response), || {
            format!("Failed to read TCP response from {}", self.server_addr)
        })
        .await?;

        debug!(server = %self.server_addr, bytes_received = response.len(), "TCP response received");

        Ok(TransportResponse { bytes: response })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}
