#![allow(dead_code)]
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

const TYPE_A: u16 = 1;
const TYPE_NS: u16 = 2;
const TYPE_CNAME: u16 = 5;
const TYPE_SOA: u16 = 6;
const TYPE_MX: u16 = 15;
const TYPE_TXT: u16 = 16;
const TYPE_AAAA: u16 = 28;

const RCODE_NXDOMAIN: u8 = 3;
const MOCK_TTL: u32 = 300;

/// Answer data served by the mock server
#[derive(Debug, Clone)]
pub enum MockRecord {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(&'static str),
    Ns(&'static str),
    Mx(u16, &'static str),
    Txt(&'static str),
    Soa {
        mname: &'static str,
        rname: &'static str,
        serial: u32,
    },
}

impl MockRecord {
    fn type_code(&self) -> u16 {
        match self {
            MockRecord::A(_) => TYPE_A,
            MockRecord::Aaaa(_) => TYPE_AAAA,
            MockRecord::Cname(_) => TYPE_CNAME,
            MockRecord::Ns(_) => TYPE_NS,
            MockRecord::Mx(..) => TYPE_MX,
            MockRecord::Txt(_) => TYPE_TXT,
            MockRecord::Soa { .. } => TYPE_SOA,
        }
    }

    fn rdata(&self) -> Vec<u8> {
        match self {
            MockRecord::A(ip) => ip.octets().to_vec(),
            MockRecord::Aaaa(ip) => ip.octets().to_vec(),
            MockRecord::Cname(target) | MockRecord::Ns(target) => encode_name(target),
            MockRecord::Mx(pref, exchange) => {
                let mut out = pref.to_be_bytes().to_vec();
                out.extend(encode_name(exchange));
                out
            }
            MockRecord::Txt(text) => {
                let mut out = vec![text.len() as u8];
                out.extend_from_slice(text.as_bytes());
                out
            }
            MockRecord::Soa {
                mname,
                rname,
                serial,
            } => {
                let mut out = encode_name(mname);
                out.extend(encode_name(rname));
                for value in [*serial, 7200, 3600, 1_209_600, 300] {
                    out.extend_from_slice(&value.to_be_bytes());
                }
                out
            }
        }
    }
}

/// Records keyed by owner name; names without records answer NXDOMAIN.
#[derive(Debug, Clone, Default)]
pub struct MockZone {
    records: HashMap<String, Vec<MockRecord>>,
}

impl MockZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, owner: &str, record: MockRecord) -> Self {
        self.records
            .entry(owner.to_lowercase())
            .or_default()
            .push(record);
        self
    }

    /// Answers as `(owner, record)` pairs; `None` for NXDOMAIN.
    ///
    /// Like a recursive resolver, a name owning a CNAME answers other types
    /// with the CNAME followed by the target's records.
    fn answer(&self, qname: &str, qtype: u16) -> Option<Vec<(String, MockRecord)>> {
        let owner = qname.to_lowercase();
        let records = self.records.get(&owner)?;

        let mut answers: Vec<(String, MockRecord)> = records
            .iter()
            .filter(|r| r.type_code() == qtype)
            .map(|r| (owner.clone(), r.clone()))
            .collect();

        if qtype != TYPE_CNAME {
            let alias = records.iter().find_map(|r| match r {
                MockRecord::Cname(target) => Some(*target),
                _ => None,
            });
            if let Some(target) = alias {
                answers.push((owner.clone(), MockRecord::Cname(target)));
                let chased = self.records.get(&target.to_lowercase());
                for record in chased.into_iter().flatten() {
                    if record.type_code() == qtype {
                        answers.push((target.to_lowercase(), record.clone()));
                    }
                }
            }
        }

        Some(answers)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    Answer,
    /// UDP replies carry TC and no answers; TCP answers normally
    TruncateUdp,
    /// Never replies
    Silent,
}

/// Mock DNS server for tests, serving UDP and TCP on the same port
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(zone: MockZone) -> Result<(Self, SocketAddr), std::io::Error> {
        Self::start_with(zone, MockBehavior::Answer).await
    }

    pub async fn start_with(
        zone: MockZone,
        behavior: MockBehavior,
    ) -> Result<(Self, SocketAddr), std::io::Error> {
        let tcp = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let local_addr = tcp.local_addr()?;
        let udp = UdpSocket::bind(local_addr).await?;

        let zone = Arc::new(zone);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = udp.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if behavior == MockBehavior::Silent {
                                continue;
                            }
                            let truncate = behavior == MockBehavior::TruncateUdp;
                            if let Some(response) = build_response(&zone, &buf[..len], truncate) {
                                let _ = udp.send_to(&response, peer).await;
                            }
                        }
                    }
                    result = tcp.accept() => {
                        if let Ok((mut stream, _)) = result {
                            let zone = zone.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                if let Some(response) = build_response(&zone, &query, false) {
                                    let mut framed = (response.len() as u16).to_be_bytes().to_vec();
                                    framed.extend(response);
                                    let _ = stream.write_all(&framed).await;
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Returns (qname, qtype, end offset of the question section)
fn parse_question(query: &[u8]) -> Option<(String, u16, usize)> {
    let mut pos = 12;
    let mut labels = Vec::new();

    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        labels.push(String::from_utf8_lossy(query.get(pos..pos + len)?).to_string());
        pos += len;
    }

    let qtype = u16::from_be_bytes([*query.get(pos)?, *query.get(pos + 1)?]);
    Some((labels.join("."), qtype, pos + 4))
}

/// Builds a response to `query`; `None` if the query is malformed
pub fn build_response(zone: &MockZone, query: &[u8], truncate: bool) -> Option<Vec<u8>> {
    let (qname, qtype, question_end) = parse_question(query)?;
    let answers = zone.answer(&qname, qtype);

    let (rcode, answers) = match answers {
        None => (RCODE_NXDOMAIN, Vec::new()),
        Some(_) if truncate => (0, Vec::new()),
        Some(records) => (0, records),
    };

    let mut response = Vec::with_capacity(512);

    // Transaction ID
    response.extend_from_slice(&query[0..2]);

    // QR=1, RD=1, TC as requested
    response.push(0x81 | if truncate { 0x02 } else { 0x00 });
    // RA=1, RCODE
    response.push(0x80 | rcode);

    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(&query[12..question_end]);

    for (owner, record) in answers {
        let rdata = record.rdata();
        if owner == qname.to_lowercase() {
            response.extend_from_slice(&[0xc0, 0x0c]); // Name pointer to question
        } else {
            response.extend(encode_name(&owner));
        }
        response.extend_from_slice(&record.type_code().to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]); // Class IN
        response.extend_from_slice(&MOCK_TTL.to_be_bytes());
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend(rdata);
    }

    Some(response)
}

/// Builds a raw query for `name`/`qtype` with the given ID
pub fn build_query(id: u16, name: &str, qtype: u16) -> Vec<u8> {
    let mut query = id.to_be_bytes().to_vec();
    query.extend_from_slice(&[0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    query.extend(encode_name(name));
    query.extend_from_slice(&qtype.to_be_bytes());
    query.extend_from_slice(&[0x00, 0x01]);
    query
}
