pub mod dns_server_mock;

pub use dns_server_mock::{build_query, build_response, MockBehavior, MockDnsServer, MockRecord, MockZone};
