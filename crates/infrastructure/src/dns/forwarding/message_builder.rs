//! Wire-format helpers for the fallthrough path.

use hickory_proto::op::Message;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use hickory_server::authority::MessageRequest;
use ipecho_domain::DomainError;

/// Encodes requests for the upstream server and parses its replies
pub struct MessageBuilder;

impl MessageBuilder {
    /// Re-encode an incoming request unchanged for the upstream.
    ///
    /// ID, flags, every question in its original casing and the EDNS OPT
    /// record all go out as the client sent them.
    pub fn encode_request(request: &MessageRequest) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        request.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to serialize DNS request: {}", e))
        })?;

        Ok(buf)
    }

    pub fn parse_response(bytes: &[u8]) -> Result<Message, DomainError> {
        Message::from_vec(bytes).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to parse DNS response: {}", e))
        })
    }
}
