pub mod forwarding;
pub mod record_map;
pub mod server;

pub use forwarding::{MessageBuilder, UdpForwarder};
pub use server::DnsServerHandler;
