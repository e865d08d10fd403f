pub mod forwarder;
pub mod message_builder;

pub use forwarder::UdpForwarder;
pub use message_builder::MessageBuilder;
