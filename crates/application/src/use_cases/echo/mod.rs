mod resolve_echo_query;

pub use resolve_echo_query::{EchoOutcome, ResolveEchoQueryUseCase};
