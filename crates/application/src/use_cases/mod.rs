pub mod echo;

pub use echo::{EchoOutcome, ResolveEchoQueryUseCase};
