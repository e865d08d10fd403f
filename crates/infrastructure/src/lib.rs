//! IP Echo Infrastructure Layer
pub mod dns;
