use std::fmt;
use std::sync::Arc;

const CLASS_IN: u16 = 1;
const TYPE_A: u16 = 1;
const TYPE_AAAA: u16 = 28;

/// Requested record type of a question.
///
/// Only the two address types carry meaning for echo resolution; every other
/// type is kept as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    Other(u16),
}

impl RecordType {
    pub fn is_address(&self) -> bool {
        matches!(self, RecordType::A | RecordType::AAAA)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::Other(_) => "OTHER",
        }
    }
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        match code {
            TYPE_A => RecordType::A,
            TYPE_AAAA => RecordType::AAAA,
            other => RecordType::Other(other),
        }
    }
}

impl From<RecordType> for u16 {
    fn from(record_type: RecordType) -> Self {
        match record_type {
            RecordType::A => TYPE_A,
            RecordType::AAAA => TYPE_AAAA,
            RecordType::Other(code) => code,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::Other(code) => write!(f, "TYPE{}", code),
            known => f.write_str(known.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryClass {
    Internet,
    Other(u16),
}

impl From<u16> for QueryClass {
    fn from(code: u16) -> Self {
        match code {
            CLASS_IN => QueryClass::Internet,
            other => QueryClass::Other(other),
        }
    }
}

/// A single question from an incoming query.
/// The name is kept exactly as the client sent it, trailing dot included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Arc<str>,
    pub class: QueryClass,
    pub record_type: RecordType,
}

impl Question {
    pub fn new(name: impl Into<Arc<str>>, class: QueryClass, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            class,
            record_type,
        }
    }

    /// Shorthand for an Internet-class question.
    pub fn internet(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self::new(name, QueryClass::Internet, record_type)
    }
}
