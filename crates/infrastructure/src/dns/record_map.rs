//! Conversion between hickory wire types and the echo domain types.

use hickory_proto::op::Query;
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{Name, RData, Record};
use ipecho_domain::{QueryClass, Question, RecordType, SynthesizedRecord};

/// Convert an incoming hickory query into a domain `Question`.
///
/// The name is rebuilt from the raw label bytes, so it keeps the client's
/// casing and characters such as `:` stay unescaped.
pub fn question_from_query(query: &Query) -> Question {
    Question::new(
        name_from_labels(query.name()),
        QueryClass::from(u16::from(query.query_class())),
        RecordType::from(u16::from(query.query_type())),
    )
}

/// Dot-joined raw labels with a trailing dot.
pub fn name_from_labels(name: &Name) -> String {
    let mut joined = String::with_capacity(name.len());
    for label in name.iter() {
        joined.push_str(&String::from_utf8_lossy(label));
        joined.push('.');
    }
    if joined.is_empty() {
        joined.push('.');
    }
    joined
}

/// Build an IN-class answer record under `owner`, the name the client asked
/// for.
pub fn to_hickory_record(owner: Name, record: &SynthesizedRecord) -> Record {
    let rdata = match record {
        SynthesizedRecord::V4 { address, .. } => RData::A(A(*address)),
        SynthesizedRecord::V6 { address, .. } => RData::AAAA(AAAA(*address)),
    };

    Record::from_rdata(owner, record.ttl(), rdata)
}
