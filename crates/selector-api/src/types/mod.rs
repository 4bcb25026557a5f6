mod candidate;
mod kind;

pub use candidate::Candidate;
pub use kind::RecordKind;
