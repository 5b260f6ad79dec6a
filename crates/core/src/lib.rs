//! `household-core` -- records, parsing, grouping and report rendering for
//! the household CSV verifier.
//!
//! This crate does no network I/O. It turns raw delimited text into typed
//! family and member records and renders the verification report into any
//! [`std::io::Write`] sink.

pub mod cross_check;
pub mod error;
pub mod grouping;
pub mod household;
pub mod parser;
pub mod record;
pub mod report;

pub use cross_check::{cross_check, CrossCheckReport};
pub use error::ParseError;
pub use grouping::{group_members_by_family, FamilyGroups};
pub use household::{FamilyRecord, MemberRecord};
pub use parser::{parse_families, parse_members, parse_records};
pub use record::{Record, PLACEHOLDER};
