//! Typed views over the two datasets: family heads and family members.
//!
//! Both wrap a [`Record`] and expose one accessor per known column. Every
//! accessor applies the placeholder rule, so rendering code never has to
//! handle a missing field itself.

use crate::record::Record;

// ── Family columns ───────────────────────────────────────────────────

pub const FIELD_FAMILY_ID: &str = "family_id";
pub const FIELD_HEAD_NAME: &str = "head_name";
pub const FIELD_HEAD_AGE: &str = "head_age";
pub const FIELD_HEAD_GENDER: &str = "head_gender";
pub const FIELD_HEAD_MOBILE: &str = "head_mobile";
pub const FIELD_HEAD_AADHAAR: &str = "head_aadhaar_number";
pub const FIELD_RATION_CARD_NUMBER: &str = "ration_card_number";
pub const FIELD_RATION_CARD_TYPE: &str = "ration_card_type";
pub const FIELD_ADDRESS: &str = "address";
/// Member count as declared on the family row.
pub const FIELD_FAMILY_MEMBERS: &str = "family_members";

// ── Member columns ───────────────────────────────────────────────────

pub const FIELD_NAME: &str = "name";
pub const FIELD_RELATION_TO_HEAD: &str = "relation_to_head";
pub const FIELD_AGE: &str = "age";
pub const FIELD_GENDER: &str = "gender";
pub const FIELD_AADHAAR: &str = "aadhaar_number";
pub const FIELD_STATUS: &str = "status";

// ── FamilyRecord ─────────────────────────────────────────────────────

/// One row of the families dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyRecord(Record);

impl FamilyRecord {
    pub fn new(record: Record) -> Self {
        Self(record)
    }

    pub fn family_id(&self) -> &str {
        self.0.field_or_placeholder(FIELD_FAMILY_ID)
    }

    pub fn head_name(&self) -> &str {
        self.0.field_or_placeholder(FIELD_HEAD_NAME)
    }

    pub fn head_age(&self) -> &str {
        self.0.field_or_placeholder(FIELD_HEAD_AGE)
    }

    pub fn head_gender(&self) -> &str {
        self.0.field_or_placeholder(FIELD_HEAD_GENDER)
    }

    pub fn head_mobile(&self) -> &str {
        self.0.field_or_placeholder(FIELD_HEAD_MOBILE)
    }

    pub fn head_aadhaar_number(&self) -> &str {
        self.0.field_or_placeholder(FIELD_HEAD_AADHAAR)
    }

    pub fn ration_card_number(&self) -> &str {
        self.0.field_or_placeholder(FIELD_RATION_CARD_NUMBER)
    }

    pub fn ration_card_type(&self) -> &str {
        self.0.field_or_placeholder(FIELD_RATION_CARD_TYPE)
    }

    pub fn address(&self) -> &str {
        self.0.field_or_placeholder(FIELD_ADDRESS)
    }

    /// Raw declared member count, placeholder when absent.
    pub fn family_members(&self) -> &str {
        self.0.field_or_placeholder(FIELD_FAMILY_MEMBERS)
    }

    /// Declared member count parsed as an integer.
    ///
    /// Returns `None` for a missing or non-numeric declaration.
    pub fn declared_member_count(&self) -> Option<usize> {
        self.0.get(FIELD_FAMILY_MEMBERS)?.trim().parse().ok()
    }
}

impl From<Record> for FamilyRecord {
    fn from(record: Record) -> Self {
        Self::new(record)
    }
}

// ── MemberRecord ─────────────────────────────────────────────────────

/// One row of the family-members dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord(Record);

impl MemberRecord {
    pub fn new(record: Record) -> Self {
        Self(record)
    }

    /// Foreign key to [`FamilyRecord::family_id`].
    pub fn family_id(&self) -> &str {
        self.0.field_or_placeholder(FIELD_FAMILY_ID)
    }

    pub fn name(&self) -> &str {
        self.0.field_or_placeholder(FIELD_NAME)
    }

    pub fn relation_to_head(&self) -> &str {
        self.0.field_or_placeholder(FIELD_RELATION_TO_HEAD)
    }

    pub fn age(&self) -> &str {
        self.0.field_or_placeholder(FIELD_AGE)
    }

    pub fn gender(&self) -> &str {
        self.0.field_or_placeholder(FIELD_GENDER)
    }

    pub fn aadhaar_number(&self) -> &str {
        self.0.field_or_placeholder(FIELD_AADHAAR)
    }

    pub fn status(&self) -> &str {
        self.0.field_or_placeholder(FIELD_STATUS)
    }
}

impl From<Record> for MemberRecord {
    fn from(record: Record) -> Self {
        Self::new(record)
    }
}
