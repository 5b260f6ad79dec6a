//! Consistency checks between the families and members datasets.
//!
//! Two findings are reported:
//!
//! - a family whose declared member count differs from the number of
//!   member rows carrying its identifier;
//! - a member group whose identifier matches no family row.

use std::collections::HashSet;

use serde::Serialize;

use crate::grouping::FamilyGroups;
use crate::household::FamilyRecord;

/// A family whose declared member count disagrees with the members dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountMismatch {
    pub family_id: String,
    /// Declared value as it appears in the dataset (placeholder when absent).
    pub declared: String,
    pub found: usize,
}

/// A member group with no matching family row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrphanGroup {
    pub family_id: String,
    pub member_count: usize,
}

/// Outcome of [`cross_check`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrossCheckReport {
    /// In family-record order.
    pub mismatches: Vec<CountMismatch>,
    /// In group key order.
    pub orphans: Vec<OrphanGroup>,
}

impl CrossCheckReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.orphans.is_empty()
    }
}

/// Compare family rows against grouped member rows.
///
/// Duplicate family identifiers are each checked against the same group.
pub fn cross_check(families: &[FamilyRecord], groups: &FamilyGroups) -> CrossCheckReport {
    let mismatches = families
        .iter()
        .filter_map(|family| {
            let found = groups.get(family.family_id()).map_or(0, Vec::len);
            match family.declared_member_count() {
                Some(declared) if declared == found => None,
                _ => Some(CountMismatch {
                    family_id: family.family_id().to_string(),
                    declared: family.family_members().to_string(),
                    found,
                }),
            }
        })
        .collect();

    let known: HashSet<&str> = families.iter().map(FamilyRecord::family_id).collect();
    let orphans = groups
        .iter()
        .filter(|(id, _)| !known.contains(id.as_str()))
        .map(|(id, members)| OrphanGroup {
            family_id: id.clone(),
            member_count: members.len(),
        })
        .collect();

    CrossCheckReport {
        mismatches,
        orphans,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group_members_by_family;
    use crate::household::MemberRecord;

    fn family(id: &str, declared: &str) -> FamilyRecord {
        FamilyRecord::new([("family_id", id), ("family_members", declared)].into_iter().collect())
    }

    fn member(id: &str) -> MemberRecord {
        MemberRecord::new([("family_id", id)].into_iter().collect())
    }

    #[test]
    fn consistent_datasets_are_clean() {
        let families = vec![family("1", "2"), family("2", "1")];
        let groups = group_members_by_family(vec![member("1"), member("2"), member("1")]);

        let report = cross_check(&families, &groups);
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn declared_count_mismatch_is_reported() {
        let families = vec![family("1", "3"), family("2", "0")];
        let groups = group_members_by_family(vec![member("1")]);

        let report = cross_check(&families, &groups);
        assert_eq!(
            report.mismatches,
            vec![CountMismatch {
                family_id: "1".into(),
                declared: "3".into(),
                found: 1,
            }]
        );
        assert!(report.orphans.is_empty());
    }

    #[test]
    fn non_numeric_declaration_is_a_mismatch() {
        let families = vec![FamilyRecord::new([("family_id", "1")].into_iter().collect())];
        let groups = group_members_by_family(vec![member("1")]);

        let report = cross_check(&families, &groups);
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(report.mismatches[0].declared, "N/A");
    }

    #[test]
    fn unknown_family_ids_are_orphans() {
        let families = vec![family("1", "1")];
        let groups = group_members_by_family(vec![
            member("1"),
            member("9"),
            member("9"),
            MemberRecord::new([("name", "nobody")].into_iter().collect()),
        ]);

        let report = cross_check(&families, &groups);
        assert!(report.mismatches.is_empty());
        assert_eq!(
            report.orphans,
            vec![
                OrphanGroup {
                    family_id: "9".into(),
                    member_count: 2,
                },
                OrphanGroup {
                    family_id: "N/A".into(),
                    member_count: 1,
                },
            ]
        );
    }

    #[test]
    fn report_serializes_both_lists() {
        let report = CrossCheckReport {
            mismatches: vec![],
            orphans: vec![OrphanGroup {
                family_id: "4".into(),
                member_count: 2,
            }],
        };
        let parsed: serde_json::Value =
            serde_json::to_value(&report).expect("serialization should succeed");
        assert!(parsed["mismatches"].as_array().is_some_and(Vec::is_empty));
        assert_eq!(parsed["orphans"][0]["family_id"], "4");
        assert_eq!(parsed["orphans"][0]["member_count"], 2);
    }
}
