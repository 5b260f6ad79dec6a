//! Bucketing of member records by family identifier.

use std::collections::BTreeMap;

use crate::household::MemberRecord;

/// Members keyed by family identifier, iterated in lexicographic key order.
///
/// Members without a `family_id` land under the literal `"N/A"` key like any
/// other identifier.
pub type FamilyGroups = BTreeMap<String, Vec<MemberRecord>>;

/// Partition members by family identifier, keeping arrival order within
/// each group.
pub fn group_members_by_family<I>(members: I) -> FamilyGroups
where
    I: IntoIterator<Item = MemberRecord>,
{
    let mut groups = FamilyGroups::new();
    for member in members {
        groups
            .entry(member.family_id().to_string())
            .or_default()
            .push(member);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(family_id: Option<&str>, name: &str) -> MemberRecord {
        let mut pairs = vec![("name", name)];
        if let Some(id) = family_id {
            pairs.push(("family_id", id));
        }
        MemberRecord::new(pairs.into_iter().collect())
    }

    fn names(group: &[MemberRecord]) -> Vec<&str> {
        group.iter().map(MemberRecord::name).collect()
    }

    #[test]
    fn preserves_arrival_order_within_group() {
        let groups = group_members_by_family(vec![
            member(Some("F1"), "X"),
            member(Some("F2"), "Y"),
            member(Some("F1"), "Z"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(names(&groups["F1"]), vec!["X", "Z"]);
        assert_eq!(names(&groups["F2"]), vec!["Y"]);
    }

    #[test]
    fn missing_family_id_groups_under_placeholder() {
        let groups = group_members_by_family(vec![member(None, "A"), member(Some("1"), "B"), member(None, "C")]);
        assert_eq!(names(&groups["N/A"]), vec!["A", "C"]);
    }

    #[test]
    fn keys_iterate_lexicographically() {
        let groups = group_members_by_family(vec![
            member(Some("2"), "a"),
            member(Some("10"), "b"),
            member(None, "c"),
            member(Some("1"), "d"),
        ]);
        let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["1", "10", "2", "N/A"]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_members_by_family(Vec::new()).is_empty());
    }
}
