//! The verification run: two independent fetch → parse → report passes,
//! an optional cross-check, and the completion banner.
//!
//! A failing pass is reported inline and never stops the run. The family
//! report is fully written before the member pass starts.

use std::io::{self, Write};

use household_core::report::{
    self, COMPLETION_TITLE, CROSS_CHECK_PHASE_TITLE, FAMILY_PHASE_TITLE, MEMBER_PHASE_TITLE,
};
use household_core::{
    cross_check, group_members_by_family, parse_families, parse_members, CrossCheckReport,
    FamilyGroups, FamilyRecord, MemberRecord, ParseError,
};

use crate::config::SourceConfig;
use crate::fetcher::{FetchError, SourceFetcher};

/// Which stage of a pass failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Fetch,
    Parse,
}

/// Failure of a single pass.
#[derive(Debug, thiserror::Error)]
pub enum PassError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl PassError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Fetch(_) => FailureKind::Fetch,
            Self::Parse(_) => FailureKind::Parse,
        }
    }
}

/// What a run produced, for logging and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Families reported, `None` when the family pass failed.
    pub family_count: Option<usize>,
    /// Members reported, `None` when the member pass failed.
    pub member_count: Option<usize>,
    /// Present only when the cross-check ran.
    pub cross_check: Option<CrossCheckReport>,
}

/// Fetch and parse the families dataset.
pub async fn load_families<F>(fetcher: &F, locator: &str) -> Result<Vec<FamilyRecord>, PassError>
where
    F: SourceFetcher + ?Sized,
{
    let payload = fetcher.fetch_bytes(locator).await?;
    tracing::debug!(locator, bytes = payload.len(), "Fetched family data");
    let families = parse_families(&payload)?;
    tracing::info!(count = families.len(), "Parsed family records");
    Ok(families)
}

/// Fetch and parse the family-members dataset.
pub async fn load_members<F>(fetcher: &F, locator: &str) -> Result<Vec<MemberRecord>, PassError>
where
    F: SourceFetcher + ?Sized,
{
    let payload = fetcher.fetch_bytes(locator).await?;
    tracing::debug!(locator, bytes = payload.len(), "Fetched member data");
    let members = parse_members(&payload)?;
    tracing::info!(count = members.len(), "Parsed member records");
    Ok(members)
}

/// Run both passes and write the full report to `out`.
///
/// Only a failure to write to `out` is returned as an error.
pub async fn run<F, W>(config: &SourceConfig, fetcher: &F, out: &mut W) -> io::Result<RunSummary>
where
    F: SourceFetcher + ?Sized,
    W: Write + ?Sized,
{
    report::write_banner(out, FAMILY_PHASE_TITLE)?;
    let families = match load_families(fetcher, &config.family_url).await {
        Ok(families) => {
            report::write_family_report(out, &families)?;
            Some(families)
        }
        Err(e) => {
            tracing::warn!(kind = ?e.kind(), error = %e, "Family pass failed");
            report::write_family_failure(out, &e)?;
            None
        }
    };

    report::write_banner(out, MEMBER_PHASE_TITLE)?;
    let members: Option<(usize, FamilyGroups)> =
        match load_members(fetcher, &config.members_url).await {
            Ok(members) => {
                let total = members.len();
                let groups = group_members_by_family(members);
                tracing::debug!(groups = groups.len(), "Grouped members by family");
                report::write_member_report(out, total, &groups)?;
                Some((total, groups))
            }
            Err(e) => {
                tracing::warn!(kind = ?e.kind(), error = %e, "Member pass failed");
                report::write_member_failure(out, &e)?;
                None
            }
        };

    let cross_check_report = if config.cross_check {
        report::write_banner(out, CROSS_CHECK_PHASE_TITLE)?;
        match (&families, &members) {
            (Some(families), Some((_, groups))) => {
                let findings = cross_check(families, groups);
                if !findings.is_clean() {
                    tracing::warn!(
                        mismatches = findings.mismatches.len(),
                        orphans = findings.orphans.len(),
                        findings = %serde_json::to_string(&findings).unwrap_or_default(),
                        "Datasets disagree",
                    );
                }
                report::write_cross_check(out, &findings)?;
                Some(findings)
            }
            _ => {
                report::write_cross_check_skipped(out)?;
                None
            }
        }
    } else {
        None
    };

    report::write_banner(out, COMPLETION_TITLE)?;
    out.flush()?;

    Ok(RunSummary {
        family_count: families.as_ref().map(Vec::len),
        member_count: members.as_ref().map(|(total, _)| *total),
        cross_check: cross_check_report,
    })
}
