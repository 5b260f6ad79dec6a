//! Plain-text rendering of the verification report.
//!
//! Every writer targets a [`std::io::Write`] sink so the binary can stream
//! to stdout while tests render into a `Vec<u8>`. Phase banners are written
//! by the caller before each pass starts; the functions here render the
//! body of a phase.

use std::fmt::Display;
use std::io::{self, Write};

use crate::cross_check::CrossCheckReport;
use crate::grouping::FamilyGroups;
use crate::household::{FamilyRecord, MemberRecord};

// ── Constants ────────────────────────────────────────────────────────

/// Width of the `=` rule above and below each phase title.
pub const BANNER_WIDTH: usize = 80;

pub const FAMILY_PHASE_TITLE: &str = "FETCHING FAMILY DATA";
pub const MEMBER_PHASE_TITLE: &str = "FETCHING FAMILY MEMBERS DATA";
pub const CROSS_CHECK_PHASE_TITLE: &str = "CROSS-CHECK";
pub const COMPLETION_TITLE: &str = "DATA VERIFICATION COMPLETE";

const FAMILY_ERROR_LABEL: &str = "Error fetching family data";
const MEMBER_ERROR_LABEL: &str = "Error fetching members data";

// ── Banners ──────────────────────────────────────────────────────────

/// Write a title framed by two `=` rules.
pub fn write_banner<W: Write + ?Sized>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")
}

// ── Families ─────────────────────────────────────────────────────────

/// Write the total count followed by one block per family, 1-indexed.
pub fn write_family_report<W: Write + ?Sized>(
    out: &mut W,
    families: &[FamilyRecord],
) -> io::Result<()> {
    writeln!(out, "\nTotal Families: {}\n", families.len())?;
    for (index, family) in families.iter().enumerate() {
        write_family_block(out, index + 1, family)?;
    }
    Ok(())
}

fn write_family_block<W: Write + ?Sized>(
    out: &mut W,
    position: usize,
    family: &FamilyRecord,
) -> io::Result<()> {
    writeln!(out, "Family {position}:")?;
    writeln!(out, "  Family ID: {}", family.family_id())?;
    writeln!(out, "  Head Name: {}", family.head_name())?;
    writeln!(out, "  Age: {}", family.head_age())?;
    writeln!(out, "  Gender: {}", family.head_gender())?;
    writeln!(out, "  Mobile: {}", family.head_mobile())?;
    writeln!(out, "  Aadhaar: {}", family.head_aadhaar_number())?;
    writeln!(out, "  Ration Card: {}", family.ration_card_number())?;
    writeln!(out, "  Card Type: {}", family.ration_card_type())?;
    writeln!(out, "  Address: {}", family.address())?;
    writeln!(out, "  Family Members: {}", family.family_members())?;
    writeln!(out)
}

/// Report a failed family pass in place of the per-family blocks.
pub fn write_family_failure<W: Write + ?Sized>(out: &mut W, error: &dyn Display) -> io::Result<()> {
    writeln!(out, "{FAMILY_ERROR_LABEL}: {error}")?;
    writeln!(out, "Family records unavailable; per-family output skipped.\n")
}

// ── Members ──────────────────────────────────────────────────────────

/// Write the total member count followed by one section per family group.
///
/// `total` is the length of the member sequence before grouping.
pub fn write_member_report<W: Write + ?Sized>(
    out: &mut W,
    total: usize,
    groups: &FamilyGroups,
) -> io::Result<()> {
    writeln!(out, "\nTotal Members: {total}\n")?;
    for (family_id, members) in groups {
        writeln!(out, "Family ID {family_id} Members:")?;
        for member in members {
            write_member_lines(out, member)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_member_lines<W: Write + ?Sized>(out: &mut W, member: &MemberRecord) -> io::Result<()> {
    writeln!(out, "  - {} ({})", member.name(), member.relation_to_head())?;
    writeln!(out, "    Age: {}, Gender: {}", member.age(), member.gender())?;
    writeln!(out, "    Aadhaar: {}", member.aadhaar_number())?;
    writeln!(out, "    Status: {}", member.status())
}

/// Report a failed member pass in place of the grouped sections.
pub fn write_member_failure<W: Write + ?Sized>(out: &mut W, error: &dyn Display) -> io::Result<()> {
    writeln!(out, "{MEMBER_ERROR_LABEL}: {error}")?;
    writeln!(out, "Member records unavailable; grouped output skipped.\n")
}

// ── Cross-check ──────────────────────────────────────────────────────

/// Write the count mismatches in family order, then the orphan groups in
/// key order.
pub fn write_cross_check<W: Write + ?Sized>(
    out: &mut W,
    report: &CrossCheckReport,
) -> io::Result<()> {
    writeln!(out, "\nDeclared member count mismatches: {}", report.mismatches.len())?;
    for mismatch in &report.mismatches {
        writeln!(
            out,
            "  Family ID {}: declared {}, found {}",
            mismatch.family_id, mismatch.declared, mismatch.found
        )?;
    }
    writeln!(out, "Member groups without a family record: {}", report.orphans.len())?;
    for orphan in &report.orphans {
        let noun = if orphan.member_count == 1 { "member" } else { "members" };
        writeln!(
            out,
            "  Family ID {} ({} {noun})",
            orphan.family_id, orphan.member_count
        )?;
    }
    writeln!(out)
}

/// Note that the cross-check did not run because a pass failed.
pub fn write_cross_check_skipped<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nCross-check skipped: both datasets must load successfully.\n")
}
