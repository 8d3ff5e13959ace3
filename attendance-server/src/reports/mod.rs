//! Admin reports (管理员报表)
//!
//! Derived views over the registry and the ledger:
//! - 未缴费报表: dates attended without payment
//! - 不活跃会员: attendance count + last attendance date, filtered

use std::collections::HashMap;

use serde::Deserialize;
use shared::models::{InactiveMember, Member, UnpaidMember};

use crate::ledger::AttendanceRecord;

/// Unpaid dates per member, newest first.
///
/// Members are listed in registry order and only when they have at least
/// one unpaid date. `records` must be sorted by date ascending.
pub fn unpaid_report(members: &[Member], records: &[AttendanceRecord]) -> Vec<UnpaidMember> {
    let mut unpaid: HashMap<i64, Vec<String>> = HashMap::new();
    for record in records.iter().rev() {
        for id in record.unpaid() {
            unpaid.entry(id).or_default().push(record.date.clone());
        }
    }

    members
        .iter()
        .filter_map(|m| {
            unpaid.remove(&m.id).map(|unpaid_dates| UnpaidMember {
                member_id: m.id,
                name: m.name.clone(),
                unpaid_dates,
            })
        })
        .collect()
}

/// Filter for the inactive members report
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InactiveFilter {
    /// YYYY-MM-DD; members whose last attendance is before this date (or who never attended)
    pub cutoff: Option<String>,
    /// Members with at most this many attendances (0 disables)
    pub max_attendance: Option<usize>,
}

impl InactiveFilter {
    fn is_empty(&self) -> bool {
        self.cutoff.is_none() && self.max_attendance.unwrap_or(0) == 0
    }

    fn matches(&self, row: &InactiveMember) -> bool {
        let by_cutoff = self.cutoff.as_deref().is_some_and(|cutoff| {
            row.last_attendance_date
                .as_deref()
                .is_none_or(|last| last < cutoff)
        });
        let by_count = self
            .max_attendance
            .is_some_and(|max| max > 0 && row.attendance_count <= max);
        by_cutoff || by_count
    }
}

/// Attendance count and last date per member, in registry order.
/// With an empty filter every member is returned.
pub fn inactive_members(
    members: &[Member],
    records: &[AttendanceRecord],
    filter: &InactiveFilter,
) -> Vec<InactiveMember> {
    let mut stats: HashMap<i64, (usize, &str)> = HashMap::new();
    for record in records {
        for &id in &record.users {
            let entry = stats.entry(id).or_insert((0, record.date.as_str()));
            entry.0 += 1;
            if record.date.as_str() > entry.1 {
                entry.1 = record.date.as_str();
            }
        }
    }

    members
        .iter()
        .map(|m| {
            let (count, last) = stats
                .get(&m.id)
                .map_or((0, None), |(c, d)| (*c, Some(d.to_string())));
            InactiveMember {
                member_id: m.id,
                name: m.name.clone(),
                attendance_count: count,
                last_attendance_date: last,
            }
        })
        .filter(|row| filter.is_empty() || filter.matches(row))
        .collect()
}
