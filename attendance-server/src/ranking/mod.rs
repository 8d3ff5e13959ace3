//! Ranking Aggregator (出勤排行)
//!
//! Counts per member the records whose `users` contains them, sorted by
//! count descending. Ties keep first-seen order while walking records by
//! ascending date.

use std::collections::HashMap;

use shared::models::{HIGHLIGHT_SLOTS, HighlightEntry, Member, RankingEntry};

use crate::ledger::AttendanceRecord;

/// Name shown for ids whose member no longer exists
pub const UNKNOWN_MEMBER: &str = "(unknown)";

/// Attendance count per member, in first-seen order.
///
/// `records` must be sorted by date ascending. `since` is an inclusive
/// YYYY-MM-DD lower bound.
pub fn count(records: &[AttendanceRecord], since: Option<&str>) -> Vec<(i64, usize)> {
    let mut order: Vec<(i64, usize)> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for record in records {
        if since.is_some_and(|bound| record.date.as_str() < bound) {
            continue;
        }
        for &id in &record.users {
            match index.get(&id) {
                Some(&i) => order[i].1 += 1,
                None => {
                    index.insert(id, order.len());
                    order.push((id, 1));
                }
            }
        }
    }

    // sort_by is stable
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}

/// Ranked list with names resolved against the registry
pub fn rank(
    records: &[AttendanceRecord],
    since: Option<&str>,
    members: &[Member],
) -> Vec<RankingEntry> {
    let names: HashMap<i64, &str> = members.iter().map(|m| (m.id, m.name.as_str())).collect();
    count(records, since)
        .into_iter()
        .enumerate()
        .map(|(i, (member_id, count))| RankingEntry {
            rank: i + 1,
            member_id,
            name: names
                .get(&member_id)
                .map_or_else(|| UNKNOWN_MEMBER.to_string(), |n| n.to_string()),
            count,
        })
        .collect()
}

/// All-time top members with their highlight slot (0..=6)
pub fn highlights(records: &[AttendanceRecord]) -> Vec<HighlightEntry> {
    count(records, None)
        .into_iter()
        .take(HIGHLIGHT_SLOTS)
        .enumerate()
        .map(|(slot, (member_id, count))| HighlightEntry {
            member_id,
            slot: slot as u8,
            count,
        })
        .collect()
}

/// Lookup table member id -> highlight slot
pub fn highlight_slots(records: &[AttendanceRecord]) -> HashMap<i64, u8> {
    highlights(records)
        .into_iter()
        .map(|h| (h.member_id, h.slot))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, users: &[i64]) -> AttendanceRecord {
        let mut r = AttendanceRecord::new(date);
        for &id in users {
            r.check_in(id);
        }
        r
    }

    fn member(id: i64, name: &str) -> Member {
        Member {
            id,
            name: name.to_string(),
            created_at: 0,
        }
    }

    #[test]
    fn test_kim_window_example() {
        let kim = 1;
        let records = vec![
            record("2024-01-01", &[kim]),
            record("2024-01-02", &[kim, 2]),
            record("2024-01-03", &[2]),
        ];
        let members = vec![member(kim, "Kim"), member(2, "Lee")];

        let all = rank(&records, None, &members);
        let kim_all = all.iter().find(|e| e.member_id == kim).unwrap();
        assert_eq!(kim_all.count, 2);

        let windowed = rank(&records, Some("2024-01-02"), &members);
        let kim_windowed = windowed.iter().find(|e| e.member_id == kim).unwrap();
        assert_eq!(kim_windowed.count, 1);
        assert_eq!(kim_windowed.name, "Kim");
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let records = vec![
            record("2024-01-01", &[3, 1]),
            record("2024-01-02", &[2, 1]),
            record("2024-01-03", &[2, 3]),
        ];
        let counted = count(&records, None);
        assert_eq!(counted, vec![(3, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_ranks_and_unknown_names() {
        let records = vec![record("2024-01-01", &[5, 9]), record("2024-01-02", &[9])];
        let ranked = rank(&records, None, &[member(5, "Choi")]);
        assert_eq!(
            ranked,
            vec![
                RankingEntry {
                    rank: 1,
                    member_id: 9,
                    name: UNKNOWN_MEMBER.to_string(),
                    count: 2,
                },
                RankingEntry {
                    rank: 2,
                    member_id: 5,
                    name: "Choi".to_string(),
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_highlights_take_top_seven() {
        // member i attends i times
        let mut records = Vec::new();
        for day in 1..=10 {
            let users: Vec<i64> = (day..=10).collect();
            records.push(record(&format!("2024-01-{day:02}"), &users));
        }
        let top = highlights(&records);
        assert_eq!(top.len(), HIGHLIGHT_SLOTS);
        assert_eq!(top[0].member_id, 10);
        assert_eq!(top[0].slot, 0);
        assert_eq!(top[6].member_id, 4);
        assert_eq!(top[6].slot, 6);

        let slots = highlight_slots(&records);
        assert_eq!(slots.get(&10), Some(&0));
        assert_eq!(slots.get(&3), None);
    }

    #[test]
    fn test_empty_ledger() {
        assert!(rank(&[], None, &[]).is_empty());
        assert!(highlights(&[]).is_empty());
    }
}
