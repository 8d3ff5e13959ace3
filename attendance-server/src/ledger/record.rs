//! Attendance record (出勤记录)
//!
//! One document per business date. `users` and `paid` behave as sets but
//! keep insertion order, so check-in order survives a round trip through
//! the store.

use serde::{Deserialize, Serialize};

/// Attendance of one business date
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// YYYY-MM-DD
    pub date: String,
    /// 出席的会员 ID
    pub users: Vec<i64>,
    /// 已缴费的会员 ID (应为 users 的子集，但不强制)
    pub paid: Vec<i64>,
}

impl AttendanceRecord {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            users: Vec::new(),
            paid: Vec::new(),
        }
    }

    pub fn attended(&self, member_id: i64) -> bool {
        self.users.contains(&member_id)
    }

    pub fn is_paid(&self, member_id: i64) -> bool {
        self.paid.contains(&member_id)
    }

    /// Add to `users`. Returns `true` when the record changed.
    pub fn check_in(&mut self, member_id: i64) -> bool {
        insert(&mut self.users, member_id)
    }

    /// Remove from `users`. The payment flag is left untouched.
    pub fn check_out(&mut self, member_id: i64) -> bool {
        remove(&mut self.users, member_id)
    }

    /// Insert into or remove from `paid`. Returns `true` when the record changed.
    pub fn set_paid(&mut self, member_id: i64, paid: bool) -> bool {
        if paid {
            insert(&mut self.paid, member_id)
        } else {
            remove(&mut self.paid, member_id)
        }
    }

    /// Flip the payment flag and return the new state
    pub fn toggle_paid(&mut self, member_id: i64) -> bool {
        let paid = !self.is_paid(member_id);
        self.set_paid(member_id, paid);
        paid
    }

    /// Remove the member from both sets (member deletion)
    pub fn strip_member(&mut self, member_id: i64) -> bool {
        let left = remove(&mut self.users, member_id);
        let right = remove(&mut self.paid, member_id);
        left || right
    }

    /// Attendees that have not paid, in check-in order
    pub fn unpaid(&self) -> impl Iterator<Item = i64> + '_ {
        self.users.iter().copied().filter(|id| !self.paid.contains(id))
    }
}

fn insert(set: &mut Vec<i64>, id: i64) -> bool {
    if set.contains(&id) {
        return false;
    }
    set.push(id);
    true
}

fn remove(set: &mut Vec<i64>, id: i64) -> bool {
    let before = set.len();
    set.retain(|x| *x != id);
    set.len() != before
}
