//! Attendance & payment DTOs (出勤 / 入场费)

use serde::{Deserialize, Serialize};

use super::member::Member;

/// Attendees of one business date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceDay {
    /// YYYY-MM-DD
    pub date: String,
    pub attendees: Vec<Member>,
    pub count: usize,
}

/// Whether a member attended on a date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceStatus {
    pub date: String,
    pub member_id: i64,
    pub attended: bool,
}

/// One row on the check-in board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardEntry {
    pub id: i64,
    pub name: String,
    pub attended: bool,
    /// 全时段前 7 名的位置 (0..=6)，用于颜色标记
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<u8>,
}

/// Today's check-in board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInBoard {
    pub date: String,
    pub entries: Vec<BoardEntry>,
    pub page: usize,
    pub total_pages: usize,
}

/// Payment flag of one attendee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    pub member_id: i64,
    pub name: String,
    pub paid: bool,
}

/// Payment sheet of one date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSheet {
    pub date: String,
    pub entries: Vec<PaymentEntry>,
    pub paid_count: usize,
    pub total: usize,
}

/// Set payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentUpdate {
    pub paid: bool,
}

/// Resulting payment state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStatus {
    pub date: String,
    pub member_id: i64,
    pub paid: bool,
}

/// Member with dates attended but not paid (newest first)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnpaidMember {
    pub member_id: i64,
    pub name: String,
    pub unpaid_dates: Vec<String>,
}

/// Inactive members report row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InactiveMember {
    pub member_id: i64,
    pub name: String,
    pub attendance_count: usize,
    pub last_attendance_date: Option<String>,
}
