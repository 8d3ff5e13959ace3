//! Attendance Ledger (出勤账本)
//!
//! - [`AttendanceRecord`] - pure per-date record operations
//! - [`AttendanceLedger`] - read-modify-write against the store

mod record;
mod service;

pub use record::AttendanceRecord;
pub use service::AttendanceLedger;
