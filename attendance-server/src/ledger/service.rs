//! Ledger service
//!
//! Every mutation loads the date's document, applies a record operation and
//! writes the whole document back. Mutations inside this process are
//! serialized by one async lock; other writers to the same file remain
//! last-write-wins.

use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::Mutex;

use super::AttendanceRecord;
use crate::db::repository::{RepoResult, attendance, member};

#[derive(Clone)]
pub struct AttendanceLedger {
    pool: SqlitePool,
    write_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for AttendanceLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttendanceLedger").finish_non_exhaustive()
    }
}

impl AttendanceLedger {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    // ========== Reads ==========

    pub async fn record(&self, date: &str) -> RepoResult<Option<AttendanceRecord>> {
        attendance::find_by_date(&self.pool, date).await
    }

    /// All records, oldest first
    pub async fn all_records(&self) -> RepoResult<Vec<AttendanceRecord>> {
        attendance::find_all(&self.pool).await
    }

    /// Records on or after `since`, oldest first; `None` returns every record
    pub async fn records_since(&self, since: Option<&str>) -> RepoResult<Vec<AttendanceRecord>> {
        match since {
            Some(date) => attendance::find_since(&self.pool, date).await,
            None => self.all_records().await,
        }
    }

    /// Record dates, newest first
    pub async fn dates(&self) -> RepoResult<Vec<String>> {
        attendance::list_dates(&self.pool).await
    }

    /// Dates the member attended, newest first
    pub async fn history(&self, member_id: i64) -> RepoResult<Vec<String>> {
        let records = self.all_records().await?;
        Ok(records
            .into_iter()
            .rev()
            .filter(|r| r.attended(member_id))
            .map(|r| r.date)
            .collect())
    }

    pub async fn attended(&self, date: &str, member_id: i64) -> RepoResult<bool> {
        Ok(self
            .record(date)
            .await?
            .is_some_and(|r| r.attended(member_id)))
    }

    /// `false` when the record does not exist
    pub async fn is_paid(&self, date: &str, member_id: i64) -> RepoResult<bool> {
        Ok(self
            .record(date)
            .await?
            .is_some_and(|r| r.is_paid(member_id)))
    }

    // ========== Writes ==========

    /// Add the member to `date`, creating the record if absent
    pub async fn check_in(&self, date: &str, member_id: i64) -> RepoResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut record = attendance::find_by_date(&self.pool, date)
            .await?
            .unwrap_or_else(|| AttendanceRecord::new(date));
        if record.check_in(member_id) {
            attendance::upsert(&self.pool, &record).await?;
            tracing::info!(date = %date, member_id, "Member checked in");
        }
        Ok(())
    }

    /// Remove the member from `date`; a missing record is left absent
    pub async fn check_out(&self, date: &str, member_id: i64) -> RepoResult<()> {
        let _guard = self.write_lock.lock().await;
        let Some(mut record) = attendance::find_by_date(&self.pool, date).await? else {
            return Ok(());
        };
        if record.check_out(member_id) {
            attendance::upsert(&self.pool, &record).await?;
            tracing::info!(date = %date, member_id, "Member checked out");
        }
        Ok(())
    }

    /// Set the payment flag; a missing record is a no-op
    pub async fn set_paid(&self, date: &str, member_id: i64, paid: bool) -> RepoResult<bool> {
        let _guard = self.write_lock.lock().await;
        let Some(mut record) = attendance::find_by_date(&self.pool, date).await? else {
            tracing::debug!(date = %date, member_id, "No attendance record, payment unchanged");
            return Ok(false);
        };
        if record.set_paid(member_id, paid) {
            attendance::upsert(&self.pool, &record).await?;
            tracing::info!(date = %date, member_id, paid, "Payment updated");
        }
        Ok(paid)
    }

    /// Flip the payment flag and return the new state.
    /// A missing record is left absent and reports `false`.
    pub async fn toggle_paid(&self, date: &str, member_id: i64) -> RepoResult<bool> {
        let _guard = self.write_lock.lock().await;
        let Some(mut record) = attendance::find_by_date(&self.pool, date).await? else {
            return Ok(false);
        };
        let paid = record.toggle_paid(member_id);
        attendance::upsert(&self.pool, &record).await?;
        tracing::info!(date = %date, member_id, paid, "Payment toggled");
        Ok(paid)
    }

    /// Delete a member and strip the id from every record, in one transaction.
    /// Returns `false` when the member did not exist.
    pub async fn purge_member(&self, member_id: i64) -> RepoResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut tx = self.pool.begin().await?;

        let deleted = member::delete(&mut *tx, member_id).await?;
        if !deleted {
            return Ok(false);
        }

        let records = attendance::find_all(&mut *tx).await?;
        let mut touched = 0usize;
        for mut record in records {
            if record.strip_member(member_id) {
                attendance::upsert(&mut *tx, &record).await?;
                touched += 1;
            }
        }
        tx.commit().await?;

        tracing::info!(member_id, records = touched, "Member deleted and stripped from attendance");
        Ok(true)
    }
}
