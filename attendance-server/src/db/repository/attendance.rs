//! Attendance Repository
//!
//! Rows are documents keyed by date. `users` and `paid` are stored as JSON
//! arrays of member ids. `paid` written by older clients may be an object
//! `{"<id>": true}`; it is accepted on read and written back as an array.

use std::collections::BTreeMap;

use serde::Deserialize;
use sqlx::{SqliteExecutor, SqlitePool};

use super::{RepoError, RepoResult};
use crate::ledger::AttendanceRecord;

#[derive(Debug, sqlx::FromRow)]
struct AttendanceRow {
    date: String,
    users: Option<String>,
    paid: Option<String>,
}

/// Stored shape of the `paid` field
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PaidField {
    List(Vec<i64>),
    Legacy(BTreeMap<String, bool>),
}

impl PaidField {
    fn into_ids(self, date: &str) -> RepoResult<Vec<i64>> {
        match self {
            PaidField::List(ids) => Ok(ids),
            PaidField::Legacy(map) => {
                let mut ids = Vec::with_capacity(map.len());
                for (key, paid) in map {
                    if !paid {
                        continue;
                    }
                    let id = key.parse::<i64>().map_err(|_| {
                        RepoError::Malformed(format!("{date}: invalid member id '{key}' in paid"))
                    })?;
                    ids.push(id);
                }
                Ok(ids)
            }
        }
    }
}

impl TryFrom<AttendanceRow> for AttendanceRecord {
    type Error = RepoError;

    fn try_from(row: AttendanceRow) -> Result<Self, Self::Error> {
        let users = match row.users.as_deref() {
            None => Vec::new(),
            Some(raw) => serde_json::from_str::<Option<Vec<i64>>>(raw)
                .map_err(|e| RepoError::Malformed(format!("{}: users: {e}", row.date)))?
                .unwrap_or_default(),
        };
        let paid = match row.paid.as_deref() {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Option<PaidField>>(raw)
                .map_err(|e| RepoError::Malformed(format!("{}: paid: {e}", row.date)))?
            {
                Some(field) => field.into_ids(&row.date)?,
                None => Vec::new(),
            },
        };
        Ok(AttendanceRecord {
            date: row.date,
            users,
            paid,
        })
    }
}

fn encode(ids: &[i64]) -> RepoResult<String> {
    serde_json::to_string(ids).map_err(|e| RepoError::Database(format!("Failed to encode ids: {e}")))
}

pub async fn find_by_date<'e>(
    exec: impl SqliteExecutor<'e>,
    date: &str,
) -> RepoResult<Option<AttendanceRecord>> {
    let row = sqlx::query_as::<_, AttendanceRow>(
        "SELECT date, users, paid FROM attendance WHERE date = ?",
    )
    .bind(date)
    .fetch_optional(exec)
    .await?;
    row.map(AttendanceRecord::try_from).transpose()
}

/// All records, oldest first
pub async fn find_all<'e>(exec: impl SqliteExecutor<'e>) -> RepoResult<Vec<AttendanceRecord>> {
    let rows = sqlx::query_as::<_, AttendanceRow>(
        "SELECT date, users, paid FROM attendance ORDER BY date ASC",
    )
    .fetch_all(exec)
    .await?;
    rows.into_iter().map(AttendanceRecord::try_from).collect()
}

/// Records with `date >= since`, oldest first (YYYY-MM-DD sorts lexically)
pub async fn find_since(pool: &SqlitePool, since: &str) -> RepoResult<Vec<AttendanceRecord>> {
    let rows = sqlx::query_as::<_, AttendanceRow>(
        "SELECT date, users, paid FROM attendance WHERE date >= ? ORDER BY date ASC",
    )
    .bind(since)
    .fetch_all(pool)
    .await?;
    rows.into_iter().map(AttendanceRecord::try_from).collect()
}

/// Record dates, newest first
pub async fn list_dates(pool: &SqlitePool) -> RepoResult<Vec<String>> {
    let dates = sqlx::query_scalar::<_, String>("SELECT date FROM attendance ORDER BY date DESC")
        .fetch_all(pool)
        .await?;
    Ok(dates)
}

/// Insert or replace the whole document for `record.date`
pub async fn upsert<'e>(exec: impl SqliteExecutor<'e>, record: &AttendanceRecord) -> RepoResult<()> {
    let users = encode(&record.users)?;
    let paid = encode(&record.paid)?;
    sqlx::query(
        "INSERT INTO attendance (date, users, paid, updated_at) VALUES (?1, ?2, ?3, ?4) \
         ON CONFLICT(date) DO UPDATE SET users = excluded.users, paid = excluded.paid, updated_at = excluded.updated_at",
    )
    .bind(&record.date)
    .bind(users)
    .bind(paid)
    .bind(shared::util::now_millis())
    .execute(exec)
    .await?;
    Ok(())
}
