//! Member Repository

use super::{RepoError, RepoResult};
use shared::models::Member;
use sqlx::{SqliteExecutor, SqlitePool};

const MEMBER_SELECT: &str = "SELECT id, name, created_at FROM member";

/// All members in registration order
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Member>> {
    let sql = format!("{MEMBER_SELECT} ORDER BY created_at ASC, id ASC");
    let rows = sqlx::query_as::<_, Member>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Member>> {
    let sql = format!("{MEMBER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Member>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Exact (case-sensitive) name lookup
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Member>> {
    let sql = format!("{MEMBER_SELECT} WHERE name = ?");
    let row = sqlx::query_as::<_, Member>(&sql)
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert a member with a fresh snowflake id.
///
/// `name` must already be trimmed and validated; a duplicate name
/// surfaces as [`RepoError::Duplicate`] from the UNIQUE constraint.
pub async fn create(pool: &SqlitePool, name: &str) -> RepoResult<Member> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO member (id, name, created_at) VALUES (?1, ?2, ?3)")
        .bind(id)
        .bind(name)
        .bind(now)
        .execute(pool)
        .await
        .map_err(|e| match RepoError::from(e) {
            RepoError::Duplicate(_) => RepoError::Duplicate(format!("Member '{name}' already exists")),
            other => other,
        })?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create member".into()))
}

/// Delete a member row. Returns `false` when nothing was deleted.
pub async fn delete<'e>(exec: impl SqliteExecutor<'e>, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM member WHERE id = ?")
        .bind(id)
        .execute(exec)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = test_pool().await;
        let created = create(&pool, "Kim").await.unwrap();
        assert_eq!(created.name, "Kim");

        let by_id = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(by_id, created);

        let by_name = find_by_name(&pool, "Kim").await.unwrap().unwrap();
        assert_eq!(by_name.id, created.id);
        assert!(find_by_name(&pool, "kim").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let pool = test_pool().await;
        create(&pool, "Lee").await.unwrap();
        let err = create(&pool, "Lee").await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
        assert_eq!(find_all(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_all_in_registration_order() {
        let pool = test_pool().await;
        for name in ["C", "A", "B"] {
            create(&pool, name).await.unwrap();
            // created_at 精度为毫秒
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }
        let names: Vec<String> = find_all(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;
        let m = create(&pool, "Park").await.unwrap();
        assert!(delete(&pool, m.id).await.unwrap());
        assert!(!delete(&pool, m.id).await.unwrap());
        assert!(find_by_id(&pool, m.id).await.unwrap().is_none());
    }
}
