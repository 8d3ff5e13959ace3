//! Member Registry (会员名册)
//!
//! 注册、搜索和分页。会员按注册时间排序；搜索为大小写不敏感的子串匹配，
//! 有搜索词时不分页。

use shared::models::{Member, MemberPage};
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, member};
use crate::ledger::AttendanceLedger;
use crate::utils::validation::validate_member_name;
use crate::utils::{AppError, AppResult, ErrorCode};

/// 每页会员数
pub const DEFAULT_PER_PAGE: usize = 10;

/// Register a member and optionally check them in for `today`.
///
/// The name is trimmed; empty names and exact duplicates are rejected.
pub async fn register(
    pool: &SqlitePool,
    ledger: &AttendanceLedger,
    name: &str,
    check_in_on: Option<&str>,
) -> AppResult<Member> {
    let name = validate_member_name(name)?;

    if member::find_by_name(pool, &name).await?.is_some() {
        return Err(name_exists(&name));
    }

    let created = member::create(pool, &name).await.map_err(|e| match e {
        RepoError::Duplicate(_) => name_exists(&name),
        other => other.into(),
    })?;
    tracing::info!(member_id = created.id, name = %created.name, "Member registered");

    if let Some(date) = check_in_on {
        ledger.check_in(date, created.id).await?;
    }

    Ok(created)
}

fn name_exists(name: &str) -> AppError {
    AppError::with_message(
        ErrorCode::MemberNameExists,
        format!("Member name '{name}' is already registered"),
    )
    .with_detail("name", name)
}

/// Case-insensitive substring match on the name, order preserved
pub fn search(members: Vec<Member>, query: &str) -> Vec<Member> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return members;
    }
    members
        .into_iter()
        .filter(|m| m.name.to_lowercase().contains(&needle))
        .collect()
}

/// Number of pages for `total` items (at least 1)
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1)).max(1)
}

/// Slice page `page` (1-based, clamped to >= 1) out of `items`
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Vec<T> {
    let per_page = per_page.max(1);
    let start = page.max(1).saturating_sub(1).saturating_mul(per_page);
    items.into_iter().skip(start).take(per_page).collect()
}

/// Registry listing: filtered by `query` when present, otherwise paged
pub fn page(members: Vec<Member>, query: Option<&str>, page: usize, per_page: usize) -> MemberPage {
    let per_page = if per_page == 0 { DEFAULT_PER_PAGE } else { per_page };
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => {
            let members = search(members, q);
            let total = members.len();
            MemberPage {
                members,
                page: 1,
                per_page: total.max(per_page),
                total,
                total_pages: 1,
            }
        }
        None => {
            let total = members.len();
            let page = page.max(1);
            MemberPage {
                members: paginate(members, page, per_page),
                page,
                per_page,
                total,
                total_pages: total_pages(total, per_page),
            }
        }
    }
}
