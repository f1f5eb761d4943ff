use sqlx::SqlitePool;

use super::types::{Meeting, MeetingCreate, MeetingUpdate};

const SELECT_MEETING: &str = "SELECT id, title, agenda, summary, owner_id FROM meetings";

pub async fn count_all(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM meetings")
        .fetch_one(pool)
        .await
}

pub async fn count_by_owner(pool: &SqlitePool, owner_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM meetings WHERE owner_id = ?1")
        .bind(owner_id)
        .fetch_one(pool)
        .await
}

/// All meetings in id order, `skip` rows skipped, at most `limit` returned.
pub async fn find_all(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<Meeting>, sqlx::Error> {
    sqlx::query_as::<_, Meeting>(&format!("{SELECT_MEETING} ORDER BY id LIMIT ?1 OFFSET ?2"))
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await
}

/// Same as [`find_all`], restricted to one owner.
pub async fn find_by_owner(
    pool: &SqlitePool,
    owner_id: i64,
    skip: i64,
    limit: i64,
) -> Result<Vec<Meeting>, sqlx::Error> {
    sqlx::query_as::<_, Meeting>(&format!(
        "{SELECT_MEETING} WHERE owner_id = ?1 ORDER BY id LIMIT ?2 OFFSET ?3"
    ))
    .bind(owner_id)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Meeting>, sqlx::Error> {
    sqlx::query_as::<_, Meeting>(&format!("{SELECT_MEETING} WHERE id = ?1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a meeting owned by `owner_id` and return the stored row.
pub async fn create(
    pool: &SqlitePool,
    new: &MeetingCreate,
    owner_id: i64,
) -> Result<Meeting, sqlx::Error> {
    sqlx::query_as::<_, Meeting>(
        "INSERT INTO meetings (title, agenda, summary, owner_id) VALUES (?1, ?2, ?3, ?4) \
         RETURNING id, title, agenda, summary, owner_id",
    )
    .bind(&new.title)
    .bind(&new.agenda)
    .bind(&new.summary)
    .bind(owner_id)
    .fetch_one(pool)
    .await
}

/// Apply a partial update. Columns whose field is `None` keep their value.
/// Returns `None` if the row no longer exists.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    changes: &MeetingUpdate,
) -> Result<Option<Meeting>, sqlx::Error> {
    sqlx::query_as::<_, Meeting>(
        "UPDATE meetings SET \
             title = COALESCE(?1, title), \
             agenda = COALESCE(?2, agenda), \
             summary = COALESCE(?3, summary) \
         WHERE id = ?4 \
         RETURNING id, title, agenda, summary, owner_id",
    )
    .bind(changes.title.as_deref())
    .bind(changes.agenda.as_deref())
    .bind(changes.summary.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Hard delete. Returns whether a row was removed.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM meetings WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
