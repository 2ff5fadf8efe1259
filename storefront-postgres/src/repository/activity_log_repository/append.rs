use storefront_db::models::audit::{ActivityLogModel, NewActivityLog};

use crate::utils::TryFromRow;

use super::repo_impl::ActivityLogRepositoryImpl;

pub(super) async fn append_impl(
    repo: &ActivityLogRepositoryImpl,
    entry: NewActivityLog,
) -> Result<ActivityLogModel, Box<dyn std::error::Error + Send + Sync>> {
    let row = sqlx::query(
        r#"
        INSERT INTO activity_log
        (user_id, username, role, action, entity, entity_id, description, ip_address, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, user_id, username, role, action, entity, entity_id, description, ip_address, created_at
        "#,
    )
    .bind(entry.user_id)
    .bind(entry.username.as_deref())
    .bind(entry.role.map(|r| r.as_str()))
    .bind(entry.action.as_str())
    .bind(entry.entity.as_deref())
    .bind(entry.entity_id)
    .bind(entry.description.as_deref())
    .bind(entry.ip_address.as_deref())
    .bind(entry.created_at)
    .fetch_one(&*repo.pool)
    .await?;

    ActivityLogModel::try_from_row(&row)
}
