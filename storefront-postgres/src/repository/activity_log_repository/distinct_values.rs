use sqlx::Row;

use super::repo_impl::ActivityLogRepositoryImpl;

pub(super) async fn distinct_actions_impl(
    repo: &ActivityLogRepositoryImpl,
) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
    let rows = sqlx::query(
        r#"
        SELECT DISTINCT action
        FROM activity_log
        ORDER BY action ASC
        "#,
    )
    .fetch_all(&*repo.pool)
    .await?;

    rows.iter()
        .map(|row| row.try_get::<String, _>("action").map_err(Into::into))
        .collect()
}

pub(super) async fn distinct_entities_impl(
    repo: &ActivityLogRepositoryImpl,
) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
    let rows = sqlx::query(
        r#"
        SELECT DISTINCT entity
        FROM activity_log
        WHERE entity IS NOT NULL
        ORDER BY entity ASC
        "#,
    )
    .fetch_all(&*repo.pool)
    .await?;

    rows.iter()
        .map(|row| row.try_get::<String, _>("entity").map_err(Into::into))
        .collect()
}
