use sqlx::{Postgres, QueryBuilder, Row};

use storefront_db::models::audit::{ActivityLogFilter, ActivityLogModel};
use storefront_db::repository::pagination::{Page, PageRequest};

use crate::utils::TryFromRow;

use super::repo_impl::ActivityLogRepositoryImpl;

fn push_filter_conditions(qb: &mut QueryBuilder<'_, Postgres>, filter: &ActivityLogFilter) {
    if let Some(user_id) = filter.user_id {
        qb.push(" AND user_id = ").push_bind(user_id);
    }
    if let Some(action) = filter.action.clone() {
        qb.push(" AND action = ").push_bind(action);
    }
    if let Some(entity) = filter.entity.clone() {
        qb.push(" AND entity = ").push_bind(entity);
    }
    if let Some(from) = filter.date_from_bound() {
        qb.push(" AND created_at >= ").push_bind(from);
    }
    if let Some(to) = filter.date_to_bound() {
        // Already normalized to 23:59:59 of the requested day
        qb.push(" AND created_at <= ").push_bind(to);
    }
}

pub(super) async fn find_with_filters_impl(
    repo: &ActivityLogRepositoryImpl,
    filter: &ActivityLogFilter,
) -> Result<Vec<ActivityLogModel>, Box<dyn std::error::Error + Send + Sync>> {
    let mut qb = QueryBuilder::new(
        "SELECT id, user_id, username, role, action, entity, entity_id, description, \
         ip_address, created_at FROM activity_log WHERE TRUE",
    );
    push_filter_conditions(&mut qb, filter);
    qb.push(" ORDER BY created_at DESC, id DESC");

    let rows = qb.build().fetch_all(&*repo.pool).await?;
    rows.iter().map(ActivityLogModel::try_from_row).collect()
}

pub(super) async fn find_page_impl(
    repo: &ActivityLogRepositoryImpl,
    filter: &ActivityLogFilter,
    page: PageRequest,
) -> Result<Page<ActivityLogModel>, Box<dyn std::error::Error + Send + Sync>> {
    let total = count_impl(repo, filter).await? as usize;

    let mut qb = QueryBuilder::new(
        "SELECT id, user_id, username, role, action, entity, entity_id, description, \
         ip_address, created_at FROM activity_log WHERE TRUE",
    );
    push_filter_conditions(&mut qb, filter);
    qb.push(" ORDER BY created_at DESC, id DESC");
    qb.push(" LIMIT ").push_bind(page.limit as i64);
    qb.push(" OFFSET ").push_bind(page.offset as i64);

    let rows = qb.build().fetch_all(&*repo.pool).await?;
    let items = rows
        .iter()
        .map(ActivityLogModel::try_from_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Page::new(items, total, page.limit, page.offset))
}

pub(super) async fn count_impl(
    repo: &ActivityLogRepositoryImpl,
    filter: &ActivityLogFilter,
) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM activity_log WHERE TRUE");
    push_filter_conditions(&mut qb, filter);

    let row = qb.build().fetch_one(&*repo.pool).await?;
    let count: i64 = row.try_get(0)?;
    Ok(count as u64)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use storefront_db::models::audit::ActivityLogFilter;
    use storefront_db::repository::activity_log_repository::ActivityLogRepository;

    use crate::test_helper::{new_test_entry, setup_test_repos};

    #[tokio::test]
    #[serial_test::serial]
    #[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
    async fn filters_combine_with_and_and_order_is_newest_first(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repos = setup_test_repos().await?;
        let logs = repos.activity_logs();

        let mut product_create = new_test_entry("create");
        product_create.entity = Some(heapless::String::try_from("Product").unwrap());
        let mut order_create = new_test_entry("create");
        order_create.entity = Some(heapless::String::try_from("Order").unwrap());
        logs.append(product_create).await?;
        logs.append(order_create).await?;

        let filter = ActivityLogFilter::new()
            .with_action("create")
            .with_entity("Product");
        let rows = logs.find_with_filters(&filter).await?;
        assert!(rows.iter().all(|r| r.entity.as_deref() == Some("Product")));

        let all = logs.find_with_filters(&ActivityLogFilter::new()).await?;
        for pair in all.windows(2) {
            assert!(
                pair[0].created_at > pair[1].created_at
                    || (pair[0].created_at == pair[1].created_at && pair[0].id > pair[1].id)
            );
        }
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    #[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
    async fn pages_carry_the_total_and_respect_the_limit(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        use storefront_db::repository::pagination::PageRequest;

        let repos = setup_test_repos().await?;
        let logs = repos.activity_logs();

        for _ in 0..3 {
            logs.append(new_test_entry("create")).await?;
        }

        let all = logs.find_with_filters(&ActivityLogFilter::new()).await?;
        let page = logs
            .find_page(&ActivityLogFilter::new(), PageRequest::new(2, 0))
            .await?;
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, all.len());
        assert_eq!(page.items[..], all[..2]);
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    #[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
    async fn inverted_date_range_returns_empty(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repos = setup_test_repos().await?;
        let logs = repos.activity_logs();
        logs.append(new_test_entry("create")).await?;

        let filter = ActivityLogFilter::new()
            .with_date_from(NaiveDate::from_ymd_opt(2030, 1, 2).unwrap())
            .with_date_to(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        assert!(logs.find_with_filters(&filter).await?.is_empty());
        Ok(())
    }
}
