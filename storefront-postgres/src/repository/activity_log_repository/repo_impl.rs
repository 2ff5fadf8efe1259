use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::str::FromStr;
use std::sync::Arc;

use storefront_api::domain::Role;
use storefront_db::models::audit::{ActivityLogFilter, ActivityLogModel, NewActivityLog};
use storefront_db::repository::activity_log_repository::ActivityLogRepository;
use storefront_db::repository::pagination::{Page, PageRequest};

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct ActivityLogRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ActivityLogRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ActivityLogModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let role: Option<String> = row.try_get("role")?;
        Ok(ActivityLogModel {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            username: get_optional_heapless_string(row, "username")?,
            role: role.as_deref().map(Role::from_str).transpose()?,
            action: get_heapless_string(row, "action")?,
            entity: get_optional_heapless_string(row, "entity")?,
            entity_id: row.try_get("entity_id")?,
            description: get_optional_heapless_string(row, "description")?,
            ip_address: get_optional_heapless_string(row, "ip_address")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl ActivityLogRepository for ActivityLogRepositoryImpl {
    async fn append(
        &self,
        entry: NewActivityLog,
    ) -> Result<ActivityLogModel, Box<dyn Error + Send + Sync>> {
        super::append::append_impl(self, entry).await
    }

    async fn find_with_filters(
        &self,
        filter: &ActivityLogFilter,
    ) -> Result<Vec<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        super::find_with_filters::find_with_filters_impl(self, filter).await
    }

    async fn find_page(
        &self,
        filter: &ActivityLogFilter,
        page: PageRequest,
    ) -> Result<Page<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        super::find_with_filters::find_page_impl(self, filter, page).await
    }

    async fn count(
        &self,
        filter: &ActivityLogFilter,
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        super::find_with_filters::count_impl(self, filter).await
    }

    async fn distinct_actions(&self) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
        super::distinct_values::distinct_actions_impl(self).await
    }

    async fn distinct_entities(&self) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
        super::distinct_values::distinct_entities_impl(self).await
    }
}
