use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::models::audit::{ActivityLogFilter, ActivityLogModel, NewActivityLog};
use crate::repository::activity_log_repository::ActivityLogRepository;
use crate::repository::pagination::{Page, PageRequest};

use super::MemoryRepositories;

#[async_trait]
impl ActivityLogRepository for MemoryRepositories {
    async fn append(
        &self,
        entry: NewActivityLog,
    ) -> Result<ActivityLogModel, Box<dyn std::error::Error + Send + Sync>> {
        let mut state = self.state.lock().map_err(|_| "Store mutex poisoned")?;
        let id = state.assign_log_id();
        let model = ActivityLogModel {
            id,
            user_id: entry.user_id,
            username: entry.username,
            role: entry.role,
            action: entry.action,
            entity: entry.entity,
            entity_id: entry.entity_id,
            description: entry.description,
            ip_address: entry.ip_address,
            created_at: entry.created_at,
        };
        state.logs.push(model.clone());
        Ok(model)
    }

    async fn find_with_filters(
        &self,
        filter: &ActivityLogFilter,
    ) -> Result<Vec<ActivityLogModel>, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.lock().map_err(|_| "Store mutex poisoned")?;
        let mut matching: Vec<ActivityLogModel> = state
            .logs
            .iter()
            .filter(|log| {
                filter.matches(
                    log.user_id,
                    log.action.as_str(),
                    log.entity.as_deref(),
                    log.created_at,
                )
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(matching)
    }

    async fn find_page(
        &self,
        filter: &ActivityLogFilter,
        page: PageRequest,
    ) -> Result<Page<ActivityLogModel>, Box<dyn std::error::Error + Send + Sync>> {
        let all = self.find_with_filters(filter).await?;
        let total = all.len();
        let items = all
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .collect();
        Ok(Page::new(items, total, page.limit, page.offset))
    }

    async fn count(
        &self,
        filter: &ActivityLogFilter,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.lock().map_err(|_| "Store mutex poisoned")?;
        let count = state
            .logs
            .iter()
            .filter(|log| {
                filter.matches(
                    log.user_id,
                    log.action.as_str(),
                    log.entity.as_deref(),
                    log.created_at,
                )
            })
            .count();
        Ok(count as u64)
    }

    async fn distinct_actions(
        &self,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.lock().map_err(|_| "Store mutex poisoned")?;
        let set: BTreeSet<String> = state
            .logs
            .iter()
            .map(|log| log.action.as_str().to_string())
            .collect();
        Ok(set.into_iter().collect())
    }

    async fn distinct_entities(
        &self,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.lock().map_err(|_| "Store mutex poisoned")?;
        let set: BTreeSet<String> = state
            .logs
            .iter()
            .filter_map(|log| log.entity.as_deref().map(str::to_string))
            .collect();
        Ok(set.into_iter().collect())
    }
}
