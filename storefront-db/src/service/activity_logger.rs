use chrono::Utc;
use heapless::String as HeaplessString;
use std::sync::Arc;

use storefront_api::domain::RequestContext;

use crate::models::audit::NewActivityLog;
use crate::repository::activity_log_repository::ActivityLogRepository;

/// Records one audit entry per business mutation.
///
/// The log is best-effort relative to the mutation it documents: a
/// persistence failure here is reported through `tracing` and swallowed,
/// never surfaced to the caller. A full disk or unavailable store must not
/// fail a legitimate business operation.
pub struct ActivityLogger {
    repo: Arc<dyn ActivityLogRepository>,
}

/// Fit a value into a bounded column, dropping the tail if it is too long.
/// Truncation beats losing the whole entry on a best-effort path.
fn clip<const N: usize>(value: &str) -> HeaplessString<N> {
    let mut out = HeaplessString::new();
    for ch in value.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

impl ActivityLogger {
    pub fn new(repo: Arc<dyn ActivityLogRepository>) -> Self {
        Self { repo }
    }

    /// Append one entry describing a business-relevant event.
    ///
    /// `created_at` is the time of this call, not of the original mutation;
    /// the skew is accepted. The network origin comes from the context and
    /// is absent for background work.
    pub async fn log(
        &self,
        ctx: &RequestContext,
        action: &str,
        entity: Option<&str>,
        entity_id: Option<i64>,
        description: Option<&str>,
    ) {
        let (user_id, username, role) = match &ctx.actor {
            Some(actor) => (
                Some(actor.id),
                Some(actor.username.clone()),
                Some(actor.primary_role()),
            ),
            None => (None, None, None),
        };

        let entry = NewActivityLog {
            user_id,
            username,
            role,
            action: clip(action),
            entity: entity.map(clip),
            entity_id,
            description: description.map(clip),
            ip_address: ctx.ip_address.map(|ip| clip(&ip.to_string())),
            created_at: Utc::now(),
        };

        if let Err(err) = self.repo.append(entry).await {
            tracing::error!(action, error = %err, "Failed to persist activity log entry");
        }
    }

    pub async fn log_create(
        &self,
        ctx: &RequestContext,
        entity: &str,
        entity_id: i64,
        entity_name: &str,
    ) {
        let description = format!("{} created {entity}: {entity_name}", self.actor_label(ctx));
        self.log(ctx, "create", Some(entity), Some(entity_id), Some(&description))
            .await;
    }

    pub async fn log_update(
        &self,
        ctx: &RequestContext,
        entity: &str,
        entity_id: i64,
        entity_name: &str,
    ) {
        let description = format!("{} updated {entity}: {entity_name}", self.actor_label(ctx));
        self.log(ctx, "update", Some(entity), Some(entity_id), Some(&description))
            .await;
    }

    pub async fn log_delete(
        &self,
        ctx: &RequestContext,
        entity: &str,
        entity_id: i64,
        entity_name: &str,
    ) {
        let description = format!("{} deleted {entity}: {entity_name}", self.actor_label(ctx));
        self.log(ctx, "delete", Some(entity), Some(entity_id), Some(&description))
            .await;
    }

    /// Records a successful sign-in. No-op without an actor.
    pub async fn log_login(&self, ctx: &RequestContext) {
        let Some(actor) = &ctx.actor else { return };
        let description = format!("User {} logged in", actor.username);
        self.log(ctx, "login", Some("User"), Some(actor.id), Some(&description))
            .await;
    }

    /// Records a sign-out. No-op without an actor.
    pub async fn log_logout(&self, ctx: &RequestContext) {
        let Some(actor) = &ctx.actor else { return };
        let description = format!("User {} logged out", actor.username);
        self.log(ctx, "logout", Some("User"), Some(actor.id), Some(&description))
            .await;
    }

    fn actor_label(&self, ctx: &RequestContext) -> String {
        match &ctx.actor {
            Some(actor) => actor.primary_role().to_string(),
            None => "System".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use storefront_api::domain::{ActorRef, Role};

    use crate::models::audit::{ActivityLogFilter, ActivityLogModel};
    use crate::repository::memory::MemoryRepositories;

    fn staff_ctx() -> RequestContext {
        let actor = ActorRef::new(3, "clerk", vec![Role::Staff, Role::User]).unwrap();
        RequestContext::for_actor(actor).with_ip("192.168.1.20".parse().unwrap())
    }

    #[tokio::test]
    async fn log_appends_one_entry_with_snapshots() {
        let repos = MemoryRepositories::new();
        let logger = ActivityLogger::new(Arc::new(repos.clone()));

        logger
            .log(&staff_ctx(), "update", Some("Product"), Some(9), Some("price change"))
            .await;

        let rows = repos
            .find_with_filters(&ActivityLogFilter::new())
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.user_id, Some(3));
        assert_eq!(row.username.as_deref(), Some("clerk"));
        assert_eq!(row.role, Some(Role::Staff));
        assert_eq!(row.action.as_str(), "update");
        assert_eq!(row.entity.as_deref(), Some("Product"));
        assert_eq!(row.entity_id, Some(9));
        assert_eq!(row.ip_address.as_deref(), Some("192.168.1.20"));
    }

    #[tokio::test]
    async fn system_event_has_no_actor_fields() {
        let repos = MemoryRepositories::new();
        let logger = ActivityLogger::new(Arc::new(repos.clone()));

        logger
            .log(&RequestContext::system(), "create", Some("Order"), Some(1), None)
            .await;

        let rows = repos
            .find_with_filters(&ActivityLogFilter::new())
            .await
            .unwrap();
        assert_eq!(rows[0].user_id, None);
        assert_eq!(rows[0].username, None);
        assert_eq!(rows[0].role, None);
        assert_eq!(rows[0].ip_address, None);
    }

    #[tokio::test]
    async fn convenience_helpers_format_like_the_admin_screens() {
        let repos = MemoryRepositories::new();
        let logger = ActivityLogger::new(Arc::new(repos.clone()));
        let ctx = staff_ctx();

        logger.log_create(&ctx, "Product", 4, "Espresso Beans").await;
        logger.log_delete(&ctx, "Category", 2, "Beverages").await;
        logger.log_login(&ctx).await;

        let rows = repos
            .find_with_filters(&ActivityLogFilter::new())
            .await
            .unwrap();
        let descriptions: Vec<&str> = rows
            .iter()
            .rev()
            .map(|r| r.description.as_deref().unwrap())
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "Staff created Product: Espresso Beans",
                "Staff deleted Category: Beverages",
                "User clerk logged in",
            ]
        );
        assert_eq!(rows[0].action.as_str(), "login");
        assert_eq!(rows[0].entity.as_deref(), Some("User"));
        assert_eq!(rows[0].entity_id, Some(3));
    }

    #[tokio::test]
    async fn login_without_actor_is_a_noop() {
        let repos = MemoryRepositories::new();
        let logger = ActivityLogger::new(Arc::new(repos.clone()));

        logger.log_login(&RequestContext::system()).await;

        let count = repos.count(&ActivityLogFilter::new()).await.unwrap();
        assert_eq!(count, 0);
    }

    struct FailingRepo;

    #[async_trait]
    impl ActivityLogRepository for FailingRepo {
        async fn append(
            &self,
            _entry: crate::models::audit::NewActivityLog,
        ) -> Result<ActivityLogModel, Box<dyn std::error::Error + Send + Sync>> {
            Err("store unavailable".into())
        }

        async fn find_with_filters(
            &self,
            _filter: &ActivityLogFilter,
        ) -> Result<Vec<ActivityLogModel>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(vec![])
        }

        async fn find_page(
            &self,
            _filter: &ActivityLogFilter,
            page: crate::repository::pagination::PageRequest,
        ) -> Result<
            crate::repository::pagination::Page<ActivityLogModel>,
            Box<dyn std::error::Error + Send + Sync>,
        > {
            Ok(crate::repository::pagination::Page::new(
                vec![],
                0,
                page.limit,
                page.offset,
            ))
        }

        async fn count(
            &self,
            _filter: &ActivityLogFilter,
        ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
            Ok(0)
        }

        async fn distinct_actions(
            &self,
        ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(vec![])
        }

        async fn distinct_entities(
            &self,
        ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn persistence_failure_is_swallowed() {
        let logger = ActivityLogger::new(Arc::new(FailingRepo));
        // Must not panic or propagate; the call simply completes.
        logger
            .log(&staff_ctx(), "create", Some("Product"), Some(1), None)
            .await;
    }

    #[test]
    fn clip_truncates_on_char_boundary() {
        let clipped: HeaplessString<5> = clip("abcdefgh");
        assert_eq!(clipped.as_str(), "abcde");
        let unicode: HeaplessString<5> = clip("héllo!");
        // 'é' is two bytes; only what fits whole is kept
        assert_eq!(unicode.as_str(), "héll");
    }
}
