mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;
use remindme_domain::{Reminder, ReminderStatus, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    /// Conditional save guarding the read-merge-write window of partial
    /// updates. The write only goes through when the stored version still
    /// equals `reminder.version`, and the stored version is bumped on
    /// success. Returns `false` when another writer got there first or the
    /// reminder is gone. `status` and `created` are never written by this
    /// method, so a delivery outcome recorded concurrently survives.
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<bool>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    /// All reminders ordered by scheduled instant, earliest first
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
    /// Hook for the delivery worker to record the outcome of a delivery
    /// attempt. The request handlers never call this.
    async fn set_status(&self, reminder_id: &ID, status: ReminderStatus) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, RemindmeContext};
    use remindme_domain::{Reminder, ReminderMethod, ReminderStatus};

    /// Creates an inmemory context and whatever context the environment
    /// provides (postgres when DATABASE_URL is set, otherwise a second
    /// inmemory context)
    async fn create_contexts() -> Vec<RemindmeContext> {
        vec![RemindmeContext::create_inmemory(), setup_context().await]
    }

    fn dummy_reminder() -> Reminder {
        Reminder {
            id: Default::default(),
            remind_at: 4070912400000,
            message: "Pay rent".into(),
            method: ReminderMethod::Sms,
            contact_info: "+15551234567".into(),
            status: ReminderStatus::Pending,
            created: 0,
            version: 0,
        }
    }

    #[tokio::test]
    async fn create_and_delete() {
        for ctx in create_contexts().await {
            let reminder = dummy_reminder();

            // Insert
            assert!(ctx.repos.reminders.insert(&reminder).await.is_ok());

            // Find
            let res = ctx.repos.reminders.find(&reminder.id).await.unwrap();
            assert_eq!(res, reminder);

            // Delete
            let res = ctx.repos.reminders.delete(&reminder.id).await;
            assert_eq!(res.unwrap(), reminder);

            // Find
            assert!(ctx.repos.reminders.find(&reminder.id).await.is_none());
        }
    }

    #[tokio::test]
    async fn save_bumps_version_and_rejects_stale_writers() {
        for ctx in create_contexts().await {
            let mut reminder = dummy_reminder();
            ctx.repos.reminders.insert(&reminder).await.unwrap();

            reminder.message = "Pay rent tomorrow".into();
            assert!(ctx.repos.reminders.save(&reminder).await.unwrap());

            // Still presenting version 0, the stored row moved to 1
            assert!(!ctx.repos.reminders.save(&reminder).await.unwrap());

            reminder.version += 1;
            assert!(ctx.repos.reminders.save(&reminder).await.unwrap());

            let stored = ctx.repos.reminders.find(&reminder.id).await.unwrap();
            assert_eq!(stored.version, 2);
            assert_eq!(stored.message, "Pay rent tomorrow");
        }
    }

    #[tokio::test]
    async fn save_never_touches_the_delivery_status() {
        for ctx in create_contexts().await {
            let mut reminder = dummy_reminder();
            ctx.repos.reminders.insert(&reminder).await.unwrap();

            ctx.repos
                .reminders
                .set_status(&reminder.id, ReminderStatus::Sent)
                .await
                .unwrap();

            // A field update carrying the stale pending status must not
            // revert the recorded delivery outcome
            reminder.message = "Pay rent tomorrow".into();
            assert!(ctx.repos.reminders.save(&reminder).await.unwrap());

            let stored = ctx.repos.reminders.find(&reminder.id).await.unwrap();
            assert_eq!(stored.status, ReminderStatus::Sent);
            assert_eq!(stored.message, "Pay rent tomorrow");
        }
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_scheduled_instant() {
        for ctx in create_contexts().await {
            let mut late = dummy_reminder();
            late.remind_at = 4073331600000;
            let mut early = dummy_reminder();
            early.remind_at = 4070912400000;

            ctx.repos.reminders.insert(&late).await.unwrap();
            ctx.repos.reminders.insert(&early).await.unwrap();

            let all = ctx.repos.reminders.find_all().await.unwrap();
            let early_pos = all.iter().position(|r| r.id == early.id).unwrap();
            let late_pos = all.iter().position(|r| r.id == late.id).unwrap();
            assert!(early_pos < late_pos);

            for window in all.windows(2) {
                assert!(window[0].remind_at <= window[1].remind_at);
            }
        }
    }

    #[tokio::test]
    async fn set_status_records_delivery_outcome() {
        for ctx in create_contexts().await {
            let reminder = dummy_reminder();
            ctx.repos.reminders.insert(&reminder).await.unwrap();

            ctx.repos
                .reminders
                .set_status(&reminder.id, ReminderStatus::Failed)
                .await
                .unwrap();

            let stored = ctx.repos.reminders.find(&reminder.id).await.unwrap();
            assert_eq!(stored.status, ReminderStatus::Failed);
            // The version token is reserved for field updates
            assert_eq!(stored.version, reminder.version);
        }
    }
}
