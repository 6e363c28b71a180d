use super::IReminderRepo;
use remindme_domain::{Reminder, ReminderStatus, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    remind_at: i64,
    message: String,
    method: String,
    contact_info: String,
    status: String,
    created: i64,
    version: i64,
}

impl Into<Reminder> for ReminderRaw {
    fn into(self) -> Reminder {
        Reminder {
            id: self.reminder_uid.into(),
            remind_at: self.remind_at,
            message: self.message,
            // Stored as text and written exclusively through the Display
            // impls of the enums
            method: self.method.parse().unwrap(),
            contact_info: self.contact_info,
            status: self.status.parse().unwrap(),
            created: self.created,
            version: self.version,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders
            (reminder_uid, remind_at, message, method, contact_info, status, created, version)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.remind_at)
        .bind(&reminder.message)
        .bind(reminder.method.to_string())
        .bind(&reminder.contact_info)
        .bind(reminder.status.to_string())
        .bind(reminder.created)
        .bind(reminder.version)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE reminders SET
                remind_at = $3,
                message = $4,
                method = $5,
                contact_info = $6,
                version = version + 1
            WHERE reminder_uid = $1 AND version = $2
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.version)
        .bind(reminder.remind_at)
        .bind(&reminder.message)
        .bind(reminder.method.to_string())
        .bind(&reminder.contact_info)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected() == 1)
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        match sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(reminder) => Some(reminder.into()),
            Err(_) => None,
        }
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            ORDER BY r.remind_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        match sqlx::query_as::<_, ReminderRaw>(
            r#"
            DELETE FROM reminders AS r
            WHERE r.reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(reminder) => Some(reminder.into()),
            Err(_) => None,
        }
    }

    async fn set_status(&self, reminder_id: &ID, status: ReminderStatus) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders SET status = $2
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .bind(status.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
