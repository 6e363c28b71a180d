use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use remindme_domain::{Reminder, ReminderStatus, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<bool> {
        let mut reminders = self.reminders.lock().unwrap();
        for stored in reminders.iter_mut() {
            if stored.id == reminder.id && stored.version == reminder.version {
                stored.remind_at = reminder.remind_at;
                stored.message = reminder.message.clone();
                stored.method = reminder.method;
                stored.contact_info = reminder.contact_info.clone();
                stored.version += 1;
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = self.reminders.lock().unwrap().clone();
        reminders.sort_by_key(|reminder| reminder.remind_at);
        Ok(reminders)
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        delete(reminder_id, &self.reminders)
    }

    async fn set_status(&self, reminder_id: &ID, status: ReminderStatus) -> anyhow::Result<()> {
        let mut reminders = self.reminders.lock().unwrap();
        for stored in reminders.iter_mut() {
            if stored.id == *reminder_id {
                stored.status = status;
            }
        }
        Ok(())
    }
}
