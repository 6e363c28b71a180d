use remindme_domain::{Reminder, ReminderMethod, ReminderStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub date: i64,
    pub message: String,
    pub reminder_method: ReminderMethod,
    pub contact_info: String,
    pub status: ReminderStatus,
    pub created_at: i64,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            date: reminder.remind_at,
            message: reminder.message,
            reminder_method: reminder.method,
            contact_info: reminder.contact_info,
            status: reminder.status,
            created_at: reminder.created,
        }
    }
}

/// The trimmed down reminder shape returned right after creation
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderCreatedDTO {
    pub id: ID,
    pub date: i64,
    pub message: String,
    pub reminder_method: ReminderMethod,
    pub status: ReminderStatus,
}

impl ReminderCreatedDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            date: reminder.remind_at,
            message: reminder.message,
            reminder_method: reminder.method,
            status: reminder.status,
        }
    }
}
