use crate::dtos::{ReminderCreatedDTO, ReminderDTO};
use remindme_domain::{Reminder, ReminderMethod, ID};
use serde::{Deserialize, Serialize};

pub mod create_reminder {
    use super::*;

    /// All fields are optional at the wire level so that missing ones show
    /// up in the field error mapping of the response instead of failing
    /// deserialization.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub date: Option<String>,
        pub time: Option<String>,
        pub message: Option<String>,
        pub reminder_method: Option<String>,
        pub contact_info: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
        pub data: ReminderCreatedDTO,
    }

    impl APIResponse {
        pub fn new(reminder: Reminder) -> Self {
            Self {
                success: true,
                message: "Reminder created successfully".into(),
                data: ReminderCreatedDTO::new(reminder),
            }
        }
    }
}

pub mod get_reminders {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub count: usize,
        pub data: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            let data = reminders
                .into_iter()
                .map(ReminderDTO::new)
                .collect::<Vec<_>>();
            Self {
                success: true,
                count: data.len(),
                data,
            }
        }
    }
}

pub mod get_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub data: ReminderDTO,
    }

    impl APIResponse {
        pub fn new(reminder: Reminder) -> Self {
            Self {
                success: true,
                data: ReminderDTO::new(reminder),
            }
        }
    }
}

pub mod update_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    /// Any subset of the reminder fields. Absent fields are left untouched,
    /// this is a merge and not a replace.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub date: Option<String>,
        pub time: Option<String>,
        pub message: Option<String>,
        pub reminder_method: Option<ReminderMethod>,
        pub contact_info: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
        pub data: ReminderDTO,
    }

    impl APIResponse {
        pub fn new(reminder: Reminder) -> Self {
            Self {
                success: true,
                message: "Reminder updated successfully".into(),
                data: ReminderDTO::new(reminder),
            }
        }
    }
}

pub mod delete_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
    }

    impl APIResponse {
        pub fn new() -> Self {
            Self {
                success: true,
                message: "Reminder deleted successfully".into(),
            }
        }
    }

    impl Default for APIResponse {
        fn default() -> Self {
            Self::new()
        }
    }
}
