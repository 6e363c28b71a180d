use crate::{APIResponse, BaseClient};
use remindme_api_structs::*;
use remindme_domain::{ReminderMethod, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

/// Mirrors the create request body. Fields are optional so that tests can
/// submit incomplete payloads and observe the field errors.
pub struct CreateReminderInput {
    pub date: Option<String>,
    pub time: Option<String>,
    pub message: Option<String>,
    pub reminder_method: Option<String>,
    pub contact_info: Option<String>,
}

pub struct UpdateReminderInput {
    pub reminder_id: ID,
    pub date: Option<String>,
    pub time: Option<String>,
    pub message: Option<String>,
    pub reminder_method: Option<ReminderMethod>,
    pub contact_info: Option<String>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            date: input.date,
            time: input.time,
            message: input.message,
            reminder_method: input.reminder_method,
            contact_info: input.contact_info,
        };

        self.base
            .post(body, "reminders".into(), StatusCode::CREATED)
            .await
    }

    pub async fn list(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("reminders".into(), StatusCode::OK).await
    }

    pub async fn get(&self, reminder_id: ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateReminderInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        let reminder_id = input.reminder_id.clone();
        let body = update_reminder::RequestBody {
            date: input.date,
            time: input.time,
            message: input.message,
            reminder_method: input.reminder_method,
            contact_info: input.contact_info,
        };

        self.base
            .put(body, format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }
}
