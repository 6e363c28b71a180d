use crate::error::RemindmeError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindme_api_structs::create_reminder::*;
use remindme_domain::{
    validate_create, CreateReminderFields, FieldErrors, Reminder, ReminderStatus,
};
use remindme_infra::RemindmeContext;

pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<RemindmeContext>,
) -> Result<HttpResponse, RemindmeError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        fields: CreateReminderFields {
            date: body.date,
            time: body.time,
            message: body.message,
            reminder_method: body.reminder_method,
            contact_info: body.contact_info,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(RemindmeError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub fields: CreateReminderFields,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidFields(FieldErrors),
    StorageError,
}

impl From<UseCaseError> for RemindmeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidFields(errors) => Self::ValidationFailed(errors),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &RemindmeContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();

        // Validation runs fully before any persistence attempt, a rejected
        // submission is never partially stored
        let new_reminder =
            validate_create(&self.fields, now).map_err(UseCaseError::InvalidFields)?;

        let reminder = Reminder {
            id: Default::default(),
            remind_at: new_reminder.remind_at,
            message: new_reminder.message,
            method: new_reminder.method,
            contact_info: new_reminder.contact_info,
            status: ReminderStatus::Pending,
            created: now,
            version: 0,
        };

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }
}
