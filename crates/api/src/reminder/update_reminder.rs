use crate::error::RemindmeError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindme_api_structs::update_reminder::*;
use remindme_domain::{
    compose_local, date_components, is_valid_date, is_valid_email, is_valid_phone, is_valid_time,
    time_components, FieldErrors, Reminder, ReminderMethod, ID,
};
use remindme_infra::RemindmeContext;

pub async fn update_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<RemindmeContext>,
) -> Result<HttpResponse, RemindmeError> {
    let body = body.0;
    let usecase = UpdateReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
        date: body.date,
        time: body.time,
        message: body.message,
        method: body.reminder_method,
        contact_info: body.contact_info,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(RemindmeError::from)
}

#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub date: Option<String>,
    pub time: Option<String>,
    pub message: Option<String>,
    pub method: Option<ReminderMethod>,
    pub contact_info: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidFields(FieldErrors),
    Conflict(ID),
    StorageError,
}

impl From<UseCaseError> for RemindmeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::InvalidFields(errors) => Self::ValidationFailed(errors),
            UseCaseError::Conflict(reminder_id) => Self::Conflict(format!(
                "The reminder with id: {}, was modified concurrently. Please retry.",
                reminder_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &RemindmeContext) -> Result<Self::Response, Self::Errors> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) => reminder,
            None => return Err(UseCaseError::NotFound(self.reminder_id.clone())),
        };

        let mut errors = FieldErrors::new();

        let date = match &self.date {
            Some(date) => match is_valid_date(date) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.insert("date".into(), "Date must be on the format YYYY-MM-DD".into());
                    None
                }
            },
            None => None,
        };
        let time = match &self.time {
            Some(time) => match is_valid_time(time) {
                Ok(time) => Some(time),
                Err(_) => {
                    errors.insert("time".into(), "Time must be on the format HH:MM".into());
                    None
                }
            },
            None => None,
        };

        // The scheduled instant keeps whichever half the patch leaves out
        match (date, time) {
            (Some(date), Some(time)) => reminder.remind_at = compose_local(date, time),
            (Some(date), None) if self.time.is_none() => {
                reminder.remind_at = compose_local(date, time_components(reminder.remind_at));
            }
            (None, Some(time)) if self.date.is_none() => {
                reminder.remind_at = compose_local(date_components(reminder.remind_at), time);
            }
            _ => {}
        }

        if let Some(message) = &self.message {
            if message.trim().is_empty() {
                errors.insert("message".into(), "Message is required".into());
            } else {
                reminder.message = message.trim().to_string();
            }
        }
        if let Some(method) = self.method {
            reminder.method = method;
        }
        if let Some(contact_info) = &self.contact_info {
            if contact_info.trim().is_empty() {
                errors.insert(
                    "contactInfo".into(),
                    "Contact information is required".into(),
                );
            } else {
                reminder.contact_info = contact_info.trim().to_string();
            }
        }

        // The merged record must still carry a contact matching its method,
        // also when only one of the two changed
        let contact_error = match reminder.method {
            ReminderMethod::Email if !is_valid_email(&reminder.contact_info) => {
                Some("Please enter a valid email address")
            }
            ReminderMethod::Sms if !is_valid_phone(&reminder.contact_info) => {
                Some("Please enter a valid phone number")
            }
            _ => None,
        };
        if let Some(contact_error) = contact_error {
            errors
                .entry("contactInfo".into())
                .or_insert_with(|| contact_error.into());
        }

        if !errors.is_empty() {
            return Err(UseCaseError::InvalidFields(errors));
        }

        match ctx.repos.reminders.save(&reminder).await {
            Ok(true) => {
                // Mirror the version bump the storage layer performed
                reminder.version += 1;
                Ok(reminder)
            }
            Ok(false) => Err(UseCaseError::Conflict(self.reminder_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use remindme_domain::ReminderStatus;

    fn patch(reminder_id: ID) -> UpdateReminderUseCase {
        UpdateReminderUseCase {
            reminder_id,
            date: None,
            time: None,
            message: None,
            method: None,
            contact_info: None,
        }
    }

    async fn insert_reminder(ctx: &RemindmeContext) -> Reminder {
        let reminder = Reminder {
            id: Default::default(),
            remind_at: compose_local((2099, 6, 1), (9, 30)),
            message: "Pay rent".into(),
            method: ReminderMethod::Sms,
            contact_info: "+15551234567".into(),
            status: ReminderStatus::Pending,
            created: 0,
            version: 0,
        };
        ctx.repos.reminders.insert(&reminder).await.unwrap();
        reminder
    }

    #[actix_web::main]
    #[test]
    async fn update_nonexisting_reminder() {
        let ctx = RemindmeContext::create_inmemory();

        let mut usecase = patch(Default::default());
        let res = usecase.execute(&ctx).await;
        assert!(res.is_err());
    }

    #[actix_web::main]
    #[test]
    async fn updating_only_time_preserves_the_date() {
        let ctx = RemindmeContext::create_inmemory();
        let reminder = insert_reminder(&ctx).await;

        let mut usecase = patch(reminder.id.clone());
        usecase.time = Some("18:45".into());

        let updated = usecase.execute(&ctx).await.unwrap();

        assert_eq!(updated.remind_at, compose_local((2099, 6, 1), (18, 45)));
        let stored = ctx.repos.reminders.find(&reminder.id).await.unwrap();
        assert_eq!(stored.remind_at, updated.remind_at);
    }

    #[actix_web::main]
    #[test]
    async fn updating_only_date_preserves_the_time() {
        let ctx = RemindmeContext::create_inmemory();
        let reminder = insert_reminder(&ctx).await;

        let mut usecase = patch(reminder.id.clone());
        usecase.date = Some("2099-12-24".into());

        let updated = usecase.execute(&ctx).await.unwrap();

        assert_eq!(updated.remind_at, compose_local((2099, 12, 24), (9, 30)));
    }

    #[actix_web::main]
    #[test]
    async fn updating_date_and_time_composes_a_new_instant() {
        let ctx = RemindmeContext::create_inmemory();
        let reminder = insert_reminder(&ctx).await;

        let mut usecase = patch(reminder.id.clone());
        usecase.date = Some("2100-01-01".into());
        usecase.time = Some("00:00".into());

        let updated = usecase.execute(&ctx).await.unwrap();

        assert_eq!(updated.remind_at, compose_local((2100, 1, 1), (0, 0)));
    }

    #[actix_web::main]
    #[test]
    async fn absent_fields_are_left_untouched() {
        let ctx = RemindmeContext::create_inmemory();
        let reminder = insert_reminder(&ctx).await;

        let mut usecase = patch(reminder.id.clone());
        usecase.message = Some("Pay rent tomorrow".into());

        let updated = usecase.execute(&ctx).await.unwrap();

        assert_eq!(updated.message, "Pay rent tomorrow");
        assert_eq!(updated.remind_at, reminder.remind_at);
        assert_eq!(updated.method, reminder.method);
        assert_eq!(updated.contact_info, reminder.contact_info);
        assert_eq!(updated.status, reminder.status);
    }

    #[actix_web::main]
    #[test]
    async fn merged_record_must_keep_contact_format() {
        let ctx = RemindmeContext::create_inmemory();
        let reminder = insert_reminder(&ctx).await;

        // Switching the method without a matching contact is rejected
        let mut usecase = patch(reminder.id.clone());
        usecase.method = Some(ReminderMethod::Email);

        let res = usecase.execute(&ctx).await;
        match res.unwrap_err() {
            UseCaseError::InvalidFields(errors) => {
                assert!(errors.contains_key("contactInfo"));
            }
            e => panic!("Unexpected usecase error: {:?}", e),
        }

        // Switching both together goes through
        let mut usecase = patch(reminder.id.clone());
        usecase.method = Some(ReminderMethod::Email);
        usecase.contact_info = Some("a@b.com".into());

        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.method, ReminderMethod::Email);
        assert_eq!(updated.contact_info, "a@b.com");
    }

    #[actix_web::main]
    #[test]
    async fn rejected_updates_change_nothing() {
        let ctx = RemindmeContext::create_inmemory();
        let reminder = insert_reminder(&ctx).await;

        let mut usecase = patch(reminder.id.clone());
        usecase.date = Some("not-a-date".into());
        usecase.message = Some("  ".into());

        let res = usecase.execute(&ctx).await;
        match res.unwrap_err() {
            UseCaseError::InvalidFields(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.contains_key("date"));
                assert!(errors.contains_key("message"));
            }
            e => panic!("Unexpected usecase error: {:?}", e),
        }

        let stored = ctx.repos.reminders.find(&reminder.id).await.unwrap();
        assert_eq!(stored, reminder);
    }
}
