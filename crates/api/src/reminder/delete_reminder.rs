use crate::error::RemindmeError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindme_api_structs::delete_reminder::*;
use remindme_domain::{Reminder, ID};
use remindme_infra::RemindmeContext;

pub async fn delete_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RemindmeContext>,
) -> Result<HttpResponse, RemindmeError> {
    let usecase = DeleteReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new()))
        .map_err(RemindmeError::from)
}

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for RemindmeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &RemindmeContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .reminders
            .delete(&self.reminder_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.reminder_id.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use remindme_domain::{ReminderMethod, ReminderStatus};

    #[actix_web::main]
    #[test]
    async fn delete_nonexisting_reminder() {
        let ctx = RemindmeContext::create_inmemory();

        let mut usecase = DeleteReminderUseCase {
            reminder_id: Default::default(),
        };

        let res = usecase.execute(&ctx).await;
        assert!(res.is_err());
    }

    #[actix_web::main]
    #[test]
    async fn deleted_reminders_are_gone() {
        let ctx = RemindmeContext::create_inmemory();

        let reminder = Reminder {
            id: Default::default(),
            remind_at: 4070912400000,
            message: "Pay rent".into(),
            method: ReminderMethod::Sms,
            contact_info: "+15551234567".into(),
            status: ReminderStatus::Pending,
            created: 0,
            version: 0,
        };
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut usecase = DeleteReminderUseCase {
            reminder_id: reminder.id.clone(),
        };

        assert!(usecase.execute(&ctx).await.is_ok());
        assert!(ctx.repos.reminders.find(&reminder.id).await.is_none());

        // A second delete reports the reminder as missing
        let mut usecase = DeleteReminderUseCase {
            reminder_id: reminder.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_err());
    }
}
