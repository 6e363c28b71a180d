use crate::error::RemindmeError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindme_api_structs::get_reminder::*;
use remindme_domain::{Reminder, ID};
use remindme_infra::RemindmeContext;

pub async fn get_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RemindmeContext>,
) -> Result<HttpResponse, RemindmeError> {
    let usecase = GetReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(RemindmeError::from)
}

#[derive(Debug)]
pub struct GetReminderUseCase {
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
impl UseCase for GetReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &RemindmeContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .reminders
            .find(&self.reminder_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.reminder_id.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn get_nonexisting_reminder() {
        let ctx = RemindmeContext::create_inmemory();

        let mut usecase = GetReminderUseCase {
            reminder_id: Default::default(),
        };

        let res = usecase.execute(&ctx).await;
        assert!(res.is_err());
    }
}
