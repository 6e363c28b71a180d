use crate::error::RemindmeError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindme_api_structs::get_reminders::*;
use remindme_domain::Reminder;
use remindme_infra::RemindmeContext;

pub async fn get_reminders_controller(
    ctx: web::Data<RemindmeContext>,
) -> Result<HttpResponse, RemindmeError> {
    let usecase = GetRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(RemindmeError::from)
}

#[derive(Debug)]
pub struct GetRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for RemindmeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseError;

    // The repository returns reminders ordered by scheduled instant, which
    // is the ordering the presentation layer relies on
    async fn execute(&mut self, ctx: &RemindmeContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .reminders
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
