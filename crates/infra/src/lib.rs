mod config;
mod repos;
mod system;

pub use config::Config;
use repos::Repos;
pub use repos::IReminderRepo;
use std::sync::Arc;
pub use system::{FrozenSys, ISys};
use system::RealSys;
use tracing::info;

#[derive(Clone)]
pub struct RemindmeContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl RemindmeContext {
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }

    async fn create_postgres(connection_string: &str) -> Self {
        let repos = Repos::create_postgres(connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment. Connects to
/// postgres when `DATABASE_URL` is set and falls back to inmemory
/// repositories otherwise.
pub async fn setup_context() -> RemindmeContext {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    match std::env::var(PSQL_CONNECTION_STRING) {
        Ok(connection_string) => RemindmeContext::create_postgres(&connection_string).await,
        Err(_) => {
            info!(
                "{} env var not present. Using inmemory repositories.",
                PSQL_CONNECTION_STRING
            );
            RemindmeContext::create_inmemory()
        }
    }
}
