use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    domain::{
        common::{LLMConfig, SparkConfig, entities::app_errors::CoreError, services::Service},
        food::ports::FoodService,
        llm::{services::CompletionService, usage::UsageTracker},
    },
    infrastructure::{
        consumption_log::repositories::consumption_log_repository::PostgresConsumptionLogRepository,
        db::postgres::{Postgres, PostgresConfig},
        food::{repositories::food_repository::PostgresFoodRepository, seed_data::default_catalog},
        health::repository::PostgresHealthCheckRepository,
        llm::openai_client::OpenAICompletionTransport,
        user_preference::repositories::user_preference_repository::PostgresUserPreferenceRepository,
    },
};

pub type SparkLLMClient = CompletionService<OpenAICompletionTransport>;

pub type SparkService = Service<
    PostgresFoodRepository,
    PostgresUserPreferenceRepository,
    PostgresConsumptionLogRepository,
    PostgresHealthCheckRepository,
    SparkLLMClient,
>;

const MAX_DB_CONNECTIONS: u32 = 10;

/// Connects to the database, applies migrations, wires the service and seeds
/// the catalog.
pub async fn create_service(config: SparkConfig) -> Result<SparkService, CoreError> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
        max_connections: MAX_DB_CONNECTIONS,
    })
    .await?;

    let service = create_service_with_connection(postgres.get_db(), &config.llm)?;

    let inserted = service.seed_catalog(default_catalog()).await?;
    info!("Service ready ({} new catalog foods)", inserted);

    Ok(service)
}

/// Wires the service on an existing connection. No migrations, no seeding.
pub fn create_service_with_connection(
    db: impl Into<Arc<DatabaseConnection>>,
    llm: &LLMConfig,
) -> Result<SparkService, CoreError> {
    let db: Arc<DatabaseConnection> = db.into();
    let usage = Arc::new(UsageTracker::new());

    let llm_client = match llm.api_key() {
        Some(api_key) => {
            let transport = OpenAICompletionTransport::new(
                api_key.to_string(),
                llm.openai_base_url.clone(),
                Duration::from_secs(llm.request_timeout_secs),
            )?;
            CompletionService::new(transport, llm.openai_model.clone(), usage)
        }
        None => CompletionService::disabled(llm.openai_model.clone(), usage),
    };

    Ok(Service::new(
        PostgresFoodRepository::new(db.clone()),
        PostgresUserPreferenceRepository::new(db.clone()),
        PostgresConsumptionLogRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        llm_client,
    ))
}
