use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::services::response::ServiceError;

pub async fn connect(url: &str) -> Result<PgPool, ServiceError> {
	PgPoolOptions::new()
		.max_connections(30)
		.connect(url)
		.await
		.map_err(|err| ServiceError::DatabaseConnectionError(Box::new(err)))
}

/// Applies the migrations embedded from `./migrations`.
pub async fn migrate(pool: &PgPool) -> Result<(), ServiceError> {
	sqlx::migrate!("./migrations").run(pool).await.map_err(|err| {
		tracing::error!("Error occurred during migration : {:?}", err);
		ServiceError::MigrationError(Box::new(err))
	})
}
