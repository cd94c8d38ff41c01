use std::{net::SocketAddr, str::FromStr};

use axum::http::{HeaderValue, Method};

use post_board::{
	adapters::repositories::PgPostRepository,
	database,
	dependencies::{config, connection_pool},
	routes::create_routes,
	services::response::ServiceError,
	state::PostState,
};
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	trace::TraceLayer,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
	println!("Environment Variable Is Being Set...");
	dotenv::dotenv().ok();
	let config = config()?;

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("{},tower_http=debug,axum::rejection=trace", config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Connection
	tracing::info!("Connections Are Being Pooled...");
	let pool = connection_pool().await?;
	database::migrate(pool).await?;

	let state: PostState = PgPostRepository::new(pool.clone()).into();

	let origins = config
		.allow_origins()
		.map(|origin| HeaderValue::from_str(origin).map_err(|err| ServiceError::ConfigError(format!("Invalid origin `{origin}` : {err}"))))
		.collect::<Result<Vec<_>, _>>()?;

	let app = create_routes(state)
		.layer(
			CorsLayer::new()
				.allow_origin(AllowOrigin::list(origins))
				.allow_methods([Method::GET, Method::POST]),
		)
		.layer(TraceLayer::new_for_http());

	let addr = SocketAddr::from_str(&config.server_ip_port)
		.map_err(|err| ServiceError::ConfigError(format!("Invalid SERVER_IP_PORT `{}` : {}", config.server_ip_port, err)))?;

	tracing::info!("Start Web Server on {}", addr);
	axum::Server::bind(&addr)
		.serve(app.into_make_service())
		.await
		.map_err(|err| ServiceError::ServerError(Box::new(err)))
}
