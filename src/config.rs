use crate::services::response::ServiceError;

pub struct Config {
	/// Which errors we want to log
	pub log_level: String,

	/// Port server is listening to
	pub server_ip_port: String,
	pub database_url: String,
	pub allow_origins: String,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		Self::from_source(|key| std::env::var(key).ok())
	}

	pub fn from_source(var: impl Fn(&str) -> Option<String>) -> Result<Config, ServiceError> {
		let log_level = var("LOG_LEVEL").unwrap_or("warn".to_string());
		let server_ip_port = var("SERVER_IP_PORT").unwrap_or("0.0.0.0:80".into());
		let database_url = var("DATABASE_URL").ok_or_else(|| ServiceError::ConfigError("DATABASE_URL must be set!".into()))?;
		let allow_origins = var("ALLOW_ORIGINS").unwrap_or("http://localhost:3000,http://localhost:3001".to_string());

		Ok(Config {
			log_level,
			server_ip_port,
			database_url,
			allow_origins,
		})
	}

	pub fn allow_origins(&self) -> impl Iterator<Item = &str> {
		self.allow_origins.split(',').map(str::trim).filter(|origin| !origin.is_empty())
	}
}
