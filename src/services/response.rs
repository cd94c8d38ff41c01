use std::fmt::Display;

use axum::{
	http::StatusCode,
	response::{Html, IntoResponse, Response},
};

use crate::views::{self, NotFoundPage};

pub type AnyError = dyn std::error::Error + Send + Sync + 'static;

#[derive(Debug)]
pub enum ServiceError {
	ConfigError(String),
	DatabaseConnectionError(Box<AnyError>),
	DatabaseError(Box<AnyError>),
	MigrationError(Box<AnyError>),
	TemplateError(Box<AnyError>),
	ServerError(Box<AnyError>),
	EntityNotFound,
}

impl Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ServiceError::ConfigError(res) => write!(f, "ConfigError: {}", res),
			ServiceError::DatabaseConnectionError(res) => write!(f, "DatabaseConnectionError: {}", res),
			ServiceError::DatabaseError(res) => write!(f, "DatabaseError: {}", res),
			ServiceError::MigrationError(res) => write!(f, "MigrationError: {}", res),
			ServiceError::TemplateError(res) => write!(f, "TemplateError: {}", res),
			ServiceError::ServerError(res) => write!(f, "ServerError: {}", res),
			ServiceError::EntityNotFound => write!(f, "EntityNotFound"),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<sqlx::Error> for ServiceError {
	fn from(value: sqlx::Error) -> Self {
		ServiceError::DatabaseError(Box::new(value))
	}
}

impl From<rinja::Error> for ServiceError {
	fn from(value: rinja::Error) -> Self {
		ServiceError::TemplateError(Box::new(value))
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		match self {
			ServiceError::EntityNotFound => match views::render(&NotFoundPage) {
				Ok(page) => (StatusCode::NOT_FOUND, page).into_response(),
				Err(_) => (StatusCode::NOT_FOUND, "Not Found").into_response(),
			},
			err => {
				tracing::error!("Request failed : {}", err);
				(StatusCode::INTERNAL_SERVER_ERROR, Html("<h1>Internal Server Error</h1>")).into_response()
			}
		}
	}
}
