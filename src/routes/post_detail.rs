use axum::{
	extract::{Path, State},
	response::Html,
};

use crate::{
	services::{handlers::PostHandler, response::ServiceError},
	state::PostState,
	views::{self, PostPage},
};

pub async fn post_detail(
	State(state): State<PostState>,
	Path(id): Path<i64>,
) -> Result<Html<String>, ServiceError> {
	let post = PostHandler::get_post(id, state).await?;
	views::render(&PostPage { post })
}

pub async fn not_found() -> ServiceError {
	ServiceError::EntityNotFound
}
