use axum::{
	extract::State,
	http::{header::ACCEPT, HeaderMap, StatusCode},
	response::{Html, IntoResponse, Redirect, Response},
	Form, Json,
};
use axum_macros::debug_handler;
use serde_json::json;

use crate::{
	domain::post::PostForm,
	services::{
		handlers::{CreatePostOutcome, PostHandler},
		response::ServiceError,
	},
	state::PostState,
	views::{self, CreatePostPage},
};

pub async fn create_post_form() -> Result<Html<String>, ServiceError> {
	views::render(&CreatePostPage::blank())
}

#[debug_handler]
pub async fn create_post(
	State(state): State<PostState>,
	headers: HeaderMap,
	Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, ServiceError> {
	match PostHandler::create_post(PostForm::from_pairs(pairs), state).await? {
		CreatePostOutcome::Created(post) => Ok(Redirect::to(&format!("/post/{}", post.id)).into_response()),
		CreatePostOutcome::Rejected { errors, .. } if wants_json(&headers) => {
			Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "fieldErrors": errors }))).into_response())
		}
		CreatePostOutcome::Rejected { form, errors } => {
			let page = views::render(&CreatePostPage::new(form, errors))?;
			Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
		}
	}
}

fn wants_json(headers: &HeaderMap) -> bool {
	headers
		.get(ACCEPT)
		.and_then(|value| value.to_str().ok())
		.map_or(false, |value| value.contains("application/json"))
}
