mod create_post;
mod post_detail;

use axum::{routing::get, Router};

use crate::{
	routes::{
		create_post::{create_post, create_post_form},
		post_detail::{not_found, post_detail},
	},
	state::PostState,
};

pub fn create_routes(state: PostState) -> Router {
	Router::new()
		.route("/create-post", get(create_post_form).post(create_post))
		.route("/post/:id", get(post_detail))
		.fallback(not_found)
		.with_state(state)
}
