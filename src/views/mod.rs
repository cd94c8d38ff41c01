use axum::response::Html;
use rinja::Template;

use crate::{
	domain::post::{
		commands::{AUTHOR_MAX_LEN, CONTENT_MAX_LEN, TITLE_MAX_LEN},
		FieldErrors, Post, PostForm,
	},
	services::response::ServiceError,
};

pub fn render<T: Template>(page: &T) -> Result<Html<String>, ServiceError> {
	Ok(Html(page.render()?))
}

#[derive(Template)]
#[template(path = "create_post.html")]
pub struct CreatePostPage {
	pub form: PostForm,
	pub published: bool,
	pub errors: FieldErrors,
	pub title_max: usize,
	pub content_max: usize,
	pub author_max: usize,
}

impl CreatePostPage {
	pub fn new(
		form: PostForm,
		errors: FieldErrors,
	) -> Self {
		Self {
			published: form.is_published_checked(),
			form,
			errors,
			title_max: TITLE_MAX_LEN,
			content_max: CONTENT_MAX_LEN,
			author_max: AUTHOR_MAX_LEN,
		}
	}

	pub fn blank() -> Self {
		Self::new(PostForm::default(), FieldErrors::default())
	}
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostPage {
	pub post: Post,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage;
