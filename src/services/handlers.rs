use crate::{
	domain::post::{CreatePost, FieldErrors, Post, PostForm},
	state::PostState,
};

use super::response::ServiceError;

pub enum CreatePostOutcome {
	Created(Post),
	Rejected { form: PostForm, errors: FieldErrors },
}

pub struct PostHandler;
impl PostHandler {
	/// Validates the submitted form and, only when every field passes,
	/// writes a single post.
	pub async fn create_post(
		form: PostForm,
		state: PostState,
	) -> Result<CreatePostOutcome, ServiceError> {
		let command = match CreatePost::try_from(&form) {
			Ok(command) => command,
			Err(errors) => {
				tracing::debug!("Post submission rejected : {:?}", errors);
				return Ok(CreatePostOutcome::Rejected { form, errors });
			}
		};

		let post = state.create(command).await?;
		tracing::info!(post_id = post.id, "Post created");

		Ok(CreatePostOutcome::Created(post))
	}

	pub async fn get_post(
		id: i64,
		state: PostState,
	) -> Result<Post, ServiceError> {
		state.get(id).await?.ok_or(ServiceError::EntityNotFound)
	}
}
