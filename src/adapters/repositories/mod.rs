pub(crate) mod post_repository;
#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;

use crate::{
	domain::post::{CreatePost, Post},
	services::response::ServiceError,
};

pub use post_repository::PgPostRepository;

#[async_trait]
pub trait PostRepository: Send + Sync {
	/// Inserts exactly one row; the identifier comes from the database.
	async fn create(
		&self,
		command: CreatePost,
	) -> Result<Post, ServiceError>;

	async fn get(
		&self,
		id: i64,
	) -> Result<Option<Post>, ServiceError>;
}
