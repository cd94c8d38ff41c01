use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
	domain::post::{CreatePost, Post},
	services::response::ServiceError,
};

use super::PostRepository;

#[derive(Clone)]
pub struct PgPostRepository {
	pool: PgPool,
}

impl PgPostRepository {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl PostRepository for PgPostRepository {
	async fn create(
		&self,
		command: CreatePost,
	) -> Result<Post, ServiceError> {
		let post = sqlx::query_as::<_, Post>(
			r#"
			INSERT INTO post (title, content, author, published)
			VALUES ($1, $2, $3, $4)
			RETURNING id, title, content, author, published, create_dt
			"#,
		)
		.bind(command.title)
		.bind(command.content)
		.bind(command.author)
		.bind(command.published)
		.fetch_one(&self.pool)
		.await?;
		Ok(post)
	}

	async fn get(
		&self,
		id: i64,
	) -> Result<Option<Post>, ServiceError> {
		let post = sqlx::query_as::<_, Post>(
			r#"
			SELECT id, title, content, author, published, create_dt
			FROM post
			WHERE id = $1
			"#,
		)
		.bind(id)
		.fetch_optional(&self.pool)
		.await?;
		Ok(post)
	}
}
