use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
	domain::post::{CreatePost, Post},
	services::response::ServiceError,
};

use super::PostRepository;

#[derive(Default)]
pub struct InMemoryPostRepository {
	posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
	pub async fn count(&self) -> usize {
		self.posts.read().await.len()
	}

	pub async fn last(&self) -> Option<Post> {
		self.posts.read().await.last().cloned()
	}
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
	async fn create(
		&self,
		command: CreatePost,
	) -> Result<Post, ServiceError> {
		let mut posts = self.posts.write().await;
		let post = Post {
			id: posts.len() as i64 + 1,
			title: command.title,
			content: command.content,
			author: command.author,
			published: command.published,
			create_dt: Utc::now(),
		};
		posts.push(post.clone());
		Ok(post)
	}

	async fn get(
		&self,
		id: i64,
	) -> Result<Option<Post>, ServiceError> {
		Ok(self.posts.read().await.iter().find(|post| post.id == id).cloned())
	}
}
