use std::{ops::Deref, sync::Arc};

use crate::adapters::repositories::PostRepository;

/// Router state shared by every request.
#[derive(Clone)]
pub struct PostState(pub Arc<dyn PostRepository>);

impl PostState {
	pub fn new(repository: Arc<dyn PostRepository>) -> Self {
		Self(repository)
	}
}

impl<R: PostRepository + 'static> From<R> for PostState {
	fn from(value: R) -> Self {
		Self(Arc::new(value))
	}
}

impl Deref for PostState {
	type Target = dyn PostRepository;
	fn deref(&self) -> &Self::Target {
		self.0.as_ref()
	}
}
