pub mod commands;
pub mod entity;

pub use commands::{CreatePost, FieldErrors, PostForm};
pub use entity::Post;
