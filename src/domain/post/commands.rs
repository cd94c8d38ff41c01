use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const TITLE_MAX_LEN: usize = 100;
pub const CONTENT_MAX_LEN: usize = 1000;
pub const AUTHOR_MAX_LEN: usize = 50;

/// Value a checked checkbox submits when it carries no explicit `value`.
pub const CHECKBOX_ON: &str = "on";

const FIELDS: [&str; 4] = ["title", "content", "author", "published"];

/// Fields as they arrive from the urlencoded body.
/// Absent text fields read as empty so they fail the length check.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PostForm {
	#[serde(default)]
	#[validate(length(min = 1, max = 100))]
	pub title: String,
	#[serde(default)]
	#[validate(length(min = 1, max = 1000))]
	pub content: String,
	#[serde(default)]
	#[validate(length(min = 1, max = 50))]
	pub author: String,
	#[serde(default)]
	pub published: Option<String>,
	/// Known fields submitted more than once. Only the first value is kept.
	#[serde(skip)]
	pub repeated: BTreeSet<String>,
}

impl PostForm {
	/// Builds the form from raw body pairs, in submission order.
	/// Unknown keys are ignored.
	pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
		let mut form = PostForm::default();
		let mut seen = BTreeSet::new();

		for (name, value) in pairs {
			if !FIELDS.contains(&name.as_str()) {
				continue;
			}
			if !seen.insert(name.clone()) {
				form.repeated.insert(name);
				continue;
			}
			match name.as_str() {
				"title" => form.title = value,
				"content" => form.content = value,
				"author" => form.author = value,
				_ => form.published = Some(value),
			}
		}
		form
	}

	pub fn is_published_checked(&self) -> bool {
		self.published.is_some()
	}

	fn text_fields(&self) -> [(&'static str, &str, usize); 3] {
		[
			("title", &self.title, TITLE_MAX_LEN),
			("content", &self.content, CONTENT_MAX_LEN),
			("author", &self.author, AUTHOR_MAX_LEN),
		]
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePost {
	pub title: String,
	pub content: String,
	pub author: String,
	pub published: bool,
}

impl TryFrom<&PostForm> for CreatePost {
	type Error = FieldErrors;

	fn try_from(form: &PostForm) -> Result<Self, Self::Error> {
		let mut errors = FieldErrors::default();

		let invalid: BTreeSet<&'static str> = match form.validate() {
			Ok(()) => BTreeSet::new(),
			Err(validation) => validation.field_errors().into_keys().collect(),
		};
		for (field, value, max) in form.text_fields() {
			if !invalid.contains(field) {
				continue;
			}
			if value.is_empty() {
				errors.insert(field, "Required");
			} else {
				errors.insert(field, format!("String must contain at most {max} character(s)"));
			}
		}

		let published = match form.published.as_deref() {
			None => false,
			Some(CHECKBOX_ON) => true,
			Some(_) => {
				errors.insert("published", "Invalid input");
				false
			}
		};

		for field in &form.repeated {
			errors.insert(field.as_str(), "Invalid input");
		}

		if !errors.is_empty() {
			return Err(errors);
		}

		Ok(CreatePost {
			title: form.title.clone(),
			content: form.content.clone(),
			author: form.author.clone(),
			published,
		})
	}
}

/// Per-field messages, keyed by form field name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
	pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
		self.0.insert(field.into(), message.into());
	}

	pub fn message(&self, field: &str) -> Option<&str> {
		self.0.get(field).map(String::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}
}
