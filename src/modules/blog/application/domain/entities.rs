use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::modules::editor;
use crate::shared::form::validation::IMAGE_URL;
use crate::shared::form::{check_field, FieldErrors, FormValues, Rule};

// ──────────────────────────────────────────────────────────
// Record
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    /// HTML produced by the rich-text editor.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default, deserialize_with = "author_id")]
    pub author: String,
}

/// The API sends the author either as an id or populated as a user object.
fn author_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::String(id)) => id,
        Some(Value::Object(user)) => ["_id", "id"]
            .iter()
            .find_map(|key| user.get(*key).and_then(Value::as_str))
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    })
}

/// Validated title, canonical content and image, shared by create and edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogFields {
    pub title: String,
    pub content: String,
    pub image: String,
}

/// Body of `POST /api/blogs`. New posts go out published and owned by the
/// signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogDraft {
    #[serde(flatten)]
    pub fields: BlogFields,
    pub published: bool,
    pub author: String,
}

impl BlogDraft {
    pub fn new(fields: BlogFields, author: impl Into<String>) -> Self {
        Self {
            fields,
            published: true,
            author: author.into(),
        }
    }
}

// ──────────────────────────────────────────────────────────
// Form
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogForm {
    pub title: String,
    pub content: String,
    pub image: String,
}

impl From<&BlogPost> for BlogForm {
    fn from(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            content: editor::canonical_content(&post.content),
            image: post.image.clone(),
        }
    }
}

impl FormValues for BlogForm {
    type Record = BlogFields;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        check_field(
            &mut errors,
            "title",
            &self.title,
            &[
                Rule::Required("Title is required"),
                Rule::MinLength(5, "Title must be at least 5 characters"),
            ],
        );
        check_field(
            &mut errors,
            "image",
            &self.image,
            &[
                Rule::Required("Image URL is required"),
                Rule::Pattern(&IMAGE_URL, "Please enter a valid image URL"),
            ],
        );
        // An editor left blank still holds `<p></p>`
        if editor::is_blank(&self.content) {
            errors.insert("content", "Content is required");
        }
        errors
    }

    fn assemble(&self) -> Result<Self::Record, FieldErrors> {
        Ok(BlogFields {
            title: self.title.trim().to_string(),
            content: editor::canonical_content(&self.content),
            image: self.image.trim().to_string(),
        })
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "title" => self.title = value,
            "content" => self.content = value,
            "image" => self.image = value,
            _ => return false,
        }
        true
    }
}
