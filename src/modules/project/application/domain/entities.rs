use serde::{Deserialize, Serialize};

use crate::shared::form::{check_field, split_list, FieldErrors, FormValues, Rule};

// ──────────────────────────────────────────────────────────
// Record
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub screenshots: Vec<String>,
}

/// Body of `POST /api/project`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub thumbnail: String,
    pub is_featured: bool,
    pub tags: Vec<String>,
    pub screenshots: Vec<String>,
}

/// Body of `PATCH /api/project/{id}`. Without a new thumbnail the stored one
/// is left alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub is_featured: bool,
    pub tags: Vec<String>,
}

// ──────────────────────────────────────────────────────────
// Form
// ──────────────────────────────────────────────────────────

/// Add-project page. Technologies and tags are typed comma separated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub thumbnail: String,
    pub is_featured: bool,
    pub tags: String,
}

impl ProjectForm {
    fn check_common(&self, errors: &mut FieldErrors) {
        check_field(errors, "title", &self.title, &[Rule::Required("Title is required")]);
        check_field(
            errors,
            "description",
            &self.description,
            &[Rule::Required("Description is required")],
        );
        check_field(
            errors,
            "technologies",
            &self.technologies,
            &[Rule::Required("Technologies are required")],
        );
    }

    fn set(&mut self, field: &str, value: String) -> bool {
        match field {
            "title" => self.title = value,
            "description" => self.description = value,
            "technologies" => self.technologies = value,
            "thumbnail" => self.thumbnail = value,
            "isFeatured" => self.is_featured = matches!(value.trim(), "true" | "on" | "1"),
            "tags" => self.tags = value,
            _ => return false,
        }
        true
    }
}

impl From<&Project> for ProjectForm {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.join(", "),
            thumbnail: project.thumbnail.clone(),
            is_featured: project.is_featured,
            tags: project.tags.join(", "),
        }
    }
}

impl FormValues for ProjectForm {
    type Record = ProjectDraft;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        self.check_common(&mut errors);
        check_field(
            &mut errors,
            "thumbnail",
            &self.thumbnail,
            &[Rule::Required("Thumbnail is required")],
        );
        errors
    }

    fn assemble(&self) -> Result<Self::Record, FieldErrors> {
        Ok(ProjectDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            technologies: split_list(&self.technologies),
            thumbnail: self.thumbnail.trim().to_string(),
            is_featured: self.is_featured,
            tags: split_list(&self.tags),
            screenshots: Vec::new(),
        })
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        self.set(field, value)
    }
}

/// Edit-project page: same fields, but the thumbnail may stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectEditForm(pub ProjectForm);

impl FormValues for ProjectEditForm {
    type Record = ProjectPatch;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        self.0.check_common(&mut errors);
        errors
    }

    fn assemble(&self) -> Result<Self::Record, FieldErrors> {
        let form = &self.0;
        let thumbnail = form.thumbnail.trim();

        Ok(ProjectPatch {
            title: form.title.trim().to_string(),
            description: form.description.trim().to_string(),
            technologies: split_list(&form.technologies),
            thumbnail: (!thumbnail.is_empty()).then(|| thumbnail.to_string()),
            is_featured: form.is_featured,
            tags: split_list(&form.tags),
        })
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        self.0.set(field, value)
    }
}
