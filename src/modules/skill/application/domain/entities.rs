use serde::{Deserialize, Serialize};

use crate::shared::form::{check_field, FieldErrors, FormValues, Rule};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// Body of `POST /api/skill`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillDraft {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillForm {
    pub name: String,
    /// Uploaded icon URL.
    pub icon: String,
}

impl FormValues for SkillForm {
    type Record = SkillDraft;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        check_field(&mut errors, "name", &self.name, &[Rule::Required("Skill name is required")]);
        check_field(&mut errors, "icon", &self.icon, &[Rule::Required("Icon is required")]);
        errors
    }

    fn assemble(&self) -> Result<Self::Record, FieldErrors> {
        Ok(SkillDraft {
            name: self.name.trim().to_string(),
            icon: self.icon.trim().to_string(),
        })
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "icon" => self.icon = value,
            _ => return false,
        }
        true
    }
}
