use chrono::{DateTime, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::shared::form::validation::ISO_DATE;
use crate::shared::form::{check_field, split_list, FieldErrors, FormValues, Rule};

/// Wire and form format for experience dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const INVALID_DATE: &str = "Please enter a valid date";

/// `2024-03-01`, or a full RFC 3339 timestamp as stored by the API.
pub fn parse_api_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|ts| ts.date_naive())
        })
}

/// Missing, null and `""` all mean "no date".
fn optional_api_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => parse_api_date(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date `{}`", raw))),
        _ => Ok(None),
    }
}

// ──────────────────────────────────────────────────────────
// Record
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "optional_api_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "optional_api_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub company_icon: String,
}

/// Body of both `POST /api/experience` and `PATCH /api/experience/{id}`.
/// `endDate` goes out as `null` for a current position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDraft {
    pub company: String,
    pub role: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub location: String,
    pub technologies: Vec<String>,
    pub is_current: bool,
    pub company_icon: String,
}

// ──────────────────────────────────────────────────────────
// Form
// ──────────────────────────────────────────────────────────

/// Add-experience page. Dates come from `<input type="date">`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceForm {
    pub company: String,
    pub role: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub technologies: String,
    pub is_current: bool,
    pub company_icon: String,
}

impl ExperienceForm {
    fn check_common(&self, errors: &mut FieldErrors) {
        check_field(errors, "company", &self.company, &[Rule::Required("Company is required")]);
        check_field(errors, "role", &self.role, &[Rule::Required("Role is required")]);
        check_field(
            errors,
            "description",
            &self.description,
            &[Rule::Required("Description is required")],
        );
        check_field(
            errors,
            "startDate",
            self.start_date.trim(),
            &[
                Rule::Required("Start date is required"),
                Rule::Pattern(&ISO_DATE, INVALID_DATE),
            ],
        );
        if !self.is_current {
            check_field(
                errors,
                "endDate",
                self.end_date.trim(),
                &[Rule::Pattern(&ISO_DATE, INVALID_DATE)],
            );
        }
    }

    /// The pattern lets `2024-02-30` through; the calendar does not.
    fn draft(&self) -> Result<ExperienceDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        let start_date = NaiveDate::parse_from_str(self.start_date.trim(), DATE_FORMAT).ok();
        if start_date.is_none() {
            errors.insert("startDate", INVALID_DATE);
        }

        let end = self.end_date.trim();
        let end_date = if self.is_current || end.is_empty() {
            None
        } else {
            let parsed = NaiveDate::parse_from_str(end, DATE_FORMAT).ok();
            if parsed.is_none() {
                errors.insert("endDate", INVALID_DATE);
            }
            parsed
        };

        match start_date {
            Some(start_date) if errors.is_empty() => Ok(ExperienceDraft {
                company: self.company.trim().to_string(),
                role: self.role.trim().to_string(),
                description: self.description.trim().to_string(),
                start_date,
                end_date,
                location: self.location.trim().to_string(),
                technologies: split_list(&self.technologies),
                is_current: self.is_current,
                company_icon: self.company_icon.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }

    fn set(&mut self, field: &str, value: String) -> bool {
        match field {
            "company" => self.company = value,
            "role" => self.role = value,
            "description" => self.description = value,
            "startDate" => self.start_date = value,
            "endDate" => self.end_date = value,
            "location" => self.location = value,
            "technologies" => self.technologies = value,
            "isCurrent" => self.is_current = matches!(value.trim(), "true" | "on" | "1"),
            "companyIcon" => self.company_icon = value,
            _ => return false,
        }
        true
    }
}

impl From<&Experience> for ExperienceForm {
    fn from(experience: &Experience) -> Self {
        Self {
            company: experience.company.clone(),
            role: experience.role.clone(),
            description: experience.description.clone(),
            start_date: experience
                .start_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            end_date: experience
                .end_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            location: experience.location.clone(),
            technologies: experience.technologies.join(", "),
            is_current: experience.is_current,
            company_icon: experience.company_icon.clone(),
        }
    }
}

impl FormValues for ExperienceForm {
    type Record = ExperienceDraft;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        self.check_common(&mut errors);
        errors
    }

    fn assemble(&self) -> Result<Self::Record, FieldErrors> {
        self.draft()
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        self.set(field, value)
    }
}

/// Edit-experience page: location and technologies become required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperienceEditForm(pub ExperienceForm);

impl FormValues for ExperienceEditForm {
    type Record = ExperienceDraft;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        self.0.check_common(&mut errors);
        check_field(
            &mut errors,
            "location",
            &self.0.location,
            &[Rule::Required("Location is required")],
        );
        check_field(
            &mut errors,
            "technologies",
            &self.0.technologies,
            &[Rule::Required("Technologies are required")],
        );
        errors
    }

    fn assemble(&self) -> Result<Self::Record, FieldErrors> {
        self.0.draft()
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        self.0.set(field, value)
    }
}
