// src/types/application.rs
//! Structured job application, built once per request by ingestion and then
//! handed read-only to the PDF layout engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::non_blank;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: String,
    pub position: String,
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub education: Education,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub additional_info: AdditionalInfo,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub fullname_th: String,
    #[serde(default)]
    pub fullname_en: Option<String>,
    pub gender: String,
    pub birthdate: String,
    pub age: String,
    #[serde(default)]
    pub nationality: Option<String>,
    pub id_card: String,
    pub phone: String,
    pub line_id: String,
    pub email: String,
    #[serde(default)]
    pub address: Address,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub full: Option<String>,
    #[serde(default)]
    pub subdistrict: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub high_school: EducationSlot,
    #[serde(default)]
    pub vocational: EducationSlot,
    #[serde(default)]
    pub bachelor: EducationSlot,
    #[serde(default)]
    pub other: EducationSlot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    HighSchool,
    Vocational,
    Bachelor,
    Other,
}

impl EducationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School:",
            EducationLevel::Vocational => "Vocational:",
            EducationLevel::Bachelor => "Bachelor Degree:",
            EducationLevel::Other => "Other:",
        }
    }
}

impl Education {
    /// The four slots in display order, present or not.
    pub fn slots(&self) -> [(EducationLevel, &EducationSlot); 4] {
        [
            (EducationLevel::HighSchool, &self.high_school),
            (EducationLevel::Vocational, &self.vocational),
            (EducationLevel::Bachelor, &self.bachelor),
            (EducationLevel::Other, &self.other),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationSlot {
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

impl EducationSlot {
    /// A slot exists only when a school name was supplied.
    pub fn is_present(&self) -> bool {
        non_blank(self.school.as_deref()).is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdditionalInfo {
    #[serde(default)]
    pub special_skills: Option<String>,
    #[serde(default)]
    pub expected_salary: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub motivation: Option<String>,
}

impl ApplicationRecord {
    /// `Job_Application_{fullname}_{id}.pdf`
    pub fn pdf_filename(&self) -> String {
        format!(
            "Job_Application_{}_{}.pdf",
            crate::utils::sanitize_filename_component(&self.personal_info.fullname_th),
            self.id
        )
    }
}
