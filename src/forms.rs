// src/forms.rs
//! Raw submission fields and their conversion into validated records.
//!
//! Every field is optional at the parsing layer so that missing values reach
//! validation and come back as a structured 400 instead of a form-guard failure.

use chrono::{DateTime, Utc};
use rocket::form::FromForm;
use rocket::fs::TempFile;
use serde::Deserialize;

use crate::types::{
    AdditionalInfo, Address, ApplicationRecord, Education, EducationSlot, PersonalInfo,
    Subscriber, WholesaleInquiry, WorkExperience,
};
use crate::utils::{clean, submission_id};
use crate::validation::{require_fields, validate_email, ValidationError};

#[derive(Debug, Default, FromForm, Deserialize)]
#[serde(default)]
pub struct WholesaleInquiryForm {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub business_type: Option<String>,
    pub message: Option<String>,
}

impl WholesaleInquiryForm {
    pub fn validate(&self, now: DateTime<Utc>) -> Result<WholesaleInquiry, ValidationError> {
        require_fields(&[
            ("fullname", self.fullname.as_deref()),
            ("email", self.email.as_deref()),
            ("phone", self.phone.as_deref()),
            ("business_type", self.business_type.as_deref()),
        ])?;
        let email = required(&self.email);
        validate_email(&email)?;

        Ok(WholesaleInquiry {
            id: submission_id("INQ", now),
            fullname: required(&self.fullname),
            email,
            phone: required(&self.phone),
            business_type: required(&self.business_type),
            message: clean(&self.message),
            submitted_at: now,
        })
    }
}

#[derive(Debug, Default, FromForm, Deserialize)]
#[serde(default)]
pub struct NewsletterForm {
    pub email: Option<String>,
}

impl NewsletterForm {
    pub fn validate(&self, now: DateTime<Utc>) -> Result<Subscriber, ValidationError> {
        require_fields(&[("email", self.email.as_deref())])?;
        let email = required(&self.email);
        validate_email(&email)?;

        Ok(Subscriber {
            id: submission_id("SUB", now),
            email,
            subscribed_at: now,
        })
    }
}

/// Flat job application form, as posted by the careers page (multipart with an
/// optional `resume` file, URL-encoded, or a JSON object without a resume).
#[derive(Debug, Default, FromForm, Deserialize)]
#[serde(default)]
pub struct JobApplicationForm<'f> {
    pub position: Option<String>,
    pub fullname_th: Option<String>,
    pub fullname_en: Option<String>,
    pub gender: Option<String>,
    pub birthdate: Option<String>,
    pub age: Option<String>,
    pub nationality: Option<String>,
    pub id_card: Option<String>,
    pub phone: Option<String>,
    pub line_id: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub subdistrict: Option<String>,
    pub district: Option<String>,
    pub province: Option<String>,
    pub zipcode: Option<String>,

    pub edu_high_school: Option<String>,
    pub edu_high_major: Option<String>,
    pub edu_high_year: Option<String>,
    pub edu_vocational: Option<String>,
    pub edu_vocational_major: Option<String>,
    pub edu_vocational_year: Option<String>,
    pub edu_bachelor: Option<String>,
    pub edu_bachelor_major: Option<String>,
    pub edu_bachelor_year: Option<String>,
    pub edu_other: Option<String>,
    pub edu_other_major: Option<String>,
    pub edu_other_year: Option<String>,

    pub work1_company: Option<String>,
    pub work1_position: Option<String>,
    pub work1_start: Option<String>,
    pub work1_end: Option<String>,
    pub work1_reason: Option<String>,
    pub work2_company: Option<String>,
    pub work2_position: Option<String>,
    pub work2_start: Option<String>,
    pub work2_end: Option<String>,
    pub work2_reason: Option<String>,
    pub work3_company: Option<String>,
    pub work3_position: Option<String>,
    pub work3_start: Option<String>,
    pub work3_end: Option<String>,
    pub work3_reason: Option<String>,

    pub special_skills: Option<String>,
    pub expected_salary: Option<String>,
    pub start_date: Option<String>,
    pub motivation: Option<String>,

    #[serde(skip)]
    pub resume: Option<TempFile<'f>>,
}

impl JobApplicationForm<'_> {
    pub fn validate(&self, now: DateTime<Utc>) -> Result<ApplicationRecord, ValidationError> {
        require_fields(&[
            ("position", self.position.as_deref()),
            ("fullname_th", self.fullname_th.as_deref()),
            ("gender", self.gender.as_deref()),
            ("birthdate", self.birthdate.as_deref()),
            ("age", self.age.as_deref()),
            ("id_card", self.id_card.as_deref()),
            ("phone", self.phone.as_deref()),
            ("line_id", self.line_id.as_deref()),
            ("email", self.email.as_deref()),
        ])?;
        let email = required(&self.email);
        validate_email(&email)?;

        Ok(ApplicationRecord {
            id: submission_id("APP", now),
            position: required(&self.position),
            personal_info: PersonalInfo {
                fullname_th: required(&self.fullname_th),
                fullname_en: clean(&self.fullname_en),
                gender: required(&self.gender),
                birthdate: required(&self.birthdate),
                age: required(&self.age),
                nationality: clean(&self.nationality),
                id_card: required(&self.id_card),
                phone: required(&self.phone),
                line_id: required(&self.line_id),
                email,
                address: Address {
                    full: clean(&self.address),
                    subdistrict: clean(&self.subdistrict),
                    district: clean(&self.district),
                    province: clean(&self.province),
                    zipcode: clean(&self.zipcode),
                },
            },
            education: Education {
                high_school: slot(&self.edu_high_school, &self.edu_high_major, &self.edu_high_year),
                vocational: slot(
                    &self.edu_vocational,
                    &self.edu_vocational_major,
                    &self.edu_vocational_year,
                ),
                bachelor: slot(
                    &self.edu_bachelor,
                    &self.edu_bachelor_major,
                    &self.edu_bachelor_year,
                ),
                other: slot(&self.edu_other, &self.edu_other_major, &self.edu_other_year),
            },
            work_experience: self.work_experience(),
            additional_info: AdditionalInfo {
                special_skills: clean(&self.special_skills),
                expected_salary: clean(&self.expected_salary),
                start_date: clean(&self.start_date),
                motivation: clean(&self.motivation),
            },
            submitted_at: Some(now),
        })
    }

    /// Entries without a company name are dropped here, before layout.
    fn work_experience(&self) -> Vec<WorkExperience> {
        [
            (
                &self.work1_company,
                &self.work1_position,
                &self.work1_start,
                &self.work1_end,
                &self.work1_reason,
            ),
            (
                &self.work2_company,
                &self.work2_position,
                &self.work2_start,
                &self.work2_end,
                &self.work2_reason,
            ),
            (
                &self.work3_company,
                &self.work3_position,
                &self.work3_start,
                &self.work3_end,
                &self.work3_reason,
            ),
        ]
        .into_iter()
        .filter_map(|(company, position, start, end, reason)| {
            clean(company).map(|company| WorkExperience {
                company,
                position: clean(position),
                start: clean(start),
                end: clean(end),
                reason: clean(reason),
            })
        })
        .collect()
    }
}

fn required(value: &Option<String>) -> String {
    clean(value).unwrap_or_default()
}

fn slot(school: &Option<String>, major: &Option<String>, year: &Option<String>) -> EducationSlot {
    EducationSlot {
        school: clean(school),
        major: clean(major),
        year: clean(year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 3, 0, 0).unwrap()
    }

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn complete_application() -> JobApplicationForm<'static> {
        JobApplicationForm {
            position: some("Barista"),
            fullname_th: some("สมชาย ใจดี"),
            gender: some("male"),
            birthdate: some("1995-04-12"),
            age: some("31"),
            id_card: some("1103700012345"),
            phone: some("0812345678"),
            line_id: some("somchai.k"),
            email: some("somchai@example.com"),
            ..Default::default()
        }
    }

    #[test]
    fn test_wholesale_requires_fields() {
        let form = WholesaleInquiryForm {
            fullname: some("Somchai"),
            email: some("somchai@example.com"),
            ..Default::default()
        };
        let err = form.validate(now()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["phone".into(), "business_type".into()])
        );
    }

    #[test]
    fn test_wholesale_rejects_bad_email() {
        let form = WholesaleInquiryForm {
            fullname: some("Somchai"),
            email: some("somchai-at-example.com"),
            phone: some("0812345678"),
            business_type: some("Retail shop"),
            message: None,
        };
        assert!(matches!(
            form.validate(now()),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_wholesale_builds_inquiry() {
        let form = WholesaleInquiryForm {
            fullname: some(" Somchai "),
            email: some("somchai@example.com"),
            phone: some("0812345678"),
            business_type: some("Retail shop"),
            message: some(""),
        };
        let inquiry = form.validate(now()).unwrap();
        assert_eq!(inquiry.fullname, "Somchai");
        assert!(inquiry.message.is_none());
        assert!(inquiry.id.starts_with("INQ"));
        assert_eq!(inquiry.submitted_at, now());
    }

    #[test]
    fn test_wholesale_accepts_json() {
        let form: WholesaleInquiryForm = serde_json::from_str(
            r#"{"fullname":"A","email":"a@b.co","phone":"1","business_type":"shop"}"#,
        )
        .unwrap();
        assert!(form.validate(now()).is_ok());
    }

    #[test]
    fn test_newsletter() {
        let missing = NewsletterForm { email: some("  ") };
        assert_eq!(
            missing.validate(now()).unwrap_err(),
            ValidationError::MissingFields(vec!["email".into()])
        );

        let subscriber = NewsletterForm {
            email: some("fan@example.com"),
        }
        .validate(now())
        .unwrap();
        assert_eq!(subscriber.email, "fan@example.com");
        assert!(subscriber.id.starts_with("SUB"));
    }

    #[test]
    fn test_application_required_fields() {
        let form = JobApplicationForm {
            position: some("Barista"),
            ..Default::default()
        };
        match form.validate(now()).unwrap_err() {
            ValidationError::MissingFields(missing) => assert_eq!(
                missing,
                vec![
                    "fullname_th",
                    "gender",
                    "birthdate",
                    "age",
                    "id_card",
                    "phone",
                    "line_id",
                    "email"
                ]
            ),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_application_rejects_bad_email() {
        let mut form = complete_application();
        form.email = some("somchai@localhost");
        assert!(matches!(
            form.validate(now()),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_application_filters_work_without_company() {
        let mut form = complete_application();
        form.work1_company = some("Cafe Amazon");
        form.work1_position = some("Barista");
        form.work2_company = some("   ");
        form.work2_position = some("Ignored");
        form.work3_company = some("True Coffee");

        let record = form.validate(now()).unwrap();
        let companies: Vec<_> = record
            .work_experience
            .iter()
            .map(|w| w.company.as_str())
            .collect();
        assert_eq!(companies, vec!["Cafe Amazon", "True Coffee"]);
        assert_eq!(record.work_experience[0].position.as_deref(), Some("Barista"));
        assert!(record.work_experience[1].position.is_none());
    }

    #[test]
    fn test_application_maps_education_and_extras() {
        let mut form = complete_application();
        form.edu_bachelor = some("Kasetsart University");
        form.edu_bachelor_major = some("Food Science");
        form.edu_high_major = some("Science");
        form.expected_salary = some("18000");
        form.province = some("Chiang Mai");

        let record = form.validate(now()).unwrap();
        assert!(record.education.bachelor.is_present());
        assert_eq!(record.education.bachelor.major.as_deref(), Some("Food Science"));
        assert!(!record.education.high_school.is_present());
        assert_eq!(record.additional_info.expected_salary.as_deref(), Some("18000"));
        assert_eq!(record.personal_info.address.province.as_deref(), Some("Chiang Mai"));
        assert!(record.personal_info.address.full.is_none());
        assert!(record.id.starts_with("APP"));
        assert_eq!(record.submitted_at, Some(now()));
    }
}
