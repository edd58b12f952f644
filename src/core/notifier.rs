// src/core/notifier.rs
//! Best-effort delivery of submission emails. A failed send is logged and
//! reported as `false`; it never fails the request that triggered it.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info};

use super::mailer::{Attachment, Email, Mailer};
use crate::emails;
use crate::types::{ApplicationRecord, Subscriber, WholesaleInquiry};

#[derive(Clone)]
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
    admin_email: String,
    site_url: String,
}

/// Which of the emails for one submission went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub submitter: bool,
    pub admin: bool,
}

impl Notifier {
    pub fn new(
        mailer: Arc<dyn Mailer>,
        admin_email: impl Into<String>,
        site_url: impl Into<String>,
    ) -> Self {
        Self {
            mailer,
            admin_email: admin_email.into(),
            site_url: site_url.into(),
        }
    }

    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    pub async fn deliver(&self, email: &Email) -> bool {
        match self.mailer.send(email).await {
            Ok(()) => {
                info!(
                    "Email sent to {} ({} attachment(s)): {}",
                    email.to,
                    email.attachments.len(),
                    email.subject
                );
                true
            }
            Err(e) => {
                error!("Failed to send email to {}: {}", email.to, e);
                false
            }
        }
    }

    pub async fn wholesale_inquiry(&self, inquiry: &WholesaleInquiry) -> Delivery {
        let customer = emails::wholesale_confirmation(inquiry, &self.site_url);
        let admin = emails::wholesale_admin_alert(inquiry, &self.admin_email);
        let (submitter, admin) = tokio::join!(self.deliver(&customer), self.deliver(&admin));
        Delivery { submitter, admin }
    }

    pub async fn newsletter_welcome(&self, subscriber: &Subscriber) -> Delivery {
        let submitter = self.deliver(&emails::newsletter_welcome(subscriber)).await;
        Delivery {
            submitter,
            admin: false,
        }
    }

    pub async fn job_application(
        &self,
        record: &ApplicationRecord,
        pdf: Vec<u8>,
        resume: Option<Attachment>,
        at: DateTime<Utc>,
    ) -> Delivery {
        let applicant = emails::application_confirmation(record, at);
        let admin = emails::application_admin_alert(record, &self.admin_email, pdf, resume, at);
        let (submitter, admin) = tokio::join!(self.deliver(&applicant), self.deliver(&admin));
        Delivery { submitter, admin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mailer::RecordingMailer;
    use chrono::TimeZone;

    fn inquiry() -> WholesaleInquiry {
        WholesaleInquiry {
            id: "INQ1".to_string(),
            fullname: "Somchai".to_string(),
            email: "somchai@example.com".to_string(),
            phone: "0812345678".to_string(),
            business_type: "Retail".to_string(),
            message: Some("Hello".to_string()),
            submitted_at: Utc.with_ymd_and_hms(2026, 10, 19, 3, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_wholesale_sends_customer_and_admin() {
        let mailer = Arc::new(RecordingMailer::default());
        let notifier = Notifier::new(mailer.clone(), "hr@i-clean.co.th", "https://i-clean.vercel.app/");

        let delivery = notifier.wholesale_inquiry(&inquiry()).await;
        assert_eq!(delivery, Delivery { submitter: true, admin: true });

        let mut recipients: Vec<String> = mailer.sent().into_iter().map(|e| e.to).collect();
        recipients.sort();
        assert_eq!(recipients, vec!["hr@i-clean.co.th", "somchai@example.com"]);
    }

    #[tokio::test]
    async fn test_failed_send_is_reported_not_raised() {
        let notifier = Notifier::new(
            Arc::new(RecordingMailer::failing()),
            "hr@i-clean.co.th",
            "https://i-clean.vercel.app/",
        );
        let delivery = notifier.wholesale_inquiry(&inquiry()).await;
        assert_eq!(delivery, Delivery { submitter: false, admin: false });
    }

    #[tokio::test]
    async fn test_job_application_attaches_pdf_to_admin_only() {
        let mailer = Arc::new(RecordingMailer::default());
        let notifier = Notifier::new(mailer.clone(), "hr@i-clean.co.th", "https://i-clean.vercel.app/");
        let mut record = ApplicationRecord::default();
        record.id = "APP1".to_string();
        record.personal_info.fullname_th = "Somchai".to_string();
        record.personal_info.email = "somchai@example.com".to_string();

        notifier
            .job_application(&record, b"%PDF-1.7".to_vec(), None, Utc::now())
            .await;

        let sent = mailer.sent();
        assert_eq!(sent.len(), 2);
        let admin = sent.iter().find(|e| e.to == "hr@i-clean.co.th").unwrap();
        let applicant = sent.iter().find(|e| e.to == "somchai@example.com").unwrap();
        assert_eq!(admin.attachments.len(), 1);
        assert_eq!(admin.attachments[0].content, b"%PDF-1.7".to_vec());
        assert!(applicant.attachments.is_empty());
    }
}
