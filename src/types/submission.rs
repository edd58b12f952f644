// src/types/submission.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct WholesaleInquiry {
    pub id: String,
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    pub message: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Subscriber {
    pub id: String,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}
