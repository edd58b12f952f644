// src/web/handlers/submission_handlers.rs
use crate::core::Notifier;
use crate::forms::{NewsletterForm, WholesaleInquiryForm};
use crate::web::types::*;

use chrono::Utc;
use rocket::serde::json::Json;
use tracing::{info, warn};

const WHOLESALE_MISSING: &str = "กรุณากรอกข้อมูลให้ครบถ้วน";
const WHOLESALE_ACCEPTED: &str = "ส่งข้อมูลสำเร็จ! ทีมงานจะติดต่อกลับภายใน 24 ชั่วโมง";
const NEWSLETTER_MISSING: &str = "กรุณากรอกอีเมล";
const NEWSLETTER_ACCEPTED: &str = "สมัครรับข่าวสารสำเร็จ! กรุณาตรวจสอบอีเมลของคุณ";

pub async fn wholesale_inquiry_handler(
    form: &WholesaleInquiryForm,
    notifier: &Notifier,
) -> ApiResult<SubmissionResponse> {
    let inquiry = form.validate(Utc::now()).map_err(|e| {
        warn!("Rejected wholesale inquiry: {}", e);
        StandardErrorResponse::validation(&e, WHOLESALE_MISSING)
    })?;

    info!(
        "Wholesale inquiry {} from {} ({})",
        inquiry.id, inquiry.fullname, inquiry.business_type
    );

    let delivery = notifier.wholesale_inquiry(&inquiry).await;
    if !delivery.admin {
        warn!("Admin was not notified about wholesale inquiry {}", inquiry.id);
    }

    Ok(Json(SubmissionResponse::new(
        WHOLESALE_ACCEPTED,
        SubmissionId::Inquiry(inquiry.id),
    )))
}

pub async fn newsletter_subscribe_handler(
    form: &NewsletterForm,
    notifier: &Notifier,
) -> ApiResult<SubmissionResponse> {
    let subscriber = form.validate(Utc::now()).map_err(|e| {
        warn!("Rejected newsletter subscription: {}", e);
        StandardErrorResponse::validation(&e, NEWSLETTER_MISSING)
    })?;

    info!("Newsletter subscriber {} ({})", subscriber.id, subscriber.email);
    notifier.newsletter_welcome(&subscriber).await;

    Ok(Json(SubmissionResponse::new(
        NEWSLETTER_ACCEPTED,
        SubmissionId::Subscriber(subscriber.id),
    )))
}
