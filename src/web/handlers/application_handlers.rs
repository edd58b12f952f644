// src/web/handlers/application_handlers.rs
use crate::core::{Attachment, Notifier};
use crate::forms::JobApplicationForm;
use crate::pdf::{self, RenderError};
use crate::types::ApplicationRecord;
use crate::utils::sanitize_filename_component;
use crate::web::types::*;

use chrono::{DateTime, Utc};
use rocket::fs::TempFile;
use rocket::serde::json::Json;
use tokio::io::AsyncReadExt;
use tracing::{error, info, warn};

const APPLICATION_MISSING: &str = "กรุณากรอกข้อมูลที่จำเป็นให้ครบถ้วน";
const APPLICATION_ACCEPTED: &str = "ส่งใบสมัครงานสำเร็จ! เราจะติดต่อกลับภายใน 7 วันทำการ";

pub async fn job_application_handler(
    form: &JobApplicationForm<'_>,
    notifier: &Notifier,
) -> ApiResult<SubmissionResponse> {
    let now = Utc::now();
    let record = form.validate(now).map_err(|e| {
        warn!("Rejected job application: {}", e);
        StandardErrorResponse::validation(&e, APPLICATION_MISSING)
    })?;

    info!(
        "Job application {} for {} ({} work entries)",
        record.id,
        record.position,
        record.work_experience.len()
    );

    let rendered = pdf::render(&record).await;
    deliver_application(record, rendered, form.resume.as_ref(), notifier, now).await
}

/// Second half of a job application once the PDF step has finished. A render
/// failure answers 500 `PDF_GENERATION_ERROR` and nothing is mailed.
pub async fn deliver_application(
    record: ApplicationRecord,
    rendered: Result<Vec<u8>, RenderError>,
    resume: Option<&TempFile<'_>>,
    notifier: &Notifier,
    now: DateTime<Utc>,
) -> ApiResult<SubmissionResponse> {
    let pdf_bytes = rendered.map_err(|e| {
        error!("PDF generation failed for {}: {}", record.id, e);
        StandardErrorResponse::internal(e.to_string(), "PDF_GENERATION_ERROR")
    })?;

    let resume = match resume {
        Some(file) => match read_resume(file).await {
            Ok(resume) => resume,
            Err(e) => {
                warn!("Could not read resume for {}: {}", record.id, e);
                None
            }
        },
        None => None,
    };

    let delivery = notifier
        .job_application(&record, pdf_bytes, resume, now)
        .await;
    if !delivery.admin {
        warn!("Admin was not notified about application {}", record.id);
    }

    Ok(Json(SubmissionResponse::new(
        APPLICATION_ACCEPTED,
        SubmissionId::Application(record.id),
    )))
}

/// Reads an uploaded resume into an attachment. Empty uploads (a file input
/// left blank) yield `None`.
pub async fn read_resume(file: &TempFile<'_>) -> std::io::Result<Option<Attachment>> {
    if file.len() == 0 {
        return Ok(None);
    }

    let mut content = Vec::with_capacity(file.len() as usize);
    let reader = file.open().await?;
    tokio::pin!(reader);
    reader.read_to_end(&mut content).await?;

    let filename = file
        .raw_name()
        .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str())
        .and_then(|raw| raw.rsplit(|c| c == '/' || c == '\\').next())
        .filter(|name| !name.trim().is_empty())
        .map(sanitize_filename_component)
        .unwrap_or_else(|| "resume".to_string());
    let content_type = file
        .content_type()
        .map(|ct| ct.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    Ok(Some(Attachment {
        filename,
        content_type,
        content,
    }))
}
