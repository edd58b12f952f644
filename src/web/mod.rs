// src/web/mod.rs
//! HTTP surface: CORS, routes, JSON catchers and server startup.

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::core::{ConfigManager, Notifier, SmtpMailer};
use crate::forms::{JobApplicationForm, NewsletterForm, WholesaleInquiryForm};
use anyhow::{Context, Result};
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::figment::Figment;
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use std::sync::Arc;
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/")]
pub async fn index() -> Json<IndexResponse> {
    handlers::index_handler().await
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    handlers::health_handler().await
}

#[post("/wholesale-inquiry", format = "json", data = "<request>")]
pub async fn wholesale_inquiry_json(
    request: Json<WholesaleInquiryForm>,
    notifier: &State<Notifier>,
) -> ApiResult<SubmissionResponse> {
    handlers::wholesale_inquiry_handler(&request, notifier).await
}

#[post("/wholesale-inquiry", data = "<form>", rank = 2)]
pub async fn wholesale_inquiry(
    form: Form<WholesaleInquiryForm>,
    notifier: &State<Notifier>,
) -> ApiResult<SubmissionResponse> {
    handlers::wholesale_inquiry_handler(&form, notifier).await
}

#[post("/newsletter-subscribe", format = "json", data = "<request>")]
pub async fn newsletter_subscribe_json(
    request: Json<NewsletterForm>,
    notifier: &State<Notifier>,
) -> ApiResult<SubmissionResponse> {
    handlers::newsletter_subscribe_handler(&request, notifier).await
}

#[post("/newsletter-subscribe", data = "<form>", rank = 2)]
pub async fn newsletter_subscribe(
    form: Form<NewsletterForm>,
    notifier: &State<Notifier>,
) -> ApiResult<SubmissionResponse> {
    handlers::newsletter_subscribe_handler(&form, notifier).await
}

#[post("/job-application", format = "json", data = "<request>")]
pub async fn job_application_json(
    request: Json<JobApplicationForm<'static>>,
    notifier: &State<Notifier>,
) -> ApiResult<SubmissionResponse> {
    handlers::job_application_handler(&request, notifier).await
}

#[post("/job-application", data = "<form>", rank = 2)]
pub async fn job_application(
    form: Form<JobApplicationForm<'_>>,
    notifier: &State<Notifier>,
) -> ApiResult<SubmissionResponse> {
    handlers::job_application_handler(&form, notifier).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        GENERIC_FAILURE_MESSAGE,
        "Invalid request format".to_string(),
        "BAD_REQUEST",
        vec![
            "Check your request body format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found(request: &Request) -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Endpoint not found",
        format!("No route for {} {}", request.method(), request.uri().path()),
        "NOT_FOUND",
        handlers::ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        GENERIC_FAILURE_MESSAGE,
        "Request body could not be processed".to_string(),
        "UNPROCESSABLE_ENTITY",
        vec!["Send string values for every field".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        GENERIC_FAILURE_MESSAGE,
        "Internal server error".to_string(),
        "INTERNAL_ERROR",
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

/// Rocket settings derived from our configuration: bind address, port and
/// upload limits large enough for a resume.
pub fn server_figment(config: &ConfigManager) -> Figment {
    let limits = Limits::default()
        .limit("form", 64.kibibytes())
        .limit("data-form", 12.mebibytes())
        .limit("file", 10.mebibytes());

    rocket::Config::figment()
        .merge(("address", config.server.address))
        .merge(("port", config.server.port))
        .merge(("limits", limits))
}

pub fn build_rocket(figment: Figment, notifier: Notifier) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(Cors)
        .manage(notifier)
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount("/", routes![index, options])
        .mount(
            "/api",
            routes![
                health,
                wholesale_inquiry_json,
                wholesale_inquiry,
                newsletter_subscribe_json,
                newsletter_subscribe,
                job_application_json,
                job_application,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let mailer =
        SmtpMailer::from_config(&config.mail).context("Failed to configure SMTP transport")?;
    let notifier = Notifier::new(
        Arc::new(mailer),
        config.notifications.admin_email.clone(),
        config.notifications.site_url.clone(),
    );

    info!("Starting i-Clean forms API server");
    info!("Server: http://{}:{}", config.server.address, config.server.port);
    info!("Admin notifications: {}", notifier.admin_email());

    let _rocket = build_rocket(server_figment(&config), notifier)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket server failed: {}", e))?;

    Ok(())
}
