// src/preview_cli.rs
use crate::pdf;
use crate::types::ApplicationRecord;
use crate::utils::{submission_id, today_in_thailand};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "render-application")]
#[command(about = "Render a job application record (JSON) into the i-Clean PDF form")]
pub struct RenderCli {
    /// Application record as JSON
    pub record: PathBuf,

    /// Output file, defaults to the attachment file name in the current directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Date printed on the form (YYYY-MM-DD), defaults to today in Thailand
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

pub async fn handle_render_command(cli: RenderCli) -> Result<PathBuf> {
    let raw = tokio::fs::read_to_string(&cli.record)
        .await
        .with_context(|| format!("Failed to read {}", cli.record.display()))?;
    let mut record: ApplicationRecord = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid application record in {}", cli.record.display()))?;

    if record.id.trim().is_empty() {
        record.id = submission_id("APP", Utc::now());
    }

    let issued_on = cli.date.unwrap_or_else(today_in_thailand);
    let bytes = pdf::render_on(&record, issued_on)
        .await
        .with_context(|| format!("Failed to render application {}", record.id))?;

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(record.pdf_filename()));
    tokio::fs::write(&output, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        "Rendered application {} ({} bytes) to {}",
        record.id,
        bytes.len(),
        output.display()
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}-{}", uuid::Uuid::new_v4().simple(), name))
    }

    #[test]
    fn test_parses_arguments() {
        let cli = RenderCli::try_parse_from([
            "render-application",
            "record.json",
            "-o",
            "out.pdf",
            "--date",
            "2026-10-19",
        ])
        .unwrap();
        assert_eq!(cli.record, PathBuf::from("record.json"));
        assert_eq!(cli.output, Some(PathBuf::from("out.pdf")));
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2026, 10, 19));

        assert!(RenderCli::try_parse_from(["render-application", "r.json", "--date", "19/10/2026"]).is_err());
    }

    #[tokio::test]
    async fn test_renders_record_file() {
        let input = scratch("record.json");
        let output = scratch("out.pdf");
        tokio::fs::write(
            &input,
            r#"{
                "id": "",
                "position": "Barista",
                "personal_info": {
                    "fullname_th": "Somchai",
                    "gender": "male",
                    "birthdate": "1995-04-12",
                    "age": "31",
                    "id_card": "1103700012345",
                    "phone": "0812345678",
                    "line_id": "somchai.k",
                    "email": "somchai@example.com"
                }
            }"#,
        )
        .await
        .unwrap();

        let written = handle_render_command(RenderCli {
            record: input.clone(),
            output: Some(output.clone()),
            date: NaiveDate::from_ymd_opt(2026, 10, 19),
        })
        .await
        .unwrap();

        assert_eq!(written, output);
        let bytes = tokio::fs::read(&output).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let _ = tokio::fs::remove_file(&input).await;
        let _ = tokio::fs::remove_file(&output).await;
    }

    #[tokio::test]
    async fn test_rejects_malformed_record() {
        let input = scratch("broken.json");
        tokio::fs::write(&input, "{ not json").await.unwrap();

        let result = handle_render_command(RenderCli {
            record: input.clone(),
            output: None,
            date: None,
        })
        .await;
        assert!(result.is_err());

        let _ = tokio::fs::remove_file(&input).await;
    }
}
