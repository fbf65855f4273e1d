use hostdeck_core::StoreError;
use hostdeck_models::{ApprovalResponse, ReviewId};

use crate::output::{Output, OutputFormat};

pub async fn run_approve(id: &str, approved: bool, output: &Output) -> color_eyre::Result<()> {
    let config = super::load_config()?;
    let mut service = super::build_service(&config)?;

    let report = service.refresh().await;
    super::report_ingest_errors(&report, output);

    let id = ReviewId::parse(id);
    match service.set_approval(&id, approved) {
        Ok(response) => {
            match output.format() {
                OutputFormat::Human => output.success(&response.message),
                OutputFormat::Json | OutputFormat::JsonPretty => {
                    output.print_json(&serde_json::to_value(&response)?);
                }
            }
            Ok(())
        }
        Err(StoreError::NotFound(id)) => {
            let response = ApprovalResponse::not_found(&id);
            match output.format() {
                OutputFormat::Human => output.error(&response.message),
                OutputFormat::Json | OutputFormat::JsonPretty => {
                    output.print_json(&serde_json::to_value(&response)?);
                }
            }
            std::process::exit(1);
        }
    }
}
