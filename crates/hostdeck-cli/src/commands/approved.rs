use crate::output::Output;

pub async fn run_approved(listing: &str, output: &Output) -> color_eyre::Result<()> {
    let config = super::load_config()?;
    let mut service = super::build_service(&config)?;

    let report = service.refresh().await;
    super::report_ingest_errors(&report, output);

    let response = service.approved_for_listing(listing);
    super::print_review_list(&response, output)
}
