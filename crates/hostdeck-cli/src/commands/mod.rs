pub mod analytics;
pub mod approve;
pub mod approved;
pub mod config;
pub mod prompts;
pub mod reviews;

use comfy_table::{modifiers, presets, Attribute, Cell, Color, Table};
use hostdeck_config::{Config, PathManager};
use hostdeck_core::{IngestCoordinator, IngestReport, ReviewService};
use hostdeck_models::{Review, ReviewListResponse};
use hostdeck_sources::{HostawayClient, ReviewSource, SeedSource};

use crate::output::{Output, OutputFormat};

pub(crate) fn load_config() -> color_eyre::Result<Config> {
    let paths = PathManager::new()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to resolve config paths: {}", e))?;
    let config_file = paths.config_file();
    if !config_file.exists() {
        return Ok(Config::default());
    }
    Config::load_from_file(&config_file).map_err(|e| {
        color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e)
    })
}

/// Wire a service from the configured sources: the Hostaway client when
/// enabled, plus the seed set (built-in or from a file).
pub(crate) fn build_service(config: &Config) -> color_eyre::Result<ReviewService> {
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("Configuration validation failed: {}", e))?;

    let mut remotes: Vec<Box<dyn ReviewSource>> = Vec::new();
    if let Some(hostaway) = &config.hostaway {
        if hostaway.enabled {
            let client = HostawayClient::new(
                hostaway.account_id.as_str(),
                hostaway.api_key.as_str(),
                Some(hostaway.base_url.clone()),
                Some(hostaway.timeout_secs),
            )
            .map_err(|e| color_eyre::eyre::eyre!("Failed to create Hostaway client: {}", e))?;
            remotes.push(Box::new(client));
        }
    }

    let seed: Box<dyn ReviewSource> = if config.seed.enabled {
        match &config.seed.file {
            Some(path) => Box::new(SeedSource::from_file(path).map_err(|e| {
                color_eyre::eyre::eyre!("Failed to load seed file {}: {}", path.display(), e)
            })?),
            None => Box::new(SeedSource::builtin()),
        }
    } else {
        Box::new(SeedSource::new(Vec::new()))
    };

    Ok(ReviewService::new(IngestCoordinator::new(remotes, seed)))
}

/// Surface per-source fetch failures without failing the command.
pub(crate) fn report_ingest_errors(report: &IngestReport, output: &Output) {
    for error in &report.errors {
        output.warn(error);
    }
}

pub(crate) fn print_review_list(
    response: &ReviewListResponse,
    output: &Output,
) -> color_eyre::Result<()> {
    match output.format() {
        OutputFormat::Human => {
            if response.reviews.is_empty() {
                output.info("No reviews matched.");
                return Ok(());
            }
            println!("{}", review_table(&response.reviews));
            output.success(format!("{} reviews", response.count));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.print_json(&serde_json::to_value(response)?);
        }
    }
    Ok(())
}

fn review_table(reviews: &[Review]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .set_header(vec![
            header_cell("Id"),
            header_cell("Listing"),
            header_cell("Guest"),
            header_cell("Rating"),
            header_cell("Channel"),
            header_cell("Submitted"),
            header_cell("Approved"),
            header_cell("Review"),
        ]);
    for review in reviews {
        table.add_row(vec![
            review.id.to_string(),
            review.listing_name.clone(),
            review.guest_name.clone(),
            format!("{:.1}", review.rating),
            review.channel.clone(),
            review
                .submitted_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            if review.approved { "yes" } else { "no" }.to_string(),
            truncate(&review.public_review, 48),
        ]);
    }
    table
}

pub(crate) fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .fg(Color::Cyan)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}
