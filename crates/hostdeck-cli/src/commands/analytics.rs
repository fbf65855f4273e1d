use comfy_table::{modifiers, presets, Table};
use hostdeck_models::Analytics;

use crate::output::{Output, OutputFormat};

pub async fn run_analytics(output: &Output) -> color_eyre::Result<()> {
    let config = super::load_config()?;
    let mut service = super::build_service(&config)?;

    let report = service.refresh().await;
    super::report_ingest_errors(&report, output);

    let analytics = service.analytics_overview();
    match output.format() {
        OutputFormat::Human => print_human(analytics),
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.print_json(&serde_json::to_value(analytics)?);
        }
    }
    Ok(())
}

fn print_human(analytics: &Analytics) {
    let mut overview = Table::new();
    overview
        .load_preset(presets::UTF8_FULL)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .set_header(vec![
            super::header_cell("Total"),
            super::header_cell("Average"),
            super::header_cell("Approved"),
            super::header_cell("Pending"),
        ]);
    overview.add_row(vec![
        analytics.total_reviews.to_string(),
        format!("{:.1}", analytics.average_rating),
        analytics.approved_reviews.to_string(),
        analytics.pending_reviews.to_string(),
    ]);
    println!("{}", overview);

    let mut distribution = Table::new();
    distribution
        .load_preset(presets::UTF8_FULL)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .set_header(vec![
            super::header_cell("Rating"),
            super::header_cell("Reviews"),
        ]);
    for (bucket, count) in analytics.rating_distribution.iter().rev() {
        distribution.add_row(vec![format!("{} ★", bucket), count.to_string()]);
    }
    println!("{}", distribution);

    if !analytics.channel_breakdown.is_empty() {
        let mut channels = Table::new();
        channels
            .load_preset(presets::UTF8_FULL)
            .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
            .set_header(vec![
                super::header_cell("Channel"),
                super::header_cell("Reviews"),
            ]);
        for (channel, count) in analytics.channel_breakdown.iter() {
            channels.add_row(vec![channel.to_string(), count.to_string()]);
        }
        println!("{}", channels);
    }

    if !analytics.property_performance.is_empty() {
        let mut properties = Table::new();
        properties
            .load_preset(presets::UTF8_FULL)
            .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
            .set_header(vec![
                super::header_cell("Listing"),
                super::header_cell("Reviews"),
                super::header_cell("Average"),
                super::header_cell("Approved"),
            ]);
        for (listing, stats) in analytics.property_performance.iter() {
            properties.add_row(vec![
                listing.to_string(),
                stats.total_reviews.to_string(),
                format!("{:.2}", stats.average_rating),
                stats.approved.to_string(),
            ]);
        }
        println!("{}", properties);
    }
}
