//! The `sources` command family: catalog listing, quality scoring, and
//! recommendations.

use crate::catalog::{
    all_data_sources, calculate_data_quality_score, filter_data_sources,
    recommended_data_sources, DataSource, DataSourceFilter,
};
use crate::cli::{SourceCategoryArg, SourceTypeArg, SourcesCommand};
use crate::config::load_config;
use crate::formatting::{format_relative_date, format_score};
use crate::store::Preferences;
use anyhow::bail;
use chrono::Utc;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

pub fn handle_sources(command: SourcesCommand) -> anyhow::Result<()> {
    match command {
        SourcesCommand::List {
            types,
            categories,
            regions,
            countries,
            min_reliability,
            max_age_days,
            search,
            tags,
            json,
        } => {
            let filter = DataSourceFilter {
                types: types.map(|ts| ts.into_iter().map(SourceTypeArg::into).collect()),
                categories: categories
                    .map(|cs| cs.into_iter().map(SourceCategoryArg::into).collect()),
                regions,
                countries,
                min_reliability,
                max_age_days,
                search_term: search,
                tags,
            };
            let matches = filter_data_sources(all_data_sources(), &filter, Utc::now());
            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                print_source_table(&matches);
            }
            Ok(())
        }

        SourcesCommand::Quality {
            ids,
            save_selection,
        } => {
            let mut store = super::open_preference_store();
            let mut preferences = Preferences::load(store.as_ref());

            let selection = if ids.is_empty() {
                if preferences.preferred_sources.is_empty() {
                    bail!("no source ids given and no preferred sources saved");
                }
                preferences.preferred_sources.clone()
            } else {
                ids
            };

            let config = load_config();
            let score = calculate_data_quality_score(
                all_data_sources(),
                &selection,
                &config.quality,
                Utc::now(),
            );
            println!("Selection: {}", selection.join(", "));
            println!("  Reliability: {}", format_score(score.reliability_score.value()));
            println!("  Freshness:   {}", format_score(score.freshness_score.value()));
            println!("  Coverage:    {}", format_score(score.coverage_score.value()));
            println!("  Overall:     {}", format_score(score.overall_score.value()));

            if save_selection {
                preferences.preferred_sources = selection;
                preferences.save(store.as_mut())?;
                log::info!("Saved preferred sources");
            }
            Ok(())
        }

        SourcesCommand::Recommend { region, focus } => {
            let store = super::open_preference_store();
            let preferences = Preferences::load(store.as_ref());
            let Some(region) = region.or(preferences.default_region) else {
                bail!("no region given and no default region saved");
            };
            let matches = recommended_data_sources(all_data_sources(), &region, focus.into());
            if matches.is_empty() {
                println!("No sources cover {region}");
            } else {
                print_source_table(&matches);
            }
            Ok(())
        }
    }
}

fn print_source_table(sources: &[&DataSource]) {
    let now = Utc::now();
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Id",
            "Name",
            "Type",
            "Reliability",
            "Updated",
            "Regions",
        ]);
    for source in sources {
        table.add_row(vec![
            source.id.clone(),
            source.name.clone(),
            source.source_type.to_string(),
            source.reliability.to_string(),
            format_relative_date(source.last_updated, now),
            source.coverage.regions.join(", "),
        ]);
    }
    println!("{table}");
}
