//! Catalog filtering.
//!
//! Every criterion is optional; present criteria compose as a logical AND,
//! so the result is independent of evaluation order. Filtering is pure and
//! borrows from the catalog rather than cloning it.

use super::{DataSource, SourceCategory, SourceType};
use chrono::{DateTime, Duration, Utc};

#[derive(Clone, Debug, Default)]
pub struct DataSourceFilter {
    pub types: Option<Vec<SourceType>>,
    pub categories: Option<Vec<SourceCategory>>,
    pub regions: Option<Vec<String>>,
    pub countries: Option<Vec<String>>,
    pub min_reliability: Option<u8>,
    /// Keep sources updated within the last N days, measured against the
    /// caller-supplied `now`.
    pub max_age_days: Option<i64>,
    /// Case-insensitive substring match over name, description, and tags.
    pub search_term: Option<String>,
    pub tags: Option<Vec<String>>,
}

pub fn filter_data_sources<'a>(
    sources: &'a [DataSource],
    filter: &DataSourceFilter,
    now: DateTime<Utc>,
) -> Vec<&'a DataSource> {
    sources
        .iter()
        .filter(|source| passes(source, filter, now))
        .collect()
}

fn passes(source: &DataSource, filter: &DataSourceFilter, now: DateTime<Utc>) -> bool {
    matches_types(source, filter.types.as_deref())
        && matches_categories(source, filter.categories.as_deref())
        && matches_regions(source, filter.regions.as_deref())
        && matches_countries(source, filter.countries.as_deref())
        && matches_reliability(source, filter.min_reliability)
        && matches_age(source, filter.max_age_days, now)
        && matches_search(source, filter.search_term.as_deref())
        && matches_tags(source, filter.tags.as_deref())
}

fn matches_types(source: &DataSource, types: Option<&[SourceType]>) -> bool {
    types.is_none_or(|wanted| wanted.contains(&source.source_type))
}

fn matches_categories(source: &DataSource, categories: Option<&[SourceCategory]>) -> bool {
    categories.is_none_or(|wanted| wanted.contains(&source.category))
}

fn matches_regions(source: &DataSource, regions: Option<&[String]>) -> bool {
    regions.is_none_or(|wanted| {
        source
            .coverage
            .regions
            .iter()
            .any(|region| wanted.contains(region))
    })
}

fn matches_countries(source: &DataSource, countries: Option<&[String]>) -> bool {
    countries.is_none_or(|wanted| {
        source
            .coverage
            .countries
            .iter()
            .any(|country| wanted.contains(country))
    })
}

fn matches_reliability(source: &DataSource, min_reliability: Option<u8>) -> bool {
    min_reliability.is_none_or(|min| source.reliability >= min)
}

fn matches_age(source: &DataSource, max_age_days: Option<i64>, now: DateTime<Utc>) -> bool {
    max_age_days.is_none_or(|days| source.last_updated >= now - Duration::days(days))
}

fn matches_search(source: &DataSource, term: Option<&str>) -> bool {
    let Some(term) = term else {
        return true;
    };
    let needle = term.to_lowercase();
    source.name.to_lowercase().contains(&needle)
        || source.description.to_lowercase().contains(&needle)
        || source
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

fn matches_tags(source: &DataSource, tags: Option<&[String]>) -> bool {
    tags.is_none_or(|wanted| source.tags.iter().any(|tag| wanted.contains(tag)))
}
