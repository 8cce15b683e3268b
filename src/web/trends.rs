use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;
use url::form_urlencoded;

use crate::{
    regions::{self, OVERVIEW_COUNTRIES},
    trends::{self, TrendReq},
    web::{
        response::{Failure, Overview, RegionTrends},
        AppState,
    },
};

/// The first non-empty `region` in the query string. Blank values are skipped,
/// so `?region=` is the same as not passing a region at all.
fn region_param(query: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, value)| key == "region" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

/// Trending searches for the one region in `?region=`.
pub async fn region(State(state): State<Arc<AppState>>, RawQuery(query): RawQuery) -> Response {
    let config = &state.config.trends;
    let region = query
        .as_deref()
        .and_then(region_param)
        .unwrap_or_else(|| config.default_region.clone());
    let locale = regions::resolve(&region);

    let req = TrendReq {
        language: config.language.clone(),
        timezone: config.region.timezone,
    };
    match trends::top(state.provider.as_ref(), &req, locale, config.region.limit).await {
        Ok(trends) => Json(RegionTrends::new(region, trends)).into_response(),
        Err(err) => {
            error!("failed to get trends for {region} ({locale}): {err}");
            Failure { error: err, region }.into_response()
        }
    }
}

/// Trending searches for every overview country, one after another. A country
/// that fails just gets an empty list.
pub async fn overview(State(state): State<Arc<AppState>>) -> Json<Overview> {
    let config = &state.config.trends;
    let req = TrendReq {
        language: config.language.clone(),
        timezone: config.overview.timezone,
    };

    let mut countries = serde_json::Map::new();
    for (i, (key, locale)) in OVERVIEW_COUNTRIES.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(config.overview.pause()).await;
        }
        let trends =
            trends::top_or_empty(state.provider.as_ref(), &req, locale, config.overview.limit)
                .await;
        countries.insert(key.to_string(), trends.into());
    }

    Json(Overview::new(countries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_param_first_value_wins() {
        assert_eq!(region_param("region=UK").as_deref(), Some("UK"));
        assert_eq!(region_param("region=KE&region=US").as_deref(), Some("KE"));
        assert_eq!(region_param("foo=1&region=CA").as_deref(), Some("CA"));
    }

    #[test]
    fn region_param_skips_blanks() {
        assert_eq!(region_param(""), None);
        assert_eq!(region_param("region="), None);
        assert_eq!(region_param("region=&region=US").as_deref(), Some("US"));
        assert_eq!(region_param("regions=US"), None);
    }

    #[test]
    fn region_param_is_decoded() {
        assert_eq!(region_param("region=U%53").as_deref(), Some("US"));
        assert_eq!(region_param("region=a+b").as_deref(), Some("a b"));
        // invalid utf-8 is decoded lossily instead of failing
        assert_eq!(region_param("region=%FF").as_deref(), Some("\u{FFFD}"));
    }
}
