use std::sync::LazyLock;

use reqwest::{
    header::{HeaderMap, ACCEPT_LANGUAGE, SET_COOKIE},
    StatusCode,
};
use url::Url;

use crate::{error::UpstreamError, trends::TrendReq};

static HOME_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://trends.google.com/trends/").unwrap());
static TRENDING_SEARCHES_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://trends.google.com/trends/hottrends/visualize/internal/data").unwrap()
});

/// Content types google uses for the json endpoints. Anything else is usually
/// an html error or consent page.
const JSON_CONTENT_TYPES: &[&str] = &[
    "application/json",
    "application/javascript",
    "text/javascript",
];

/// Visiting the trends homepage gets us an `NID` cookie, which makes google less
/// likely to reject the data request.
pub fn request_cookie(client: &reqwest::Client, req: &TrendReq) -> reqwest::RequestBuilder {
    let mut url = HOME_URL.clone();
    url.query_pairs_mut().append_pair("geo", geo(&req.language));
    client.get(url).header(ACCEPT_LANGUAGE, &req.language)
}

/// Pull `NID=...` out of the homepage's `Set-Cookie` headers, ready to be sent
/// back as a `Cookie` header.
pub fn parse_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .map(str::trim)
        .find(|pair| pair.starts_with("NID="))
        .map(str::to_string)
}

pub fn request_trending_searches(
    client: &reqwest::Client,
    req: &TrendReq,
) -> reqwest::RequestBuilder {
    let mut url = TRENDING_SEARCHES_URL.clone();
    url.query_pairs_mut()
        .append_pair("hl", &req.language)
        .append_pair("tz", &req.timezone.to_string());
    client.get(url).header(ACCEPT_LANGUAGE, &req.language)
}

pub fn check_response(
    status: StatusCode,
    content_type: Option<&str>,
) -> Result<(), UpstreamError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(UpstreamError::RateLimited);
    }
    if !status.is_success() {
        return Err(UpstreamError::Status(status));
    }
    let content_type = content_type.unwrap_or_default();
    if !JSON_CONTENT_TYPES.iter().any(|t| content_type.contains(t)) {
        return Err(UpstreamError::UnexpectedContentType(content_type.to_string()));
    }
    Ok(())
}

/// The endpoint returns every country at once, like
/// `{"kenya": ["term", ...], "united_states": [...]}`, so pick out the one we
/// asked for.
pub fn parse_response(body: &str, locale: &str) -> Result<Vec<String>, UpstreamError> {
    let body = strip_xssi_prefix(body);
    let mut res = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(body)?;
    let terms = res
        .remove(locale)
        .ok_or_else(|| UpstreamError::MissingLocale(locale.to_string()))?;
    if terms.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(terms)?)
}

// some google endpoints start with )]}' so the response can't be used as a
// script
fn strip_xssi_prefix(body: &str) -> &str {
    let body = body.trim_start();
    match body.strip_prefix(")]}'") {
        Some(rest) => rest.trim_start_matches([',', '\n', '\r', ' ']),
        None => body,
    }
}

/// `en-US` -> `US`
fn geo(language: &str) -> &str {
    language
        .char_indices()
        .rev()
        .nth(1)
        .map_or(language, |(i, _)| &language[i..])
}
