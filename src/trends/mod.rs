//! Fetching trending searches from google trends.

pub mod google;

use std::time::{Duration, Instant};

use futures::future::{BoxFuture, FutureExt};
use reqwest::header::{CONTENT_TYPE, COOKIE};
use tracing::{debug, warn};

use crate::error::UpstreamError;

/// How we identify ourselves to google trends.
#[derive(Debug, Clone)]
pub struct TrendReq {
    /// Like `en-US`.
    pub language: String,
    /// Offset from UTC in minutes.
    pub timezone: i32,
}

pub trait TrendsProvider: Send + Sync {
    /// Every trending search google currently has for the locale (like
    /// `kenya`), most popular first.
    fn trending_searches<'a>(
        &'a self,
        req: &'a TrendReq,
        locale: &'a str,
    ) -> BoxFuture<'a, Result<Vec<String>, UpstreamError>>;
}

/// The first `limit` trending searches for the locale.
pub async fn top(
    provider: &dyn TrendsProvider,
    req: &TrendReq,
    locale: &str,
    limit: usize,
) -> Result<Vec<String>, UpstreamError> {
    let start = Instant::now();
    let mut trends = provider.trending_searches(req, locale).await?;
    debug!(
        "got {} trending searches for {locale} in {}ms",
        trends.len(),
        start.elapsed().as_millis()
    );
    trends.truncate(limit);
    Ok(trends)
}

/// Like [`top`], but a failure is logged and becomes an empty list.
pub async fn top_or_empty(
    provider: &dyn TrendsProvider,
    req: &TrendReq,
    locale: &str,
    limit: usize,
) -> Vec<String> {
    match top(provider, req, locale, limit).await {
        Ok(trends) => trends,
        Err(err) => {
            warn!("couldn't get trending searches for {locale}: {err}");
            Vec::new()
        }
    }
}

pub struct GoogleTrends {
    client: reqwest::Client,
}

impl GoogleTrends {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .connect_timeout(Duration::from_secs(2))
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    async fn session_cookie(&self, req: &TrendReq) -> Result<Option<String>, UpstreamError> {
        let res = google::request_cookie(&self.client, req).send().await?;
        let cookie = google::parse_cookie(res.headers());
        if cookie.is_none() {
            debug!("google trends didn't give us an NID cookie");
        }
        Ok(cookie)
    }
}

impl TrendsProvider for GoogleTrends {
    fn trending_searches<'a>(
        &'a self,
        req: &'a TrendReq,
        locale: &'a str,
    ) -> BoxFuture<'a, Result<Vec<String>, UpstreamError>> {
        async move {
            let cookie = self.session_cookie(req).await?;

            let mut request = google::request_trending_searches(&self.client, req);
            if let Some(cookie) = cookie {
                request = request.header(COOKIE, cookie);
            }

            debug!("requesting trending searches for {locale}");
            let res = request.send().await?;
            let content_type = res
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            google::check_response(res.status(), content_type.as_deref())?;

            let body = res.text().await?;
            google::parse_response(&body, locale)
        }
        .boxed()
    }
}
