use reqwest::StatusCode;

/// Something went wrong talking to google trends.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request to google trends failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("google trends is rate limiting us (429)")]
    RateLimited,
    #[error("the request failed: google returned a response with code {0}")]
    Status(StatusCode),
    #[error("google trends returned an unexpected content type: {0:?}")]
    UnexpectedContentType(String),
    #[error("couldn't decode google trends response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("google trends has no trending searches for {0:?}")]
    MissingLocale(String),
}
