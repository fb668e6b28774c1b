use thiserror::Error;

pub type Result<T> = std::result::Result<T, LarderError>;

#[derive(Debug, Error)]
pub enum LarderError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("invalid selector `{0}`")]
    Selector(String),

    #[error("storage error in {context}: {reason}")]
    Storage { context: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl LarderError {
    pub fn fetch_error(url: &str, reason: &str) -> Self {
        LarderError::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn storage_error(context: &str, reason: &str) -> Self {
        LarderError::Storage {
            context: context.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<reqwest::Error> for LarderError {
    fn from(e: reqwest::Error) -> Self {
        let url = e
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        LarderError::Fetch {
            url,
            reason: e.to_string(),
        }
    }
}
