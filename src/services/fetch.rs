use crate::engine::Fetcher as FetcherT;
use crate::error::*;
use crate::types::FetchConfig;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use std::time::Duration;

/// Blocking HTTP fetcher. One GET per page, no retry, no backoff; a failure
/// surfaces to the caller.
pub struct ReqwestFetcher;

impl ReqwestFetcher {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    fn build_client(&self, cfg: &FetchConfig) -> Result<Client> {
        Ok(Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()?)
    }
}

impl FetcherT for ReqwestFetcher {
    fn name(&self) -> &'static str {
        "reqwest-blocking"
    }

    fn fetch(&self, url: &str, cfg: &FetchConfig) -> Result<String> {
        let client = self.build_client(cfg)?;
        let resp = client
            .get(url)
            .header(USER_AGENT, cfg.user_agent.as_str())
            .send()?;
        let status = resp.status();
        let text = resp.text()?;
        if !status.is_success() {
            return Err(LarderError::fetch_error(
                url,
                &format!("HTTP status {status}"),
            ));
        }
        Ok(text)
    }
}
