use crate::error::{Result, TdkError};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use std::time::Duration;

/// Issues a single blocking GET and returns the response body.
///
/// Every dictionary request goes through this seam, so tests can swap in a
/// canned transport and count calls.
pub trait Transport {
    fn get(&self, url: &str, user_agent: &str) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, user_agent: &str) -> Result<Vec<u8>> {
        (**self).get(url, user_agent)
    }
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TdkError::network("<client>", e))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, user_agent: &str) -> Result<Vec<u8>> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| TdkError::network(url, e))?;

        let body = response.bytes().map_err(|e| TdkError::network(url, e))?;
        log::debug!("{} returned {} bytes", url, body.len());

        Ok(body.to_vec())
    }
}

/// Percent-encodes `word` and substitutes it into `<base>/<path>?<param>=<word>`.
pub fn endpoint(base_url: &str, path: &str, param: &str, word: &str) -> String {
    format!(
        "{}/{}?{}={}",
        base_url.trim_end_matches('/'),
        path,
        param,
        urlencoding::encode(word)
    )
}
