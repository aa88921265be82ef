/// Base HTTP client shared by API clients
use reqwest::Client;
use std::time::Duration;

/// HTTP client wrapper with an optional request timeout
pub struct HttpClient {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpClient {
    /// `timeout_secs == 0` keeps reqwest's default (no timeout)
    pub fn new(timeout_secs: u64) -> Result<Self, String> {
        let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client, timeout })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_means_client_default() {
        assert_eq!(HttpClient::new(0).unwrap().timeout(), None);
        assert_eq!(
            HttpClient::new(15).unwrap().timeout(),
            Some(Duration::from_secs(15))
        );
    }
}
