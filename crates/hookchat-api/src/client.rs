use async_trait::async_trait;
use colored::Colorize;
use std::path::PathBuf;

use hookchat_logging::{log_request, log_request_to_file, log_response, log_response_to_file};
use hookchat_types::{FetchError, SessionId, WebhookRequest};

use crate::ReplyFetcher;

/// Debug logging options for webhook traffic
#[derive(Debug, Clone, Default)]
pub struct RequestLogging {
    /// Print request/response blocks to the console
    pub verbose: bool,
    /// Write request/response files into this directory
    pub logs_dir: Option<PathBuf>,
}

/// Webhook client posting `{ sessionId, message }` as JSON
#[derive(Debug, Clone)]
pub struct WebhookClient {
    url: String,
    client: reqwest::Client,
    logging: RequestLogging,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
            logging: RequestLogging::default(),
        }
    }

    pub fn with_logging(mut self, logging: RequestLogging) -> Self {
        self.logging = logging;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn log_request_file(&self, timestamp: i64, request: &WebhookRequest) {
        let Some(logs_dir) = &self.logging.logs_dir else {
            return;
        };
        match log_request_to_file(logs_dir, timestamp, &self.url, request) {
            Ok(path) => println!("{}", format!("📝 Request logged to: {}", path.display()).bright_blue()),
            Err(e) => log::warn!("Could not write request log: {:#}", e),
        }
    }

    fn log_response_file(
        &self,
        timestamp: i64,
        request: &WebhookRequest,
        status: &reqwest::StatusCode,
        headers: &reqwest::header::HeaderMap,
        body: &str,
    ) {
        let Some(logs_dir) = &self.logging.logs_dir else {
            return;
        };
        match log_response_to_file(logs_dir, timestamp, request, status, headers, body) {
            Ok(path) => println!("{}", format!("📄 Response logged to: {}", path.display()).bright_blue()),
            Err(e) => log::warn!("Could not write response log: {:#}", e),
        }
    }
}

#[async_trait]
impl ReplyFetcher for WebhookClient {
    async fn fetch_reply(
        &self,
        session_id: &SessionId,
        message: &str,
    ) -> Result<serde_json::Value, FetchError> {
        let request = WebhookRequest {
            session_id: session_id.clone(),
            message: message.to_string(),
        };
        let timestamp = chrono::Utc::now().timestamp_millis();

        log::info!("Sending webhook request to {} (session {})", self.url, session_id);
        log_request(&self.url, &request, self.logging.verbose);
        self.log_request_file(timestamp, &request);

        let response = self.client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        log::info!("Webhook response status: {}", status);

        // A connection dropped mid-body is still a transport failure
        let body = response.text().await.map_err(|e| FetchError::Network(e.to_string()))?;

        log_response(&status, &headers, &body, self.logging.verbose);
        self.log_response_file(timestamp, &request, &status, &headers, &body);

        if !status.is_success() {
            log::error!("Webhook error response: {}", body);
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let reply: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        log::debug!("Webhook response data: {}", reply);

        Ok(reply)
    }
}

/// Map a reqwest failure raised before any response arrived.
///
/// Connection-level failures become [`FetchError::Network`]; requests that
/// could not even be built keep their raw message.
fn classify_error(err: reqwest::Error) -> FetchError {
    log::error!("Fetch error: {}", err);
    if err.is_builder() {
        FetchError::Other(err.to_string())
    } else {
        FetchError::Network(err.to_string())
    }
}
