//! Prediction Service Client
//!
//! A JSON-over-HTTP client for the fraud prediction service: classification
//! requests, transaction history and aggregate statistics.

use crate::api::FraudApi;
use crate::api::error::ApiError;
use crate::api::types::{PredictionForm, PredictionResponse, StatsSnapshot, Transaction};
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use reqwest::multipart::Form;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("fraudwatch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FraudApiClient {
    client: Client,
    environment: Environment,
}

impl FraudApiClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        Ok(Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .user_agent(USER_AGENT)
                .build()?,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    /// Decodes a JSON body. The body is parsed whatever the status code; a
    /// non-JSON body on an error status is reported as that HTTP error.
    async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let bytes = response.bytes().await?;
        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(ApiError::Http {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&bytes).into_owned(),
            }),
            Err(e) => Err(ApiError::Decode(e)),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;
        Self::decode_json(response).await
    }

    fn multipart_form(form: &PredictionForm) -> Form {
        form.fields()
            .into_iter()
            .fold(Form::new(), |multipart, (name, value)| {
                multipart.text(name, value)
            })
    }
}

#[async_trait::async_trait]
impl FraudApi for FraudApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn predict(&self, form: PredictionForm) -> Result<PredictionResponse, ApiError> {
        let url = self.build_url("predict");
        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .multipart(Self::multipart_form(&form))
            .send()
            .await?;
        Self::decode_json(response).await
    }

    async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json("api/transactions").await
    }

    async fn stats(&self) -> Result<StatsSnapshot, ApiError> {
        self.get_json("api/stats").await
    }

    async fn clear_history(&self) -> Result<(), ApiError> {
        let url = self.build_url("clear_history");
        let response = self.client.post(&url).send().await?;
        Self::handle_response_status(response).await?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::PredictionOutcome;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response on an ephemeral port and returns a
    /// client pointed at it.
    async fn serve_once(status_line: &'static str, body: &'static str) -> FraudApiClient {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        FraudApiClient::new(Environment::Custom {
            api_url: format!("http://{}", addr),
        })
        .unwrap()
    }

    /// Reads the request head and, when announced, the whole body.
    async fn read_request(socket: &mut tokio::net::TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let head_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok());
        let chunked = head.contains("transfer-encoding: chunked");
        loop {
            let body = &buf[head_end..];
            let done = match content_length {
                Some(len) => body.len() >= len,
                None if chunked => body.ends_with(b"0\r\n\r\n"),
                None => true,
            };
            if done {
                return;
            }
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
    }

    #[tokio::test]
    async fn html_on_success_status_is_a_decode_error() {
        let client = serve_once("200 OK", "<html><body>maintenance</body></html>").await;
        let result = client.stats().await;
        assert!(matches!(result, Err(ApiError::Decode(_))), "{:?}", result);
    }

    #[tokio::test]
    async fn non_json_error_status_keeps_status_and_body() {
        let client = serve_once("500 Internal Server Error", "upstream exploded").await;
        match client.transactions().await {
            Err(ApiError::Http { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[tokio::test]
    async fn json_body_on_error_status_is_still_decoded() {
        let client = serve_once(
            "500 Internal Server Error",
            r#"{"success":false,"error":"x"}"#,
        )
        .await;
        let response = client.predict(PredictionForm::new("12.00")).await.unwrap();
        assert_eq!(
            response.outcome(),
            Some(PredictionOutcome::Rejected {
                error: "x".to_string()
            })
        );
    }

    #[test]
    fn builds_urls_without_double_slashes() {
        let client = FraudApiClient::new(Environment::Custom {
            api_url: "http://fraud.internal:8080/".to_string(),
        })
        .unwrap();
        assert_eq!(
            client.build_url("/api/stats"),
            "http://fraud.internal:8080/api/stats"
        );
    }

    #[tokio::test]
    /// Transport failures surface as reqwest errors rather than panics.
    async fn unreachable_service_reports_error() {
        let client = FraudApiClient::new(Environment::Custom {
            api_url: "http://127.0.0.1:9".to_string(),
        })
        .unwrap();
        let result = client.stats().await;
        assert!(matches!(result, Err(ApiError::Reqwest(_))));
    }
}
