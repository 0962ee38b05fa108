use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

/// Failure modes of a single request to the remote service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed with status code {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("unexpected content type: {0}")]
    ContentType(String),
    #[error("an error occurred while sending the request: {0}")]
    Network(#[from] reqwest::Error),
}

/// HTTP client for the remote TTS web service.
///
/// Read-only after construction; one GET per `fetch` call, no retries and
/// no timeout beyond reqwest defaults.
#[derive(Debug, Clone)]
pub struct WebServiceClient {
    client: Client,
    base_url: String,
}

impl WebServiceClient {
    /// Create a client for `base_url`. With `verify_ssl` off the client
    /// accepts self-signed certificates, which the remote service commonly
    /// runs with on a local network.
    pub fn new(base_url: impl Into<String>, verify_ssl: bool) -> anyhow::Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!verify_ssl)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}{endpoint}` with `params` as the query string and
    /// return the media type tag and raw WAV bytes.
    ///
    /// Only a 200 response whose `Content-Type` contains `audio/wav` or
    /// `audio/x-wav` is accepted; everything else is a `TransportError`.
    pub async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<(String, Vec<u8>), TransportError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "sending request to tts service");

        let response = self.client.get(&url).query(params).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status { status, body });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        if content_type.contains("audio/wav") || content_type.contains("audio/x-wav") {
            let bytes = response.bytes().await?;
            Ok(("wav".to_string(), bytes.to_vec()))
        } else {
            Err(TransportError::ContentType(content_type))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_wav_bytes_for_audio_wav_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tts"))
            .and(query_param("text", "hello"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "audio/wav")
                    .set_body_bytes(b"RIFF....".to_vec()),
            )
            .mount(&server)
            .await;

        let client = WebServiceClient::new(server.uri(), true).unwrap();
        let (media_type, bytes) = client
            .fetch("/api/tts", &[("text", "hello".to_string())])
            .await
            .unwrap();

        assert_eq!(media_type, "wav");
        assert_eq!(bytes, b"RIFF....".to_vec());
    }

    #[tokio::test]
    async fn accepts_audio_x_wav_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tts"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "audio/x-wav")
                    .set_body_bytes(b"RIFF....".to_vec()),
            )
            .mount(&server)
            .await;

        let client = WebServiceClient::new(server.uri(), true).unwrap();
        let (media_type, _) = client.fetch("/api/tts", &[]).await.unwrap();
        assert_eq!(media_type, "wav");
    }

    #[tokio::test]
    async fn rejects_unexpected_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/plain")
                    .set_body_string("not audio"),
            )
            .mount(&server)
            .await;

        let client = WebServiceClient::new(server.uri(), true).unwrap();
        let err = client.fetch("/api/tts", &[]).await.unwrap_err();
        match err {
            TransportError::ContentType(content_type) => {
                assert!(content_type.contains("text/plain"));
            }
            other => panic!("expected content-type error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn surfaces_status_code_and_body_on_non_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("synthesis backend down"))
            .mount(&server)
            .await;

        let client = WebServiceClient::new(server.uri(), true).unwrap();
        let err = client.fetch("/api/tts", &[]).await.unwrap_err();
        assert!(matches!(err, TransportError::Status { .. }));

        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("synthesis backend down"));
    }

    #[tokio::test]
    async fn wraps_connection_failures_as_network_errors() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let client = WebServiceClient::new(uri, true).unwrap();
        let err = client.fetch("/api/tts", &[]).await.unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }
}
