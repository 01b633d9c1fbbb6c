use crate::memegen::consts::{GENERATOR_ID, LANGUAGE_CODE};
use crate::memegen::decode;
use crate::memegen::errors::UpstreamError;
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What to caption and with which template.
#[derive(Debug)]
pub struct InstanceRequest<'a> {
    pub image_id: &'a str,
    pub text0: &'a str,
    pub text1: &'a str,
}

/// Shared handle to the meme generator API. Cloning is cheap: the inner `reqwest::Client`
/// pools connections behind an `Arc`.
#[derive(Clone, Debug)]
pub struct MemeGeneratorClient {
    http_client: Client,
    endpoint: Url,
    credentials: Credentials,
}

impl MemeGeneratorClient {
    pub fn new(
        endpoint: Url,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            endpoint,
            credentials,
        })
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    /// Asks the API to render a captioned image and returns its URL.
    ///
    /// The call is abandoned as soon as `cancellation` fires. Dropping the returned future
    /// aborts it as well.
    pub async fn create_instance(
        &self,
        request: &InstanceRequest<'_>,
        cancellation: &CancellationToken,
    ) -> Result<String, UpstreamError> {
        tokio::select! {
            _ = cancellation.cancelled() => Err(UpstreamError::Cancelled),
            result = self.fetch_image_url(request) => result,
        }
    }

    async fn fetch_image_url(
        &self,
        request: &InstanceRequest<'_>,
    ) -> Result<String, UpstreamError> {
        let response = self
            .http_client
            .get(self.endpoint.clone())
            .query(&self.query_params(request))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                upstream_status = %status,
                "Meme generator API responded with a non-success status."
            );
        }
        let body = response.bytes().await?;
        decode::extract_image_url(&body)
    }

    fn query_params<'a>(
        &'a self,
        request: &InstanceRequest<'a>,
    ) -> [(&'static str, &'a str); 7] {
        [
            ("username", self.credentials.username.as_str()),
            ("password", self.credentials.password.as_str()),
            ("languageCode", LANGUAGE_CODE),
            ("text0", request.text0),
            ("text1", request.text1),
            ("imageID", request.image_id),
            ("generatorID", GENERATOR_ID),
        ]
    }
}
