use http::{header, StatusCode};
use serde::de::DeserializeOwned;

#[derive(Debug)]
pub struct TestResponse {
    response: reqwest::Response,
}

#[allow(unused)]
impl TestResponse {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        TestResponse { response }
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Every endpoint of this API answers with json, so deserializing the
    /// body also checks the content type.
    pub async fn json<T: DeserializeOwned>(self) -> T {
        let content_type = self
            .response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        assert!(
            content_type.starts_with("application/json"),
            "expected a json response, got content-type {content_type:?}"
        );

        self.response
            .json()
            .await
            .expect("failed to deserialize to json")
    }
}
