use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The backend answered 2xx but flagged the envelope as failed.
    #[error("{0}")]
    Backend(String),
    /// Network failure, timeout or non-2xx status.
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Wrapper every backend response arrives in. The backend is not consistent
/// about the error flag type: both `false` and the string `"false"` mean
/// success, anything else truthy is a failure. The flag is normalized to a
/// plain bool here and the union type never leaves this module.
#[derive(Deserialize, Debug, Clone)]
pub struct Envelope {
    #[serde(default, deserialize_with = "error_flag")]
    pub error: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    payload: serde_json::Map<String, serde_json::Value>,
}

fn error_flag<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Text(String),
    }

    Ok(match Raw::deserialize(de)? {
        Raw::Flag(flag) => flag,
        Raw::Text(text) => text != "false",
    })
}

impl Envelope {
    fn message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| String::from("request failed"))
    }

    /// Domain fields are merged directly into the envelope, so the payload
    /// is whatever remains after the flag and message are peeled off.
    pub fn into_payload<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if self.error {
            return Err(ApiError::Backend(self.message()));
        }
        serde_json::from_value(serde_json::Value::Object(self.payload))
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// For mutations whose response carries no payload worth keeping.
    pub fn into_unit(self) -> Result<(), ApiError> {
        if self.error {
            Err(ApiError::Backend(self.message()))
        } else {
            Ok(())
        }
    }
}

/// Thin wrapper around the HTTP client. Services talk to this and nothing
/// else; transport failures are converted to `ApiError::Transport` before
/// they can escape.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        ApiClient {
            base: base.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn get(&self, path: &str) -> Result<Envelope, ApiError> {
        let resp = self.http.get(self.url(path)).send().await?;
        decode(resp).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope, ApiError> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        decode(resp).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope, ApiError> {
        let resp = self.http.put(self.url(path)).json(body).send().await?;
        decode(resp).await
    }

    /// `PUT` without a body, used by the soft-delete endpoints.
    pub async fn put_empty(&self, path: &str) -> Result<Envelope, ApiError> {
        let resp = self.http.put(self.url(path)).send().await?;
        decode(resp).await
    }

    pub async fn delete(&self, path: &str) -> Result<Envelope, ApiError> {
        let resp = self.http.delete(self.url(path)).send().await?;
        decode(resp).await
    }

    pub async fn delete_with_body<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope, ApiError> {
        let resp = self.http.delete(self.url(path)).json(body).send().await?;
        decode(resp).await
    }

    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Envelope, ApiError> {
        let resp = self
            .http
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn put_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Envelope, ApiError> {
        let resp = self.http.put(self.url(path)).multipart(form).send().await?;
        decode(resp).await
    }
}

async fn decode(resp: reqwest::Response) -> Result<Envelope, ApiError> {
    let resp = resp.error_for_status()?;
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn envelope(value: serde_json::Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn string_false_is_success() {
        assert!(!envelope(json!({"error": false})).error);
        assert!(!envelope(json!({"error": "false"})).error);
    }

    #[test]
    fn truthy_flags_are_failures() {
        assert!(envelope(json!({"error": true})).error);
        assert!(envelope(json!({"error": "true"})).error);
        assert!(envelope(json!({"error": "oops"})).error);
    }

    #[test]
    fn missing_flag_is_success() {
        assert!(!envelope(json!({"message": "ok"})).error);
    }

    #[test]
    fn payload_is_the_flattened_remainder() {
        #[derive(serde::Deserialize)]
        struct Info {
            name: String,
        }

        let info: Info = envelope(json!({
            "error": "false",
            "message": "ok",
            "name": "Horizon Public School",
        }))
        .into_payload()
        .unwrap();

        assert!(info.name == "Horizon Public School");
    }

    #[test]
    fn failed_envelope_surfaces_its_message() {
        let err = envelope(json!({"error": "true", "message": "duplicate login id"}))
            .into_unit()
            .unwrap_err();
        assert!(matches!(err, ApiError::Backend(msg) if msg == "duplicate login id"));
    }

    #[test]
    fn failed_envelope_without_message_gets_a_fallback() {
        let err = envelope(json!({"error": true})).into_unit().unwrap_err();
        assert!(matches!(err, ApiError::Backend(msg) if msg == "request failed"));
    }
}
