use crate::domain::model::{AjaxBody, AjaxMethod, AjaxRequest, UploadForm};
use crate::domain::ports::JsonTransport;
use crate::utils::error::AjaxError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// JSON request helper. Success statuses resolve to the decoded body; any
/// other status rejects with [`AjaxError::Status`] carrying the raw body.
/// There is no retry, timeout or request queueing.
#[derive(Debug, Clone)]
pub struct AjaxClient<T: JsonTransport> {
    transport: T,
    base_url: Option<Url>,
}

impl<T: JsonTransport> AjaxClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            base_url: None,
        }
    }

    /// Relative request paths are resolved against `base`.
    pub fn with_base_url(mut self, base: &str) -> Result<Self, AjaxError> {
        let url = Url::parse(base).map_err(|e| AjaxError::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;
        self.base_url = Some(url);
        Ok(self)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn resolve(&self, url: &str) -> Result<String, AjaxError> {
        match Url::parse(url) {
            Ok(absolute) => Ok(absolute.to_string()),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => base
                    .join(url)
                    .map(|u| u.to_string())
                    .map_err(|e| AjaxError::InvalidUrl {
                        url: url.to_string(),
                        reason: e.to_string(),
                    }),
                None => Err(AjaxError::InvalidUrl {
                    url: url.to_string(),
                    reason: "relative URL without a base URL".to_string(),
                }),
            },
            Err(e) => Err(AjaxError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: AjaxMethod,
        url: &str,
        body: AjaxBody,
        with_credentials: bool,
    ) -> Result<R, AjaxError> {
        let request = AjaxRequest {
            method,
            url: self.resolve(url)?,
            body,
            with_credentials,
        };
        let text = self.transport.send(request).await?;
        serde_json::from_str(&text).map_err(AjaxError::Decode)
    }

    fn json_body<B: Serialize + ?Sized>(data: &B) -> Result<AjaxBody, AjaxError> {
        serde_json::to_value(data)
            .map(AjaxBody::Json)
            .map_err(AjaxError::Encode)
    }

    pub async fn get<R: DeserializeOwned>(&self, url: &str) -> Result<R, AjaxError> {
        self.execute(AjaxMethod::Get, url, AjaxBody::Empty, true)
            .await
    }

    pub async fn post<B, R>(&self, url: &str, data: &B) -> Result<R, AjaxError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = Self::json_body(data)?;
        self.execute(AjaxMethod::Post, url, body, true).await
    }

    pub async fn put<B, R>(&self, url: &str, data: &B) -> Result<R, AjaxError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = Self::json_body(data)?;
        self.execute(AjaxMethod::Put, url, body, true).await
    }

    pub async fn del<R: DeserializeOwned>(&self, url: &str) -> Result<R, AjaxError> {
        self.execute(AjaxMethod::Delete, url, AjaxBody::Empty, true)
            .await
    }

    /// Multipart POST. Sent without cookies and without a JSON content type.
    pub async fn upload<R: DeserializeOwned>(
        &self,
        url: &str,
        form: UploadForm,
    ) -> Result<R, AjaxError> {
        self.execute(AjaxMethod::Post, url, AjaxBody::Multipart(form), false)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// 記錄請求並回傳預設回應
    struct RecordingTransport {
        requests: Mutex<Vec<AjaxRequest>>,
        reply: Result<String, (u16, String)>,
    }

    impl RecordingTransport {
        fn ok(body: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                reply: Ok(body.to_string()),
            }
        }

        fn status(status: u16, body: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                reply: Err((status, body.to_string())),
            }
        }
    }

    #[async_trait]
    impl JsonTransport for RecordingTransport {
        async fn send(&self, request: AjaxRequest) -> Result<String, AjaxError> {
            self.requests.lock().unwrap().push(request);
            match &self.reply {
                Ok(body) => Ok(body.clone()),
                Err((status, body)) => Err(AjaxError::Status {
                    status: *status,
                    body: body.clone(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_relative_urls_use_base() {
        let client = AjaxClient::new(RecordingTransport::ok("{}"))
            .with_base_url("https://api.example.com/v1/")
            .unwrap();

        let _: Value = client.get("users/7").await.unwrap();
        let _: Value = client.get("https://other.example.com/x").await.unwrap();

        let requests = client.transport().requests.lock().unwrap();
        assert_eq!(requests[0].url, "https://api.example.com/v1/users/7");
        assert_eq!(requests[1].url, "https://other.example.com/x");
        assert!(requests[0].with_credentials);
    }

    #[tokio::test]
    async fn test_relative_url_without_base_is_rejected() {
        let client = AjaxClient::new(RecordingTransport::ok("{}"));
        let err = client.get::<Value>("/users").await.unwrap_err();
        assert!(matches!(err, AjaxError::InvalidUrl { .. }));
        assert!(client.transport().requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let client = AjaxClient::new(RecordingTransport::ok(r#"{"id":1}"#));
        let created: Value = client
            .post("https://api.example.com/users", &json!({"name": "An"}))
            .await
            .unwrap();
        assert_eq!(created, json!({"id": 1}));

        let requests = client.transport().requests.lock().unwrap();
        assert_eq!(requests[0].method, AjaxMethod::Post);
        assert_eq!(requests[0].body, AjaxBody::Json(json!({"name": "An"})));
    }

    #[tokio::test]
    async fn test_upload_is_anonymous_multipart() {
        let client = AjaxClient::new(RecordingTransport::ok("{}"));
        let form = UploadForm::new().text("title", "avatar");
        let _: Value = client
            .upload("https://api.example.com/upload", form.clone())
            .await
            .unwrap();

        let requests = client.transport().requests.lock().unwrap();
        assert!(!requests[0].with_credentials);
        assert_eq!(requests[0].body, AjaxBody::Multipart(form));
    }

    #[tokio::test]
    async fn test_status_rejection_and_decode_failure() {
        let client = AjaxClient::new(RecordingTransport::status(422, r#"{"error":"bad"}"#));
        let err = client
            .del::<Value>("https://api.example.com/users/1")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.body(), Some(r#"{"error":"bad"}"#));

        let client = AjaxClient::new(RecordingTransport::ok("<html>"));
        let err = client
            .get::<Value>("https://api.example.com/")
            .await
            .unwrap_err();
        assert!(matches!(err, AjaxError::Decode(_)));
    }
}
