use crate::domain::model::{AjaxBody, AjaxMethod, AjaxRequest, UploadForm, UploadPart};
use crate::domain::ports::JsonTransport;
use crate::utils::error::AjaxError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method};

/// HTTP transport backed by `reqwest`.
///
/// Requests with credentials share a cookie store; anonymous requests
/// (uploads) go through a separate client without one.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    anonymous: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, AjaxError> {
        Ok(Self {
            client: Client::builder().cookie_store(true).build()?,
            anonymous: Client::builder().build()?,
        })
    }
}

fn to_method(method: AjaxMethod) -> Method {
    match method {
        AjaxMethod::Get => Method::GET,
        AjaxMethod::Post => Method::POST,
        AjaxMethod::Put => Method::PUT,
        AjaxMethod::Delete => Method::DELETE,
    }
}

fn to_multipart(form: UploadForm) -> Result<Form, AjaxError> {
    let mut multipart = Form::new();
    for part in form.parts {
        multipart = match part {
            UploadPart::Text { name, value } => multipart.text(name, value),
            UploadPart::File {
                name,
                filename,
                mime,
                bytes,
            } => {
                let mut file = Part::bytes(bytes).file_name(filename);
                if let Some(mime) = mime {
                    file = file.mime_str(&mime)?;
                }
                multipart.part(name, file)
            }
        };
    }
    Ok(multipart)
}

#[async_trait]
impl JsonTransport for ReqwestTransport {
    async fn send(&self, request: AjaxRequest) -> Result<String, AjaxError> {
        let client = if request.with_credentials {
            &self.client
        } else {
            &self.anonymous
        };

        tracing::debug!("{} {}", request.method, request.url);
        let mut builder = client.request(to_method(request.method), &request.url);
        builder = match request.body {
            AjaxBody::Empty => builder,
            AjaxBody::Json(value) => builder
                .header(CONTENT_TYPE, "application/json")
                .json(&value),
            AjaxBody::Multipart(form) => builder.multipart(to_multipart(form)?),
        };

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(AjaxError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
