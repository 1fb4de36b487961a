//! HTTP transport for the contacts endpoint.

use async_trait::async_trait;
use leptos::task::spawn_local;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, ContactsBackend};
use crate::form::FormSnapshot;
use crate::models::{ContactId, ContactRecord};

const JSON_UTF8: &str = "application/json; charset=utf-8";

#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    /// Absolute collection URL, e.g. `http://localhost:3000/api/contacts`
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.base_url
    }

    pub fn contact_url(&self, id: ContactId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder, url: &str) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait(?Send)]
impl ContactsBackend for HttpBackend {
    async fn fetch_all(&self) -> ApiResult<Vec<ContactRecord>> {
        let url = self.collection_url();
        Self::send_json(self.client.get(url), url).await
    }

    async fn create(&self, body: &FormSnapshot) -> ApiResult<ContactRecord> {
        let url = self.collection_url();
        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body.to_json());
        Self::send_json(request, url).await
    }

    async fn update(&self, id: ContactId, body: &FormSnapshot) -> ApiResult<ContactRecord> {
        let url = self.contact_url(id);
        let request = self
            .client
            .put(&url)
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body.to_json());
        Self::send_json(request, &url).await
    }

    fn delete(&self, id: ContactId) {
        let request = self.client.delete(self.contact_url(id));
        spawn_local(async move {
            if let Err(e) = request.send().await {
                tracing::warn!(id, error = %e, "delete request failed");
            }
        });
    }
}
