//! REST client for the applications API.
//!
//! All records live under one collection endpoint (list and create); each
//! record carries the URL of its own detail endpoint in `links.self` (fetch,
//! update and delete). Every call resolves exactly once, either to the
//! unserialized records or to a [`RequestError`]. Nothing is retried.

use reqwest::{Client, Method, RequestBuilder, Response, header};
use serde_json::Value;
use thiserror::Error;

use crate::application::ApplicationData;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with status {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    #[error("unexpected response from {url}: {message}")]
    Payload { url: String, message: String },

    #[error("application has no detail URL")]
    MissingDetailUrl,
}

impl RequestError {
    pub fn url(&self) -> &str {
        match self {
            RequestError::Transport { url, .. }
            | RequestError::Status { url, .. }
            | RequestError::Payload { url, .. } => url,
            RequestError::MissingDetailUrl => "",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            RequestError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// The two shapes a response can carry: a list page or a detail page.
#[derive(Debug, Clone, PartialEq)]
pub enum Unserialized {
    Many(Vec<ApplicationData>),
    One(ApplicationData),
}

impl Unserialized {
    pub fn into_vec(self) -> Vec<ApplicationData> {
        match self {
            Unserialized::Many(apps) => apps,
            Unserialized::One(app) => vec![app],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApplicationDataClient {
    api_list_url: String,
    token: Option<String>,
    http: Client,
}

impl ApplicationDataClient {
    /// Creates the client for the collection endpoint at `api_list_url`.
    pub fn new(api_list_url: impl Into<String>) -> Self {
        Self {
            api_list_url: api_list_url.into(),
            token: None,
            http: Client::new(),
        }
    }

    /// Sends `token` as a bearer token with every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn api_list_url(&self) -> &str {
        &self.api_list_url
    }

    pub async fn fetch_list(&self) -> Result<Vec<ApplicationData>, RequestError> {
        let data = self.fetch_data(&self.api_list_url).await?;
        Ok(data.map(Unserialized::into_vec).unwrap_or_default())
    }

    pub async fn fetch_one(&self, url: &str) -> Result<ApplicationData, RequestError> {
        match self.fetch_data(url).await? {
            Some(Unserialized::One(app)) => Ok(app),
            _ => Err(RequestError::Payload {
                url: url.to_string(),
                message: "expected a single application".to_string(),
            }),
        }
    }

    pub async fn create_one(&self, app: &ApplicationData) -> Result<ApplicationData, RequestError> {
        self.send_data(app, &self.api_list_url, Method::POST).await
    }

    pub async fn update_one(&self, app: &ApplicationData) -> Result<ApplicationData, RequestError> {
        let url = app.api_detail_url().ok_or(RequestError::MissingDetailUrl)?;
        self.send_data(app, url, Method::PATCH).await
    }

    pub async fn delete_one(&self, app: &ApplicationData) -> Result<(), RequestError> {
        let url = app.api_detail_url().ok_or(RequestError::MissingDetailUrl)?;
        self.send(self.request(Method::DELETE, url), url).await?;
        Ok(())
    }

    /// Turns a response body into records.
    ///
    /// `data` holding an array yields one record per element, an object
    /// yields a single record, and anything else yields `None`.
    pub fn unserialize(payload: &Value) -> Option<Unserialized> {
        match payload.get("data") {
            Some(Value::Array(items)) => Some(Unserialized::Many(
                items
                    .iter()
                    .map(|item| ApplicationData::new(Some(item)))
                    .collect(),
            )),
            Some(item @ Value::Object(_)) => Some(Unserialized::One(ApplicationData::new(Some(item)))),
            _ => None,
        }
    }

    async fn fetch_data(&self, url: &str) -> Result<Option<Unserialized>, RequestError> {
        let response = self.send(self.request(Method::GET, url), url).await?;
        let payload = Self::read_json(response, url).await?;
        Ok(Self::unserialize(&payload))
    }

    // The response holds the newly created or updated record.
    async fn send_data(
        &self,
        app: &ApplicationData,
        url: &str,
        method: Method,
    ) -> Result<ApplicationData, RequestError> {
        let request = self.request(method, url).json(&app.serialize());
        let response = self.send(request, url).await?;
        let payload = Self::read_json(response, url).await?;

        match Self::unserialize(&payload) {
            Some(Unserialized::One(app)) => Ok(app),
            _ => Err(RequestError::Payload {
                url: url.to_string(),
                message: "expected a single application".to_string(),
            }),
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request = self
            .http
            .request(method, url)
            .header(header::ACCEPT, "application/json");

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, RequestError> {
        let response = request.send().await.map_err(|source| RequestError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("unknown error").to_string()
        } else {
            body
        };

        Err(RequestError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            message,
        })
    }

    async fn read_json(response: Response, url: &str) -> Result<Value, RequestError> {
        response.json::<Value>().await.map_err(|e| RequestError::Payload {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
