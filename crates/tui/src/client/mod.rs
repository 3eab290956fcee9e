use api_types::{
    Id,
    category::{Category, CategoryCreated, CategoryNew},
    ledger::{Transaction, TransactionCreated, TransactionPayload},
};
use reqwest::{RequestBuilder, Response, StatusCode, Url, header::CONTENT_TYPE};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

use crate::error::{AppError, Result};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not found")]
    NotFound,
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("server error ({status}): {message}")]
    Server { status: StatusCode, message: String },
    #[error("expected application/json, got {}", .0.as_deref().unwrap_or("no content type"))]
    ContentType(Option<String>),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid endpoint: {0}")]
    Endpoint(String),
    #[error("backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// HTTP client for the ledger/category backend.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url =
            Url::parse(base_url).map_err(|err| AppError::BaseUrl(format!("{base_url}: {err}")))?;
        // `Url::join` replaces the last segment unless the path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("jar_tui/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Endpoint(format!("{path}: {err}")))
    }

    /// `ledger/{id}` with the id escaped as a single path segment.
    fn ledger_item(&self, id: &Id) -> std::result::Result<Url, ClientError> {
        let mut url = self.endpoint("ledger")?;
        url.path_segments_mut()
            .map_err(|()| ClientError::Endpoint(format!("{}: cannot be a base", self.base_url)))?
            .push(&id.to_string());
        Ok(url)
    }

    pub async fn ledger_list(&self) -> std::result::Result<Vec<Transaction>, ClientError> {
        let req = self.http.get(self.endpoint("ledger")?);
        send_json(req).await
    }

    /// The jar's view of the ledger. The backend answers with the same
    /// transaction array as [`Client::ledger_list`].
    pub async fn ledger_total(&self) -> std::result::Result<Vec<Transaction>, ClientError> {
        let req = self.http.get(self.endpoint("ledger/total")?);
        send_json(req).await
    }

    pub async fn ledger_get(&self, id: &Id) -> std::result::Result<Transaction, ClientError> {
        let req = self.http.get(self.ledger_item(id)?);
        send_json(req).await
    }

    pub async fn ledger_create(
        &self,
        payload: &TransactionPayload,
    ) -> std::result::Result<TransactionCreated, ClientError> {
        let req = self.http.post(self.endpoint("ledger")?).json(payload);
        send_json(req).await
    }

    pub async fn ledger_update(
        &self,
        id: &Id,
        payload: &TransactionPayload,
    ) -> std::result::Result<(), ClientError> {
        let req = self
            .http
            .put(self.ledger_item(id)?)
            .json(payload);
        send_unit(req).await
    }

    pub async fn ledger_delete(&self, id: &Id) -> std::result::Result<(), ClientError> {
        let req = self.http.delete(self.ledger_item(id)?);
        send_unit(req).await
    }

    pub async fn category_list(&self) -> std::result::Result<Vec<Category>, ClientError> {
        let req = self.http.get(self.endpoint("category")?);
        send_json(req).await
    }

    pub async fn category_create(
        &self,
        title: &str,
    ) -> std::result::Result<CategoryCreated, ClientError> {
        let payload = CategoryNew {
            title: title.to_string(),
        };
        let req = self.http.post(self.endpoint("category")?).json(&payload);
        send_json(req).await
    }
}

async fn send(req: RequestBuilder) -> std::result::Result<Response, ClientError> {
    let res = req.send().await?;
    let status = res.status();
    tracing::debug!(url = %res.url(), %status, "backend response");
    if status.is_success() {
        return Ok(res);
    }
    Err(error_for_status(status, res).await)
}

async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> std::result::Result<T, ClientError> {
    let res = send(req).await?;
    let content_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    if !content_type
        .as_deref()
        .is_some_and(|value| value.contains("application/json"))
    {
        return Err(ClientError::ContentType(content_type));
    }
    let body = res.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

async fn send_unit(req: RequestBuilder) -> std::result::Result<(), ClientError> {
    send(req).await.map(|_| ())
}

async fn error_for_status(status: StatusCode, res: Response) -> ClientError {
    let body = res
        .json::<ErrorResponse>()
        .await
        .map(|err| err.error)
        .unwrap_or_else(|_| "unknown error".to_string());

    match status.as_u16() {
        404 => ClientError::NotFound,
        409 => ClientError::Conflict(body),
        400 | 422 => ClientError::Validation(body),
        _ => ClientError::Server {
            status,
            message: body,
        },
    }
}

#[cfg(test)]
mod tests;
