//! Typed HTTP client for the equipment API.
//!
//! Thin wrapper over `reqwest` used by front-end code and integration
//! tests; one method per endpoint, each decoding the `{success, data,
//! message}` envelope.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{CreateEquipment, Equipment, UpdateEquipment};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("response body missing data")]
    MissingData,
}

/// Response envelope as decoded from the wire.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

pub struct EquipmentClient {
    http: reqwest::Client,
    base_url: String,
}

impl EquipmentClient {
    /// Create a client for an API root such as `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Equipment>, ClientError> {
        let response = self
            .http
            .get(format!("{}/equipment", self.base_url))
            .send()
            .await?;
        decode(response).await?.data.ok_or(ClientError::MissingData)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Equipment, ClientError> {
        let response = self
            .http
            .get(format!("{}/equipment/{}", self.base_url, id))
            .send()
            .await?;
        decode(response).await?.data.ok_or(ClientError::MissingData)
    }

    pub async fn create(&self, equipment: &CreateEquipment) -> Result<Equipment, ClientError> {
        let response = self
            .http
            .post(format!("{}/equipment", self.base_url))
            .json(equipment)
            .send()
            .await?;
        decode(response).await?.data.ok_or(ClientError::MissingData)
    }

    pub async fn update(&self, id: i64, equipment: &UpdateEquipment) -> Result<Equipment, ClientError> {
        let response = self
            .http
            .put(format!("{}/equipment/{}", self.base_url, id))
            .json(equipment)
            .send()
            .await?;
        decode(response).await?.data.ok_or(ClientError::MissingData)
    }

    pub async fn remove(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/equipment/{}", self.base_url, id))
            .send()
            .await?;
        decode::<()>(response).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<ApiEnvelope<T>, ClientError> {
    let status = response.status();
    let envelope: ApiEnvelope<T> = response.json().await?;
    if !envelope.success {
        return Err(ClientError::Api {
            status,
            message: envelope
                .message
                .unwrap_or_else(|| "request failed".to_string()),
        });
    }
    Ok(envelope)
}
