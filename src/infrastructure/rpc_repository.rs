// RPC repository implementation over the host's command endpoint
use crate::application::data_repository::{DataRequest, DeviceDataRepository};
use crate::domain::series::RawData;
use crate::infrastructure::config::RpcSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RpcRepository {
    host: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct CommandEnvelope<'a> {
    command: &'a str,
    to: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct CommandResponse {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct DeviceDataEnvelope {
    #[allow(dead_code)]
    uuid: String,
    #[serde(default)]
    #[allow(dead_code)]
    event: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    names: Vec<String>,
    data: RawData,
}

impl RpcRepository {
    pub fn new(host: String) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_settings(settings: &RpcSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build RPC HTTP client")?;
        Ok(Self {
            host: settings.host.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn send_command(&self, command: &str, to: &str, params: Value) -> Result<Value> {
        let url = format!("{}/command", self.host);
        let envelope = CommandEnvelope { command, to, params };

        let response = self
            .client
            .post(&url)
            .json(&envelope)
            .send()
            .await
            .context("Failed to send command to RPC endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("RPC command failed with status {}: {}", status, body);
        }

        let data = response
            .json::<CommandResponse>()
            .await
            .context("Failed to parse RPC response")?;

        extract_command_data(data)
    }
}

fn extract_command_data(response: CommandResponse) -> Result<Value> {
    if response.error {
        let message = if response.message.is_empty() {
            "unknown error".to_string()
        } else {
            response.message
        };
        anyhow::bail!("RPC command error: {}", message);
    }

    response
        .data
        .ok_or_else(|| anyhow::anyhow!("RPC response contains no data"))
}

#[async_trait]
impl DeviceDataRepository for RpcRepository {
    async fn get_device_data(
        &self,
        device_uuid: &str,
        start: i64,
        end: i64,
        request: &DataRequest,
    ) -> Result<RawData> {
        let params = serde_json::json!({
            "device_uuid": device_uuid,
            "timestamp_start": start,
            "timestamp_end": end,
            "options": request,
        });

        tracing::debug!("Requesting device data for {} over {}..{}", device_uuid, start, end);
        let data = self.send_command("get_data", "charts", params).await?;

        let envelope: DeviceDataEnvelope =
            serde_json::from_value(data).context("Failed to decode device data envelope")?;
        Ok(envelope.data)
    }
}
