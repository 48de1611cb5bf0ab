//! HTTP gateway speaking to a chart-server instance

use super::{GatewayError, GatewayResult, PersistenceGateway};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use shared::models::{
    FloorTable, FloorTableCreate, Guest, GuestSeatUpdate, SeatingChart, SeatingChartCreate,
    TablePosition,
};

/// HTTP client for the chart-server REST API
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a new gateway against the given server base URL
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn delete(&self, path: &str) -> GatewayResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        let _: bool = Self::handle_response(response).await?;
        Ok(())
    }

    /// Map the HTTP response to a typed result
    ///
    /// Error bodies are the server's `{ code, message }` envelope; the
    /// message is carried through so the UI can surface it inline.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> GatewayResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|v| v["message"].as_str().map(str::to_string))
                .unwrap_or(text);

            return match status {
                StatusCode::NOT_FOUND => Err(GatewayError::NotFound(message)),
                StatusCode::CONFLICT => Err(GatewayError::Conflict(message)),
                StatusCode::BAD_REQUEST => Err(GatewayError::Validation(message)),
                StatusCode::SERVICE_UNAVAILABLE => Err(GatewayError::Unavailable(message)),
                _ => Err(GatewayError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl PersistenceGateway for HttpGateway {
    async fn list_charts(&self, wedding_id: &str) -> GatewayResult<Vec<SeatingChart>> {
        self.get(&format!("api/charts?wedding_id={wedding_id}")).await
    }

    async fn create_chart(&self, data: SeatingChartCreate) -> GatewayResult<SeatingChart> {
        self.post("api/charts", &data).await
    }

    async fn delete_chart(&self, chart_id: &str) -> GatewayResult<()> {
        self.delete(&format!("api/charts/{chart_id}")).await
    }

    async fn list_tables(&self, chart_id: &str) -> GatewayResult<Vec<FloorTable>> {
        self.get(&format!("api/charts/{chart_id}/tables")).await
    }

    async fn create_table(&self, data: FloorTableCreate) -> GatewayResult<FloorTable> {
        self.post("api/tables", &data).await
    }

    async fn update_table_position(
        &self,
        table_id: &str,
        pos: TablePosition,
    ) -> GatewayResult<FloorTable> {
        self.put(&format!("api/tables/{table_id}/position"), &pos).await
    }

    async fn delete_table(&self, table_id: &str) -> GatewayResult<()> {
        self.delete(&format!("api/tables/{table_id}")).await
    }

    async fn list_guests(&self, wedding_id: &str) -> GatewayResult<Vec<Guest>> {
        self.get(&format!("api/guests?wedding_id={wedding_id}")).await
    }

    async fn update_guest_seat(
        &self,
        guest_id: &str,
        table_number: Option<i64>,
    ) -> GatewayResult<Guest> {
        self.put(
            &format!("api/guests/{guest_id}/seat"),
            &GuestSeatUpdate { table_number },
        )
        .await
    }
}
