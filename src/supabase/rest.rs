//! src/supabase/rest.rs
use super::{Query, QueryError, Record};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

#[derive(Debug)]
pub struct RestClient {
    pub http_client: Client,
    pub url: String,
    pub api_key: Secret<String>,
}

impl RestClient {
    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), table)
    }

    pub async fn select(&self, query: &Query<'_>) -> Result<Vec<Record>, QueryError> {
        let response = self
            .http_client
            .get(self.endpoint(query.table))
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
            .header("accept", "application/json")
            .query(&query.params())
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(QueryError::rejected(status, &body));
        }

        serde_json::from_slice(&body).map_err(QueryError::Decode)
    }
}
