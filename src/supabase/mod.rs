//! src/supabase/mod.rs
//!
//! Thin client for the PostgREST API of a hosted Supabase project.
use crate::configuration::SupabaseSettings;
use reqwest::Client;

mod error;
pub use error::QueryError;

mod query;
pub use query::{Query, QueryBuilder};

mod rest;
use rest::RestClient;

/// One row, exactly as PostgREST returned it. Numbers keep their original
/// text, so `numeric` and `bigint` columns come back digit for digit.
pub type Record = serde_json::Map<String, serde_json::Value>;

#[derive(Debug)]
pub struct Supabase {
    rest_client: RestClient,
}

impl From<SupabaseSettings> for Supabase {
    fn from(settings: SupabaseSettings) -> Self {
        let rest_client = RestClient {
            http_client: Client::new(),
            url: settings.url,
            api_key: settings.api_key,
        };

        Self::new(rest_client)
    }
}

impl Supabase {
    fn new(rest_client: RestClient) -> Self {
        Self { rest_client }
    }

    pub fn table<'a>(&'a self, name: &'a str) -> QueryBuilder<'a> {
        QueryBuilder::new(self, name)
    }

    #[tracing::instrument(
        name = "Querying Supabase",
        skip(self, query),
        fields(table = %query.table, order = ?query.order)
    )]
    pub async fn execute(&self, query: &Query<'_>) -> Result<Vec<Record>, QueryError> {
        self.rest_client.select(query).await.map_err(|e| {
            tracing::error!("Failed to query Supabase: {:?}", e);
            e
        })
    }
}
