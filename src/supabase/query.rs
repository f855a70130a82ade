//! src/supabase/query.rs
use super::{QueryError, Record, Supabase};

/// A read against one table or view.
#[derive(Debug, PartialEq)]
pub struct Query<'a> {
    pub table: &'a str,
    pub columns: &'a str,
    pub order: Option<&'a str>,
}

impl<'a> Query<'a> {
    /// Query string parameters in PostgREST syntax.
    pub fn params(&self) -> Vec<(&'static str, &'a str)> {
        let mut params = vec![("select", self.columns)];
        if let Some(order) = self.order {
            params.push(("order", order));
        }
        params
    }
}

pub struct QueryBuilder<'a> {
    supabase: &'a Supabase,
    table: &'a str,
    columns: &'a str,
    order: Option<&'a str>,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(supabase: &'a Supabase, table: &'a str) -> Self {
        Self {
            supabase,
            table,
            columns: "*",
            order: None,
        }
    }

    pub fn select(mut self, columns: &'a str) -> Self {
        self.columns = columns;
        self
    }

    pub fn order_by(mut self, order: Option<&'a str>) -> Self {
        self.order = order;
        self
    }

    pub fn build(&self) -> Query<'a> {
        Query {
            table: self.table,
            columns: self.columns,
            order: self.order,
        }
    }

    pub async fn execute(self) -> Result<Vec<Record>, QueryError> {
        self.supabase.execute(&self.build()).await
    }
}
