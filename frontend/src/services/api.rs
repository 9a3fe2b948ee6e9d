use crate::config::DashboardConfig;
use gloo::net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::{ChartMonthRecord, DashboardQuery, Month, Statistics, Transaction};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{endpoint} request failed: {source}")]
    Network {
        endpoint: &'static str,
        #[source]
        source: gloo::net::Error,
    },

    #[error("{endpoint} returned {status} {status_text}")]
    Status {
        endpoint: &'static str,
        status: u16,
        status_text: String,
    },

    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: gloo::net::Error,
    },
}

/// HTTP client for the three dashboard services
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    transactions_url: String,
    statistics_url: String,
    chart_url: String,
}

impl ApiClient {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            transactions_url: config.transactions_url.clone(),
            statistics_url: config.statistics_url.clone(),
            chart_url: config.chart_url.clone(),
        }
    }

    /// Transactions for the month, page and search term of `query`
    pub async fn get_transactions(&self, query: &DashboardQuery) -> Result<Vec<Transaction>, ApiError> {
        let request = Request::get(&self.transactions_url).query(transactions_params(query));
        self.get_json("transactions", request).await
    }

    /// Statistics records for `month`; the service sends a list holding one
    pub async fn get_statistics(&self, month: Month) -> Result<Vec<Statistics>, ApiError> {
        let request = Request::get(&self.statistics_url).query(month_params(month));
        self.get_json("statistics", request).await
    }

    /// Per-month price bucket records. The service may answer with other
    /// months too; picking the right one is left to the caller.
    pub async fn get_chart_records(&self, month: Month) -> Result<Vec<ChartMonthRecord>, ApiError> {
        let request = Request::get(&self.chart_url).query(month_params(month));
        self.get_json("chart", request).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Network { endpoint, source })?;

        if !response.ok() {
            return Err(ApiError::Status {
                endpoint,
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { endpoint, source })
    }
}

/// Query string of the transactions endpoint, in the order the service
/// documents it. The search term is sent even when empty.
pub fn transactions_params(query: &DashboardQuery) -> [(&'static str, String); 3] {
    [
        ("month", query.month.name().to_string()),
        ("page", query.page.to_string()),
        ("search", query.search.clone()),
    ]
}

pub fn month_params(month: Month) -> [(&'static str, String); 1] {
    [("month", month.name().to_string())]
}
