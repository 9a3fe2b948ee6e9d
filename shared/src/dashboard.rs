//! # Dashboard State
//!
//! The complete client-side state of the transaction dashboard and the
//! actions that change it.
//!
//! ## Responsibilities:
//! - UI state: selected month, search term, current page
//! - Caches for the three remote sources and their request status
//! - Tagging reloads with a [`RequestToken`] so late responses from a
//!   superseded reload are dropped instead of overwriting newer data
//!
//! The frontend owns one [`DashboardState`] per mounted dashboard and feeds
//! it [`DashboardAction`]s; whenever [`DashboardState::query`] changes it
//! issues a reload of all three sources.

use crate::models::{select_month_buckets, ChartMonthRecord, PriceBucket, Statistics, Transaction};
use crate::month::Month;
use tracing::{debug, warn};

/// Rows shown per table page
pub const TRANSACTIONS_PER_PAGE: usize = 3;

/// The rows of `transactions` visible on `page` (1-based).
///
/// Past the end of the list this is empty rather than an error.
pub fn page_slice(transactions: &[Transaction], page: u32) -> &[Transaction] {
    let page = page.max(1) as usize;
    let start = (page - 1).saturating_mul(TRANSACTIONS_PER_PAGE);
    if start >= transactions.len() {
        return &[];
    }
    let end = (start + TRANSACTIONS_PER_PAGE).min(transactions.len());
    &transactions[start..end]
}

/// Identifies one reload of the three sources. Later reloads carry larger
/// tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Request status of one data source
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Parameters every reload is issued with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardQuery {
    pub month: Month,
    pub page: u32,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    SelectMonth(Month),
    Search(String),
    NextPage,
    PreviousPage,
    /// A reload tagged with this token has been issued
    ReloadStarted(RequestToken),
    TransactionsLoaded {
        token: RequestToken,
        result: Result<Vec<Transaction>, String>,
    },
    /// The statistics service answers with a list; its first record is used
    StatisticsLoaded {
        token: RequestToken,
        result: Result<Vec<Statistics>, String>,
    },
    ChartLoaded {
        token: RequestToken,
        result: Result<Vec<ChartMonthRecord>, String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    month: Month,
    search: String,
    page: u32,

    transactions: Vec<Transaction>,
    statistics: Statistics,
    buckets: Vec<PriceBucket>,

    transactions_status: LoadState,
    statistics_status: LoadState,
    chart_status: LoadState,

    latest_token: Option<RequestToken>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// State at mount: March, page 1, no search, nothing fetched yet
    pub fn new() -> Self {
        Self {
            month: Month::default(),
            search: String::new(),
            page: 1,
            transactions: Vec::new(),
            statistics: Statistics::default(),
            buckets: PriceBucket::empty_set(),
            transactions_status: LoadState::Idle,
            statistics_status: LoadState::Idle,
            chart_status: LoadState::Idle,
            latest_token: None,
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// The table rows for the current page
    pub fn visible_transactions(&self) -> &[Transaction] {
        page_slice(&self.transactions, self.page)
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Always exactly ten buckets in [`PRICE_RANGES`](crate::PRICE_RANGES) order
    pub fn buckets(&self) -> &[PriceBucket] {
        &self.buckets
    }

    pub fn transactions_status(&self) -> &LoadState {
        &self.transactions_status
    }

    pub fn statistics_status(&self) -> &LoadState {
        &self.statistics_status
    }

    pub fn chart_status(&self) -> &LoadState {
        &self.chart_status
    }

    /// Parameters for the next reload. A reload is due whenever this value
    /// changes.
    pub fn query(&self) -> DashboardQuery {
        DashboardQuery {
            month: self.month,
            page: self.page,
            search: self.search.clone(),
        }
    }

    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::SelectMonth(month) => self.update_query(|state| {
                state.month = month;
                state.page = 1;
            }),
            DashboardAction::Search(search) => self.update_query(|state| {
                state.search = search;
                state.page = 1;
            }),
            DashboardAction::NextPage => self.update_query(|state| {
                state.page = state.page.saturating_add(1);
            }),
            DashboardAction::PreviousPage => self.update_query(|state| {
                state.page = state.page.saturating_sub(1).max(1);
            }),
            DashboardAction::ReloadStarted(token) => {
                self.latest_token = Some(token);
                self.transactions_status = LoadState::Loading;
                self.statistics_status = LoadState::Loading;
                self.chart_status = LoadState::Loading;
            }
            DashboardAction::TransactionsLoaded { token, result } => {
                if !self.accepts(token, "transactions") {
                    return;
                }
                match result {
                    Ok(transactions) => {
                        self.transactions = transactions;
                        self.transactions_status = LoadState::Loaded;
                    }
                    Err(reason) => self.transactions_status = LoadState::Failed(reason),
                }
            }
            DashboardAction::StatisticsLoaded { token, result } => {
                if !self.accepts(token, "statistics") {
                    return;
                }
                match result.map(|records| records.into_iter().next()) {
                    Ok(Some(statistics)) => {
                        self.statistics = statistics;
                        self.statistics_status = LoadState::Loaded;
                    }
                    Ok(None) => {
                        warn!(month = %self.month, "statistics response contained no records");
                        self.statistics_status =
                            LoadState::Failed(format!("no statistics for {}", self.month));
                    }
                    Err(reason) => self.statistics_status = LoadState::Failed(reason),
                }
            }
            DashboardAction::ChartLoaded { token, result } => {
                if !self.accepts(token, "chart") {
                    return;
                }
                match result {
                    Ok(records) => {
                        match select_month_buckets(&records, self.month) {
                            Some(buckets) => self.buckets = buckets,
                            // Keep the previous bars when the month is missing
                            None => debug!(
                                month = %self.month,
                                records = records.len(),
                                "chart response has no record for the selected month"
                            ),
                        }
                        self.chart_status = LoadState::Loaded;
                    }
                    Err(reason) => self.chart_status = LoadState::Failed(reason),
                }
            }
        }
    }

    /// Applies a UI intent. Once the query differs, no token is current
    /// until the reload for the new query starts.
    fn update_query(&mut self, change: impl FnOnce(&mut Self)) {
        let before = self.query();
        change(self);
        if self.query() != before {
            if let Some(token) = self.latest_token.take() {
                debug!(token = token.value(), "query changed, awaiting a new reload");
            }
        }
    }

    fn accepts(&self, token: RequestToken, source: &'static str) -> bool {
        let current = self.latest_token == Some(token);
        if !current {
            debug!(
                source,
                token = token.value(),
                latest = ?self.latest_token,
                "discarding stale response"
            );
        }
        current
    }
}
