//! Types shared by the transaction dashboard.
//!
//! Everything here is target independent: the wire records returned by the
//! remote services, the calendar [`Month`] used to filter them, and the
//! [`DashboardState`] container that the browser frontend drives through
//! [`DashboardAction`]s.

mod de;

pub mod dashboard;
pub mod models;
pub mod month;

pub use dashboard::{
    page_slice, DashboardAction, DashboardQuery, DashboardState, LoadState, RequestToken,
    TRANSACTIONS_PER_PAGE,
};
pub use models::{
    select_month_buckets, ChartMonthRecord, PriceBucket, Statistics, Transaction, PRICE_RANGES,
};
pub use month::{Month, MonthParseError};
