pub mod controls;
pub mod dashboard;
pub mod pager;
pub mod price_chart;
pub mod statistics_panel;
pub mod status_note;
pub mod transaction_table;

pub use controls::DashboardControls;
pub use dashboard::TransactionDashboard;
pub use pager::Pager;
pub use price_chart::PriceChart;
pub use statistics_panel::StatisticsPanel;
pub use status_note::StatusNote;
pub use transaction_table::TransactionTable;
