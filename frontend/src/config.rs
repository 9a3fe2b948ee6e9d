//! Build-time configuration.
//!
//! A browser bundle has no process environment, so overrides are read with
//! `option_env!` when the frontend is compiled, e.g.
//! `DASHBOARD_CHART_URL=http://localhost:8080/chart trunk build`.

pub const DEFAULT_TRANSACTIONS_URL: &str =
    "https://664c7d2a35bbda10988094cc.mockapi.io/task1/roxiler";
pub const DEFAULT_STATISTICS_URL: &str = "https://664c7d2a35bbda10988094cc.mockapi.io/task1/chart";
pub const DEFAULT_CHART_URL: &str = "https://6652d7f9813d78e6d6d65e3d.mockapi.io/v1/chartDatas";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub transactions_url: String,
    pub statistics_url: String,
    pub chart_url: String,
    /// `tracing` filter directive, e.g. `debug` or `shared=debug,info`
    pub log_level: String,
}

impl DashboardConfig {
    /// Defaults with any `DASHBOARD_*` overrides present at compile time
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("DASHBOARD_TRANSACTIONS_URL"),
            option_env!("DASHBOARD_STATISTICS_URL"),
            option_env!("DASHBOARD_CHART_URL"),
            option_env!("DASHBOARD_LOG_LEVEL"),
        )
    }

    fn with_overrides(
        transactions_url: Option<&str>,
        statistics_url: Option<&str>,
        chart_url: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        fn pick(value: Option<&str>, default: &str) -> String {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        }

        Self {
            transactions_url: pick(transactions_url, DEFAULT_TRANSACTIONS_URL),
            statistics_url: pick(statistics_url, DEFAULT_STATISTICS_URL),
            chart_url: pick(chart_url, DEFAULT_CHART_URL),
            log_level: pick(log_level, DEFAULT_LOG_LEVEL),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::with_overrides(None, None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_mock_services() {
        let config = DashboardConfig::default();
        assert_eq!(config.transactions_url, DEFAULT_TRANSACTIONS_URL);
        assert_eq!(config.statistics_url, DEFAULT_STATISTICS_URL);
        assert_eq!(config.chart_url, DEFAULT_CHART_URL);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let config = DashboardConfig::with_overrides(
            Some("http://localhost:3000/transactions"),
            None,
            Some("http://localhost:3000/chart"),
            Some("debug"),
        );
        assert_eq!(config.transactions_url, "http://localhost:3000/transactions");
        assert_eq!(config.statistics_url, DEFAULT_STATISTICS_URL);
        assert_eq!(config.chart_url, "http://localhost:3000/chart");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let config = DashboardConfig::with_overrides(Some("  "), Some(""), None, Some(" "));
        assert_eq!(config, DashboardConfig::default());
    }
}
