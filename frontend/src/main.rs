mod components;
mod config;
mod hooks;
mod services;

use components::TransactionDashboard;
use config::DashboardConfig;
use services::ApiClient;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: DashboardConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api_client = use_memo(props.config.clone(), |config| ApiClient::new(config));

    html! {
        <main class="dashboard-app">
            <TransactionDashboard api_client={(*api_client).clone()} />
        </main>
    }
}

fn main() {
    let config = DashboardConfig::from_build_env();
    services::logging::init(&config.log_level);
    tracing::info!(
        transactions = %config.transactions_url,
        statistics = %config.statistics_url,
        chart = %config.chart_url,
        "starting transaction dashboard"
    );

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
