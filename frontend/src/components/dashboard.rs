use crate::hooks::{use_dashboard, UseDashboardActions, UseDashboardResult};
use crate::services::ApiClient;
use shared::DashboardState;
use yew::prelude::*;

use super::{DashboardControls, Pager, PriceChart, StatisticsPanel, TransactionTable};

#[derive(Properties, PartialEq)]
pub struct TransactionDashboardProps {
    pub api_client: ApiClient,
}

/// Month/search controls, monthly statistics, the price chart and one page
/// of transactions.
#[function_component(TransactionDashboard)]
pub fn transaction_dashboard(props: &TransactionDashboardProps) -> Html {
    let UseDashboardResult { state, actions } = use_dashboard(&props.api_client);

    html! {
        <DashboardView state={(**state).clone()} {actions} />
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub state: DashboardState,
    pub actions: UseDashboardActions,
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let DashboardViewProps { state, actions } = props;
    let month = state.month();

    html! {
        <div class="transaction-dashboard">
            <h2>{"Transaction Dashboard"}</h2>
            <DashboardControls
                search={state.search().to_string()}
                {month}
                on_search={actions.on_search.clone()}
                on_month_change={actions.on_month_change.clone()}
            />
            <StatisticsPanel
                {month}
                statistics={state.statistics().clone()}
                status={state.statistics_status().clone()}
            />
            <PriceChart
                {month}
                buckets={state.buckets().to_vec()}
                status={state.chart_status().clone()}
            />
            <TransactionTable
                transactions={state.visible_transactions().to_vec()}
                status={state.transactions_status().clone()}
            />
            <Pager
                page={state.page()}
                on_previous={actions.previous_page.clone()}
                on_next={actions.next_page.clone()}
            />
        </div>
    }
}
