use shared::{LoadState, Month, Statistics};
use yew::prelude::*;

use super::StatusNote;

#[derive(Properties, PartialEq)]
pub struct StatisticsPanelProps {
    pub month: Month,
    pub statistics: Statistics,
    pub status: LoadState,
}

#[function_component(StatisticsPanel)]
pub fn statistics_panel(props: &StatisticsPanelProps) -> Html {
    let stats = &props.statistics;

    html! {
        <section class="statistics-panel">
            <h3>{format!("Statistics - {}", props.month)}</h3>
            <StatusNote status={props.status.clone()} loading_label="Loading statistics..." />
            <p>{format!("Total sale: {}", stats.total_sale)}</p>
            <p>{format!("Total sold items: {}", stats.total_sold_items)}</p>
            <p>{format!("Total not sold items: {}", stats.total_not_sold_items)}</p>
        </section>
    }
}
