use shared::Month;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardControlsProps {
    pub search: AttrValue,
    pub month: Month,
    pub on_search: Callback<InputEvent>,
    pub on_month_change: Callback<Event>,
}

/// Search box and month selector
#[function_component(DashboardControls)]
pub fn dashboard_controls(props: &DashboardControlsProps) -> Html {
    html! {
        <div class="dashboard-controls">
            <input
                type="text"
                class="search-input"
                placeholder="Search transaction"
                value={props.search.clone()}
                oninput={props.on_search.clone()}
            />
            <select class="month-select" onchange={props.on_month_change.clone()}>
                {for Month::ALL.iter().map(|month| html! {
                    <option
                        key={month.name()}
                        value={month.name()}
                        selected={*month == props.month}
                    >
                        {month.name()}
                    </option>
                })}
            </select>
        </div>
    }
}
