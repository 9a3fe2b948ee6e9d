use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub page: u32,
    pub on_previous: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

/// Previous/next buttons around the page number. "Next" is never disabled;
/// the server gives no total to bound it by.
#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    html! {
        <div class="pager">
            <button class="pager-previous" onclick={props.on_previous.clone()}>{"Previous"}</button>
            <span class="pager-page">{format!("Page No: {}", props.page)}</span>
            <button class="pager-next" onclick={props.on_next.clone()}>{"Next"}</button>
        </div>
    }
}
