use shared::LoadState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusNoteProps {
    pub status: LoadState,
    pub loading_label: AttrValue,
}

/// Loading hint or error line for one data source. Renders nothing once the
/// source has loaded, so the data below it stays the focus.
#[function_component(StatusNote)]
pub fn status_note(props: &StatusNoteProps) -> Html {
    match &props.status {
        LoadState::Loading => html! {
            <p class="status-note loading">{props.loading_label.clone()}</p>
        },
        LoadState::Failed(reason) => html! {
            <p class="status-note error">{format!("Could not refresh: {}", reason)}</p>
        },
        LoadState::Idle | LoadState::Loaded => html! {},
    }
}
