use crate::core::logic::pager_label;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    #[prop_or(1usize)]
    pub current: usize,
    #[prop_or(1usize)]
    pub total: usize,
    #[prop_or_default]
    pub class: Classes,
    /// Receives the requested page; the store clamps it.
    #[prop_or_default]
    pub on_change: Callback<usize>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let current = props.current;
    let total = props.total.max(1);

    let go_prev = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(current.saturating_sub(1)))
    };
    let go_next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(current.saturating_add(1)))
    };

    html! {
        <div class={classes!("join", "pagination", props.class.clone())}>
            <button class="btn join-item" disabled={current <= 1} onclick={go_prev}>{"«"}</button>
            <button class="btn join-item">{pager_label(current, total)}</button>
            <button class="btn join-item" disabled={current >= total} onclick={go_next}>{"»"}</button>
        </div>
    }
}
