use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct InfoCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub info: Option<AttrValue>,
}

#[function_component(InfoCard)]
pub(crate) fn info_card(props: &InfoCardProps) -> Html {
    html! {
        <div class="stat leading-10 tracking-widest">
            <div class="stat-title">
                {props.title.clone()}
                {props.info.clone().map(|info| html! {
                    <span class="tooltip ml-1" data-tip={info}>{"ⓘ"}</span>
                }).unwrap_or_default()}
            </div>
            <div class="stat-value">{props.value.clone()}</div>
        </div>
    }
}
