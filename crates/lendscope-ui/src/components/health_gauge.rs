use crate::core::store::GaugeView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct HealthGaugeProps {
    pub gauge: GaugeView,
}

/// Ring coloured by the clamped health colour around the score caption.
#[function_component(HealthGauge)]
pub(crate) fn health_gauge(props: &HealthGaugeProps) -> Html {
    let style = format!("background-color: {};", props.gauge.color.to_css());
    html! {
        <div
            class={classes!("health-gauge", "flex", "h-72", "w-80", "items-center", "justify-center", "rounded-full", props.gauge.band.as_str())}
            style={style.clone()}
        >
            <div class="flex h-[90%] w-[90%] items-center justify-center rounded-full" style={style}>
                <div class="flex h-full w-full flex-col items-center justify-center rounded-full bg-black">
                    <p class="text-7xl font-bold">{props.gauge.label.clone()}</p>
                    <p class="text-lg">{"Health"}</p>
                </div>
            </div>
        </div>
    }
}
