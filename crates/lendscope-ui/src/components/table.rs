use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TableProps {
    #[prop_or_default]
    pub headers: Vec<AttrValue>,
    #[prop_or_default]
    pub rows: Vec<Vec<AttrValue>>,
    #[prop_or_default]
    pub empty_label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Table)]
pub(crate) fn table(props: &TableProps) -> Html {
    let columns = props.headers.len().max(1).to_string();
    html! {
        <div class="overflow-x-auto">
            <table class={classes!("table", props.class.clone())}>
                <thead>
                    <tr>
                        {for props.headers.iter().map(|head| html! { <th>{head.clone()}</th> })}
                    </tr>
                </thead>
                <tbody>
                    {if props.rows.is_empty() {
                        html! {
                            <tr><td colspan={columns} class="text-center opacity-60">{props.empty_label.clone()}</td></tr>
                        }
                    } else {
                        html! {
                            {for props.rows.iter().map(|row| html! {
                                <tr>
                                    {for row.iter().map(|cell| html! { <td>{cell.clone()}</td> })}
                                </tr>
                            })}
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
