use serde_json::Value;
use yew::prelude::*;
use crate::searchservice::SearchResult;


#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub result: SearchResult,
}


/// Render one result record as a field/value listing
///
/// Records are opaque JSON objects, so fields are shown in map order
/// without interpreting them.
#[function_component(ResultEntry)]
pub fn result_entry(props: &Props) -> Html {
    html! {
        <li class="result-entry">
            <dl>
                { for props.result.0.iter().map(|(name, value)| html! {
                    <>
                        <dt>{ name.clone() }</dt>
                        <dd>{ format_value(value) }</dd>
                    </>
                }) }
            </dl>
        </li>
    }
}

/// Format a field value, without quotes for plain strings
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
