use gloo_console::error;
use yew::prelude::*;
use yew::platform::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent, MouseEvent};
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use crate::searchservice::{self, SearchError, SearchResult};


/// Resource types offered by the selector, as `(value, label)` pairs
///
/// A value is either a bare type code or a `type:subtype` compound.
const RESOURCE_TYPES: &[(&str, &str)] = &[
    ("s3", "S3 Bucket"),
    ("dns", "DNS (Hosted Zone or Record)"),
    ("loadbalancer", "Load Balancer"),
    ("ec2", "EC2 Instance (by IP, DNS, or Tags)"),
    ("iam:key", "IAM (Access Key)"),
    ("iam:user", "IAM (User)"),
    ("elastic_ip", "Elastic IP"),
    ("cloudfront", "CloudFront Distribution (by ID or Domain name)"),
];


#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    /// Receives the new result list on every search: an empty list when a
    /// search is dispatched, the parsed records when it succeeds.
    pub on_results: Callback<Vec<SearchResult>>,
}


/// Return false for terms that are empty or whitespace-only
fn is_search_term_valid(term: &str) -> bool {
    !term.trim().is_empty()
}

/// Split a selector value into its type and subtype parts
fn split_type_value(value: &str) -> (&str, &str) {
    match value.split_once(':') {
        Some((rtype, subtype)) => (rtype, subtype),
        None => (value, ""),
    }
}


#[function_component(SearchForm)]
pub fn search_form(props: &Props) -> Html {
    let search_term = use_state(String::new);
    let type_value = use_state(String::new);
    let sub_type_value = use_state(String::new);
    let is_loading = use_state(|| false);

    let on_term_input = {
        let search_term = search_term.clone();
        move |e: InputEvent| {
            let target = e.target().unwrap_throw();
            let input: HtmlInputElement = target.dyn_into().unwrap_throw();
            search_term.set(input.value());
        }
    };

    let on_type_change = {
        let type_value = type_value.clone();
        let sub_type_value = sub_type_value.clone();
        move |e: Event| {
            let target = e.target().unwrap_throw();
            let select: HtmlSelectElement = target.dyn_into().unwrap_throw();
            let value = select.value();
            let (rtype, subtype) = split_type_value(&value);
            type_value.set(rtype.to_string());
            sub_type_value.set(subtype.to_string());
        }
    };

    let send_search_request = {
        let search_term = search_term.clone();
        let type_value = type_value.clone();
        let sub_type_value = sub_type_value.clone();
        let is_loading = is_loading.clone();
        let on_results = props.on_results.clone();
        move |_: MouseEvent| {
            // Clear previous results from view while the request is outstanding
            on_results.emit(Vec::new());
            is_loading.set(true);

            let term = (*search_term).clone();
            let rtype = (*type_value).clone();
            let subtype = (*sub_type_value).clone();
            let is_loading = is_loading.clone();
            let on_results = on_results.clone();
            spawn_local(async move {
                match searchservice::fetch_results(&term, &rtype, &subtype).await {
                    Ok(results) => {
                        on_results.emit(results);
                        is_loading.set(false);
                    }
                    Err(e @ SearchError::UnexpectedContentType(_)) => {
                        // TODO: the spinner never clears on this path; decide
                        // whether a non-JSON response should reset it
                        error!(format!("{}", e));
                    }
                    Err(e) => {
                        error!(format!("error fetching data: {}", e));
                        is_loading.set(false);
                    }
                }
            });
        }
    };

    let valid = is_search_term_valid(&search_term);

    html! {
        <>
            <div id="search-form">
                <div class="search-field">
                    <label for="resource-name">{ "Resource Name (may be partial)" }</label>
                    <input type="text"
                        id="resource-name"
                        name="resource-name"
                        value={(*search_term).clone()}
                        oninput={on_term_input} />
                </div>
                <div class="search-field">
                    <label for="resource-type">{ "Resource Type" }</label>
                    <select id="resource-type" name="resource-type" onchange={on_type_change}>
                        <option value="" disabled={true} selected={true} hidden={true}>{ "Select a type" }</option>
                        { for RESOURCE_TYPES.iter().map(|(value, label)| html! {
                            <option value={*value}>{ *label }</option>
                        }) }
                    </select>
                </div>
                <button id="search-button" onclick={send_search_request} disabled={!valid}>
                    { "Search AWS" }
                </button>
            </div>
            if *is_loading {
                <div id="search-spinner" class="spinner"></div>
            }
        </>
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_terms_are_invalid() {
        assert!(!is_search_term_valid(""));
        assert!(!is_search_term_valid("   "));
        assert!(!is_search_term_valid("\t \n"));
    }

    #[test]
    fn other_terms_are_valid() {
        assert!(is_search_term_valid("prod-bucket"));
        assert!(is_search_term_valid(" padded "));
        assert!(is_search_term_valid("10.0.0.1"));
    }

    #[test]
    fn compound_values_split_on_first_colon() {
        assert_eq!(split_type_value("iam:key"), ("iam", "key"));
        assert_eq!(split_type_value("iam:user"), ("iam", "user"));
        assert_eq!(split_type_value("a:b:c"), ("a", "b:c"));
    }

    #[test]
    fn bare_values_have_no_subtype() {
        assert_eq!(split_type_value("s3"), ("s3", ""));
        assert_eq!(split_type_value(""), ("", ""));
    }

    #[test]
    fn selector_offers_the_fixed_type_list() {
        let values: Vec<&str> = RESOURCE_TYPES.iter().map(|(value, _)| *value).collect();
        assert_eq!(values, [
            "s3", "dns", "loadbalancer", "ec2",
            "iam:key", "iam:user", "elastic_ip", "cloudfront",
        ]);
    }
}
