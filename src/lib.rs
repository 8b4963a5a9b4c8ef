//! Browser UI for searching AWS resources
//!
//! Client-side-rendered Yew app: a search form sends queries to the backend
//! search endpoint and the matched resources are listed below the form.

pub mod settings;
mod searchservice;
mod components;

use yew::prelude::*;

use searchservice::SearchResult;
use components::*;


#[function_component(App)]
pub fn app() -> Html {
    let results = use_state(Vec::<SearchResult>::new);

    let on_results = {
        let results = results.clone();
        Callback::from(move |data: Vec<SearchResult>| results.set(data))
    };

    html! {
        <div>
            <SearchForm {on_results} />
            <div id="search-content">
                if !results.is_empty() {
                    <>
                        { html_result_count(&results) }
                        <ul id="search-results">
                            { for results.iter().enumerate().map(|(i, result)| html! {
                                <ResultEntry key={i} result={result.clone()} />
                            }) }
                        </ul>
                    </>
                }
            </div>
        </div>
    }
}


/// Return the result count displayed above the result list
fn html_result_count(results: &[SearchResult]) -> Html {
    html! {
        <div id="result-count">
            <b>{ results.len() }</b>{ " results" }
        </div>
    }
}
