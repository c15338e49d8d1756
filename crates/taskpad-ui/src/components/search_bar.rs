use web_sys::{HtmlInputElement, InputEvent};
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub term: String,
    pub on_search: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let on_search = props.on_search.clone();
    let oninput = move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_search.emit(input.value());
    };

    html! {
        <header class="app-bar">
            <span class="title">{ "Task Manager" }</span>
            <input
                class="search"
                type="text"
                placeholder="Search"
                value={props.term.clone()}
                oninput={oninput}
            />
        </header>
    }
}
