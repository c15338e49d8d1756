use taskpad_core::{Draft, Priority};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent, MouseEvent};
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
    pub draft: Draft,
    pub editing: bool,
    pub on_title_change: Callback<String>,
    pub on_description_change: Callback<String>,
    pub on_priority_change: Callback<Priority>,
    pub on_submit: Callback<()>,
}

#[function_component(TaskForm)]
pub fn task_form(props: &TaskFormProps) -> Html {
    let on_title = {
        let on_title_change = props.on_title_change.clone();
        move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_title_change.emit(input.value());
        }
    };

    let on_description = {
        let on_description_change = props.on_description_change.clone();
        move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_description_change.emit(input.value());
        }
    };

    let on_priority = {
        let on_priority_change = props.on_priority_change.clone();
        move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_priority_change.emit(Priority::parse(&select.value()));
        }
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        move |_: MouseEvent| on_submit.emit(())
    };

    let label = if props.editing { "Update Task" } else { "Add Task" };

    html! {
        <div class="task-form">
            <input
                class="field"
                type="text"
                placeholder="Title"
                value={props.draft.title.clone()}
                oninput={on_title}
            />
            <input
                class="field"
                type="text"
                placeholder="Description"
                value={props.draft.description.clone()}
                oninput={on_description}
            />
            <select class="field" value={props.draft.priority.as_str()} onchange={on_priority}>
                <option value="high" selected={props.draft.priority == Priority::High}>
                    { "High" }
                </option>
                <option value="medium" selected={props.draft.priority == Priority::Medium}>
                    { "Medium" }
                </option>
                <option value="low" selected={props.draft.priority == Priority::Low}>
                    { "Low" }
                </option>
            </select>
            <button class="submit" onclick={on_submit}>{ label }</button>
        </div>
    }
}
