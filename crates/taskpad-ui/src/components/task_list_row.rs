use taskpad_core::Task;
use yew::{Callback, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
    pub task: Task,
    pub on_edit: Callback<u64>,
    pub on_toggle: Callback<u64>,
    pub on_delete: Callback<u64>,
}

#[function_component(TaskListRow)]
pub fn task_list_row(props: &TaskListRowProps) -> Html {
    let id = props.task.id;
    let on_edit = props.on_edit.clone();
    let on_toggle = props.on_toggle.clone();
    let on_delete = props.on_delete.clone();

    let class = classes!(
        "row",
        props.task.priority.as_str(),
        props.task.completed.then_some("completed"),
    );
    let toggle_label = if props.task.completed { "Undo" } else { "Complete" };

    html! {
        <li class={class}>
            <div class="text">
                <span class="title">{ &props.task.title }</span>
                <span class="detail">
                    { format!("{} - {} priority", props.task.description, props.task.priority.as_str()) }
                </span>
            </div>
            <button class="edit" onclick={move |_| on_edit.emit(id)}>{ "Edit" }</button>
            <button class="toggle" onclick={move |_| on_toggle.emit(id)}>{ toggle_label }</button>
            <button class="delete" onclick={move |_| on_delete.emit(id)}>{ "Delete" }</button>
        </li>
    }
}
