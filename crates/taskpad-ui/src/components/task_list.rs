use taskpad_core::Task;
use yew::{Callback, Html, Properties, function_component, html};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub tasks: Vec<Task>,
    pub on_edit: Callback<u64>,
    pub on_toggle: Callback<u64>,
    pub on_delete: Callback<u64>,
}

#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    html! {
        <ul class="task-list">
            {
                for props.tasks.iter().cloned().map(|task| html! {
                    <TaskListRow
                        task={task}
                        on_edit={props.on_edit.clone()}
                        on_toggle={props.on_toggle.clone()}
                        on_delete={props.on_delete.clone()}
                    />
                })
            }
        </ul>
    }
}
