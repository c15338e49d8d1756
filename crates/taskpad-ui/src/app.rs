use taskpad_core::{Priority, TaskStore};
use yew::{Callback, Html, function_component, html, use_state};

use crate::components::{SearchBar, TaskForm, TaskList};
use crate::storage;

/// Owns the whole store. Every intent from a child component clones the
/// current store, applies the mutation, persists when the task list changed,
/// and swaps the state in. Mutations are synchronous, so each DOM event runs
/// to completion before the next one is handled.
#[function_component(App)]
pub fn app() -> Html {
    let store = use_state(storage::load_store);

    let on_title_change = {
        let store = store.clone();
        Callback::from(move |title: String| {
            let mut next = (*store).clone();
            next.set_draft_title(title);
            store.set(next);
        })
    };

    let on_description_change = {
        let store = store.clone();
        Callback::from(move |description: String| {
            let mut next = (*store).clone();
            next.set_draft_description(description);
            store.set(next);
        })
    };

    let on_priority_change = {
        let store = store.clone();
        Callback::from(move |priority: Priority| {
            let mut next = (*store).clone();
            next.set_draft_priority(priority);
            store.set(next);
        })
    };

    let on_search = {
        let store = store.clone();
        Callback::from(move |term: String| {
            let mut next = (*store).clone();
            next.set_search(term);
            store.set(next);
        })
    };

    let on_submit = {
        let store = store.clone();
        Callback::from(move |_| {
            let mut next = (*store).clone();
            if next.submit() {
                storage::save_store(&next);
            }
            store.set(next);
        })
    };

    let on_toggle = {
        let store = store.clone();
        Callback::from(move |id: u64| {
            let mut next = (*store).clone();
            if next.toggle_completed(id) {
                storage::save_store(&next);
            }
            store.set(next);
        })
    };

    let on_delete = {
        let store = store.clone();
        Callback::from(move |id: u64| {
            let mut next = (*store).clone();
            if next.delete(id) {
                storage::save_store(&next);
            }
            store.set(next);
        })
    };

    let on_edit = {
        let store = store.clone();
        Callback::from(move |id: u64| {
            let mut next = (*store).clone();
            next.start_edit(id);
            store.set(next);
        })
    };

    let visible = store.visible().into_iter().cloned().collect::<Vec<_>>();

    html! {
        <div class="container">
            <SearchBar term={store.search().to_string()} on_search={on_search} />
            <TaskForm
                draft={store.draft().clone()}
                editing={store.is_editing()}
                on_title_change={on_title_change}
                on_description_change={on_description_change}
                on_priority_change={on_priority_change}
                on_submit={on_submit}
            />
            <TaskList
                tasks={visible}
                on_edit={on_edit}
                on_toggle={on_toggle}
                on_delete={on_delete}
            />
        </div>
    }
}
