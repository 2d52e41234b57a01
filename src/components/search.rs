use crate::components::{AppContext, Icon};
use dioxus::prelude::*;

#[component]
pub fn QueryForm() -> Element {
    let ctx = use_context::<AppContext>();
    let mut query_text = ctx.query_text;

    let on_submit = {
        let ctx = ctx.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            ctx.search(query_text.peek().clone());
        }
    };

    rsx! {
        form { id: "queryForm", onsubmit: on_submit,
            Icon { name: "search".to_string(), class: "icon".to_string() }
            input {
                id: "query",
                r#type: "search",
                placeholder: "Search the library",
                autocomplete: "off",
                value: query_text,
                oninput: move |e| query_text.set(e.value()),
            }
        }
    }
}
