use dioxus::prelude::*;

/// Native `<select>` styled to match [`crate::Input`].
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "clinic-select-field",
            if !label.is_empty() {
                label { class: "clinic-select-label", "{label}" }
            }
            select {
                class: "clinic-select",
                value: value,
                disabled: disabled,
                "aria-invalid": invalid,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
            if let Some(message) = error {
                span { class: "clinic-select-error", role: "alert", "{message}" }
            }
        }
    }
}
