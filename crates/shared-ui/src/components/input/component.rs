use dioxus::prelude::*;

/// Labelled text input with an inline validation message.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "clinic-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "clinic-field",
            if !label.is_empty() {
                label { class: "clinic-field-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(message) = error {
                span { class: "clinic-field-error", role: "alert", "{message}" }
            }
        }
    }
}

/// Multi-line variant of [`Input`] used for notes.
#[component]
pub fn TextArea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] label: String,
    #[props(default = 3)] rows: u32,
    #[props(default)] error: Option<String>,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "clinic-field",
            if !label.is_empty() {
                label { class: "clinic-field-label", "{label}" }
            }
            textarea {
                class: "clinic-input",
                rows: "{rows}",
                value: value,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(message) = error {
                span { class: "clinic-field-error", role: "alert", "{message}" }
            }
        }
    }
}
