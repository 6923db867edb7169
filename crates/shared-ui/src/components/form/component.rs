use dioxus::prelude::*;

/// Form wrapper that prevents the browser's default submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "clinic-form", None, false),
        Attribute::new("novalidate", true, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Form-level error banner.
#[component]
pub fn FormAlert(message: String) -> Element {
    rsx! {
        div { class: "clinic-form-alert", role: "alert", "{message}" }
    }
}

/// Form-level success banner.
#[component]
pub fn FormSuccess(children: Element) -> Element {
    rsx! {
        div { class: "clinic-form-success", role: "status", {children} }
    }
}
