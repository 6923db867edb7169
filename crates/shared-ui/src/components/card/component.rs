use dioxus::prelude::*;

/// Bordered panel used to group page content.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "clinic-card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            {children}
        }
    }
}

/// Card heading with an optional trailing action.
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default)] action: Option<Element>,
) -> Element {
    rsx! {
        header { class: "clinic-card-header",
            div {
                h3 { class: "clinic-card-title", "{title}" }
                if let Some(text) = description {
                    p { class: "clinic-card-description", "{text}" }
                }
            }
            if let Some(action) = action {
                div { class: "clinic-card-action", {action} }
            }
        }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "clinic-card-content", {children} }
    }
}
