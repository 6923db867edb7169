use dioxus::prelude::*;

/// Left navigation column with a brand header.
#[component]
pub fn Sidebar(brand: String, children: Element, #[props(default)] footer: Option<Element>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        aside { class: "clinic-sidebar",
            div { class: "clinic-sidebar-brand", "{brand}" }
            nav { class: "clinic-sidebar-nav", {children} }
            if let Some(footer) = footer {
                div { class: "clinic-sidebar-footer", {footer} }
            }
        }
    }
}

/// Labelled group of sidebar entries.
#[component]
pub fn SidebarGroup(label: String, children: Element) -> Element {
    rsx! {
        div { class: "clinic-sidebar-group",
            span { class: "clinic-sidebar-group-label", "{label}" }
            ul { class: "clinic-sidebar-menu", {children} }
        }
    }
}

/// One entry; the caller supplies the link inside.
#[component]
pub fn SidebarItem(#[props(default = false)] active: bool, children: Element) -> Element {
    rsx! {
        li {
            class: if active { "clinic-sidebar-item active" } else { "clinic-sidebar-item" },
            "aria-current": if active { "page" } else { "false" },
            {children}
        }
    }
}
