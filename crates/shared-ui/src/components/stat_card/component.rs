use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "neutral",
            StatTone::Info => "info",
            StatTone::Success => "success",
            StatTone::Warning => "warning",
            StatTone::Danger => "danger",
        }
    }
}

/// Single headline number on a dashboard.
#[component]
pub fn StatCard(label: String, value: String, #[props(default)] tone: StatTone) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card", "data-tone": tone.class(),
            span { class: "stat-card-label", "{label}" }
            span { class: "stat-card-value", "{value}" }
        }
    }
}

/// Responsive row of stat cards.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-grid", {children} }
    }
}
