use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Danger => "danger",
        }
    }

    /// Variant for an appointment status string.
    pub fn for_status(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "completed" => BadgeVariant::Success,
            "scheduled" | "pending" => BadgeVariant::Primary,
            "cancelled" | "canceled" => BadgeVariant::Danger,
            "missed" | "no-show" => BadgeVariant::Warning,
            _ => BadgeVariant::Secondary,
        }
    }
}

/// Inline pill for roles and statuses.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "clinic-badge", None, false),
        Attribute::new("data-variant", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Badge coloured by appointment status.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let variant = BadgeVariant::for_status(&status);
    let text = if status.trim().is_empty() { "Unknown".to_string() } else { status };
    rsx! {
        Badge { variant, "{text}" }
    }
}
