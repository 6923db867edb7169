use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table { {children} }
        }
    }
}

/// Header row plus an optional row of per-column filter inputs.
#[component]
pub fn DataTableHeader(children: Element, #[props(default)] filters: Option<Element>) -> Element {
    rsx! {
        thead {
            tr { {children} }
            if let Some(filters) = filters {
                tr { class: "data-table-filters", {filters} }
            }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header that sorts on click and shows the active direction.
#[component]
pub fn SortableColumn(
    label: String,
    #[props(default = false)] active: bool,
    #[props(default = false)] descending: bool,
    onsort: EventHandler<()>,
) -> Element {
    let indicator = match (active, descending) {
        (false, _) => "",
        (true, false) => "▲",
        (true, true) => "▼",
    };
    let aria_sort = match (active, descending) {
        (false, _) => "none",
        (true, false) => "ascending",
        (true, true) => "descending",
    };

    rsx! {
        th {
            class: if active { "sortable active" } else { "sortable" },
            "aria-sort": aria_sort,
            onclick: move |_| onsort.call(()),
            "{label}"
            span { class: "sort-indicator", "{indicator}" }
        }
    }
}

/// Text filter for one column, placed in the filter row.
#[component]
pub fn FilterCell(value: String, label: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        th {
            input {
                class: "data-table-filter",
                r#type: "search",
                placeholder: "Filter {label}",
                "aria-label": "Filter {label}",
                value: value,
                oninput: move |evt| on_change.call(evt.value()),
            }
        }
    }
}

#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Full-width row shown when nothing matches.
#[component]
pub fn DataTableEmpty(colspan: usize, message: String) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", "{message}" }
        }
    }
}
