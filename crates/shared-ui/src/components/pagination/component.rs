use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Page controls for a client-side paginated table.
///
/// `page` is zero-based. The rows-per-page selector offers `page_sizes`.
#[component]
pub fn TablePagination(
    page: usize,
    page_count: usize,
    total: usize,
    rows_per_page: usize,
    page_sizes: Vec<usize>,
    on_page: EventHandler<usize>,
    on_rows_per_page: EventHandler<usize>,
) -> Element {
    let page_count = page_count.max(1);
    let first_row = if total == 0 { 0 } else { page * rows_per_page + 1 };
    let last_row = ((page + 1) * rows_per_page).min(total);
    let page_number = page + 1;
    let at_last = page_number >= page_count;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            label { class: "pagination-size",
                "Rows per page"
                select {
                    value: "{rows_per_page}",
                    onchange: move |evt| {
                        if let Ok(size) = evt.value().parse::<usize>() {
                            on_rows_per_page.call(size);
                        }
                    },
                    for size in page_sizes {
                        option { value: "{size}", selected: size == rows_per_page, "{size}" }
                    }
                }
            }
            span { class: "pagination-info", "{first_row}-{last_row} of {total}" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: page == 0,
                onclick: move |_| on_page.call(page.saturating_sub(1)),
                "Previous"
            }
            span { class: "pagination-page", "Page {page_number} of {page_count}" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: at_last,
                onclick: move |_| on_page.call(page + 1),
                "Next"
            }
        }
    }
}
