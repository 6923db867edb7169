//! Client-side filtering, sorting and pagination for data tables.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::Appointment;
use crate::role::Role;

/// Page sizes offered by the rows-per-page selector.
pub const ROWS_PER_PAGE_OPTIONS: &[usize] = &[5, 10, 25];
pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// A single rendered cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(i64),
}

impl CellValue {
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
        }
    }

    fn matches(&self, filter: &str) -> bool {
        match self {
            CellValue::Text(s) => s.to_lowercase().contains(&filter.to_lowercase()),
            CellValue::Number(n) => filter.trim().parse::<i64>().is_ok_and(|f| f == *n),
        }
    }

    fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (CellValue::Number(_), CellValue::Text(_)) => Ordering::Less,
            (CellValue::Text(_), CellValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// A row type that can be shown in a data table.
pub trait TableRow {
    fn cell(&self, column: &str) -> CellValue;
}

/// Column header definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

const fn col(key: &'static str, label: &'static str) -> Column {
    Column { key, label }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// View-state of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub sort_column: Option<String>,
    pub sort_direction: SortDirection,
    pub filters: BTreeMap<String, String>,
    pub page: usize,
    pub rows_per_page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sort_column: None,
            sort_direction: SortDirection::Ascending,
            filters: BTreeMap::new(),
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

/// One page of rows after filtering and sorting.
#[derive(Debug, PartialEq)]
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    /// Rows matching the filters, across all pages.
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}

impl TableState {
    pub fn sorted_by(column: &str) -> Self {
        Self {
            sort_column: Some(column.to_string()),
            ..Self::default()
        }
    }

    /// Header click: toggle the active column, or start a new one ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        if self.sort_column.as_deref() == Some(column) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_column = Some(column.to_string());
            self.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn set_filter(&mut self, column: &str, value: &str) {
        if value.trim().is_empty() {
            self.filters.remove(column);
        } else {
            self.filters.insert(column.to_string(), value.to_string());
        }
        self.page = 0;
    }

    pub fn filter(&self, column: &str) -> &str {
        self.filters.get(column).map(String::as_str).unwrap_or("")
    }

    /// Change page size. Sizes outside the offered options are ignored.
    pub fn set_rows_per_page(&mut self, rows: usize) -> bool {
        if !ROWS_PER_PAGE_OPTIONS.contains(&rows) {
            return false;
        }
        self.rows_per_page = rows;
        self.page = 0;
        true
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn apply<'a, R: TableRow>(&self, rows: &'a [R]) -> TableView<'a, R> {
        let mut matching: Vec<&R> = rows
            .iter()
            .filter(|row| {
                self.filters
                    .iter()
                    .all(|(column, filter)| row.cell(column).matches(filter))
            })
            .collect();

        if let Some(column) = self.sort_column.as_deref() {
            matching.sort_by(|a, b| {
                let ord = a.cell(column).compare(&b.cell(column));
                match self.sort_direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        let total = matching.len();
        let per_page = self.rows_per_page.max(1);
        let page_count = total.div_ceil(per_page).max(1);
        let page = self.page.min(page_count - 1);

        let rows = matching
            .into_iter()
            .skip(page * per_page)
            .take(per_page)
            .collect();

        TableView {
            rows,
            total,
            page,
            page_count,
        }
    }
}

pub const APPOINTMENT_ID: Column = col("id", "ID");
pub const PATIENT_NAME: Column = col("patient_name", "Patient Name");
pub const DENTIST_NAME: Column = col("dentist_name", "Dentist Name");
pub const APPOINTMENT_TYPE: Column = col("appointment_type", "Type");
pub const REASON: Column = col("reason_for_visit", "Reason");
pub const DATE: Column = col("appointment_date", "Date");
pub const TIME: Column = col("appointment_time", "Time");
pub const STATUS: Column = col("status", "Status");
pub const CREATED_AT: Column = col("created_at", "Created At");
pub const DENTIST_NOTES: Column = col("notes", "Dentist Notes");

const STAFF_COLUMNS: &[Column] = &[
    APPOINTMENT_ID,
    PATIENT_NAME,
    DENTIST_NAME,
    APPOINTMENT_TYPE,
    REASON,
    DATE,
    TIME,
    STATUS,
    CREATED_AT,
];

const DENTIST_COLUMNS: &[Column] = &[
    APPOINTMENT_ID,
    PATIENT_NAME,
    APPOINTMENT_TYPE,
    REASON,
    DATE,
    TIME,
    STATUS,
    DENTIST_NOTES,
];

const PATIENT_COLUMNS: &[Column] = &[
    APPOINTMENT_ID,
    DENTIST_NAME,
    APPOINTMENT_TYPE,
    REASON,
    DATE,
    TIME,
    STATUS,
];

/// Appointment columns visible to `role`.
pub fn appointment_columns(role: Role) -> &'static [Column] {
    match role {
        Role::Admin | Role::Receptionist => STAFF_COLUMNS,
        Role::Dentist => DENTIST_COLUMNS,
        Role::Patient => PATIENT_COLUMNS,
    }
}

impl TableRow for Appointment {
    fn cell(&self, column: &str) -> CellValue {
        let text = |s: &str| CellValue::Text(s.to_string());
        match column {
            "id" => CellValue::Number(self.id),
            "patient_name" => text(self.patient_name()),
            "dentist_name" => text(self.dentist_name()),
            "appointment_type" => text(self.appointment_type.display_name()),
            "reason_for_visit" => text(&self.reason_for_visit),
            "appointment_date" => text(&self.appointment_date),
            "appointment_time" => text(&self.appointment_time),
            "status" => text(&self.status),
            "created_at" => text(&self.created_at),
            "notes" => text(self.notes.as_deref().unwrap_or("")),
            _ => text(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Row {
        id: i64,
        name: &'static str,
    }

    impl TableRow for Row {
        fn cell(&self, column: &str) -> CellValue {
            match column {
                "id" => CellValue::Number(self.id),
                _ => CellValue::Text(self.name.to_string()),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 3, name: "carol" },
            Row { id: 1, name: "Alice" },
            Row { id: 12, name: "bob" },
            Row { id: 2, name: "alan" },
            Row { id: 7, name: "Dave" },
            Row { id: 5, name: "erin" },
            Row { id: 9, name: "Al" },
        ]
    }

    fn ids<R: TableRow>(view: &TableView<'_, R>) -> Vec<i64> {
        view.rows
            .iter()
            .map(|r| match r.cell("id") {
                CellValue::Number(n) => n,
                CellValue::Text(_) => -1,
            })
            .collect()
    }

    #[test]
    fn numeric_sort_and_toggle() {
        let data = rows();
        let mut state = TableState::sorted_by("id");
        state.set_rows_per_page(10);
        assert_eq!(ids(&state.apply(&data)), vec![1, 2, 3, 5, 7, 9, 12]);
        state.toggle_sort("id");
        assert_eq!(state.sort_direction, SortDirection::Descending);
        assert_eq!(ids(&state.apply(&data)), vec![12, 9, 7, 5, 3, 2, 1]);
    }

    #[test]
    fn new_sort_column_starts_ascending() {
        let mut state = TableState::sorted_by("id");
        state.toggle_sort("id");
        state.toggle_sort("name");
        assert_eq!(state.sort_column.as_deref(), Some("name"));
        assert_eq!(state.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn text_filter_is_case_insensitive_substring() {
        let data = rows();
        let mut state = TableState::sorted_by("id");
        state.set_filter("name", "AL");
        let view = state.apply(&data);
        assert_eq!(ids(&view), vec![1, 2, 9]);
        assert_eq!(view.total, 3);
    }

    #[test]
    fn number_filter_is_exact() {
        let data = rows();
        let mut state = TableState::default();
        state.set_filter("id", "1");
        assert_eq!(ids(&state.apply(&data)), vec![1]);
        state.set_filter("id", "x");
        assert_eq!(state.apply(&data).total, 0);
    }

    #[test]
    fn pagination_defaults_to_five_rows() {
        let data = rows();
        let mut state = TableState::sorted_by("id");
        let first = state.apply(&data);
        assert_eq!(first.rows.len(), 5);
        assert_eq!(first.page_count, 2);
        state.set_page(1);
        assert_eq!(ids(&state.apply(&data)), vec![9, 12]);
    }

    #[test]
    fn filter_or_page_size_change_resets_page() {
        let mut state = TableState::default();
        state.set_page(3);
        state.set_filter("name", "a");
        assert_eq!(state.page, 0);
        state.set_page(2);
        assert!(state.set_rows_per_page(25));
        assert_eq!(state.page, 0);
        assert!(!state.set_rows_per_page(7));
        assert_eq!(state.rows_per_page, 25);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let data = rows();
        let mut state = TableState::sorted_by("id");
        state.set_page(40);
        let view = state.apply(&data);
        assert_eq!(view.page, 1);
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn empty_input_has_one_empty_page() {
        let data: Vec<Row> = vec![];
        let view = TableState::default().apply(&data);
        assert_eq!(view.total, 0);
        assert_eq!(view.page_count, 1);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn column_sets_per_role() {
        let labels = |role| -> Vec<&str> {
            appointment_columns(role).iter().map(|c| c.label).collect()
        };
        assert_eq!(
            labels(Role::Patient),
            vec!["ID", "Dentist Name", "Type", "Reason", "Date", "Time", "Status"]
        );
        assert!(labels(Role::Dentist).contains(&"Dentist Notes"));
        assert!(!labels(Role::Dentist).contains(&"Dentist Name"));
        assert_eq!(labels(Role::Admin), labels(Role::Receptionist));
        assert_eq!(labels(Role::Admin).last(), Some(&"Created At"));
    }

    #[test]
    fn appointment_cells() {
        let a: Appointment = serde_json::from_str(
            r#"{"id": 4, "appointment_date": "2025-02-01", "appointment_type": "consultation"}"#,
        )
        .unwrap();
        assert_eq!(a.cell("id"), CellValue::Number(4));
        assert_eq!(a.cell("patient_name"), CellValue::Text("N/A".into()));
        assert_eq!(a.cell("appointment_type").display(), "Consultation");
        assert_eq!(a.cell("notes").display(), "");
    }
}
