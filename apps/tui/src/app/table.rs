// Variable table explorer: visibility filtering and column sorting over the
// typed rows built for one dataset.

use std::cmp::Ordering;

use crate::data::models::Variable;
use crate::domain::SortDirection;

#[derive(Debug, Clone)]
pub struct VariableRow {
    cells: Vec<String>,
    hidden: bool,
}

impl VariableRow {
    fn new(variable: &Variable) -> Self {
        Self {
            cells: variable.cells(),
            hidden: false,
        }
    }

    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map_or("", String::as_str)
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Rows plus one remembered sort direction per column. Filtering only toggles
/// visibility; sorting permutes all rows in place, hidden ones included.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    rows: Vec<VariableRow>,
    directions: Vec<Option<SortDirection>>,
}

impl VariableTable {
    pub fn from_variables(variables: &[Variable]) -> Self {
        Self {
            rows: variables.iter().map(VariableRow::new).collect(),
            directions: vec![None; Variable::COLUMNS.len()],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[VariableRow] {
        &self.rows
    }

    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.hidden).count()
    }

    /// Applied direction of a column, if it has been sorted.
    pub fn direction(&self, column: usize) -> Option<SortDirection> {
        self.directions.get(column).copied().flatten()
    }

    /// Hides rows whose joined cell text does not contain the query,
    /// case-insensitively. Never reorders.
    pub fn apply_filter(&mut self, query: &str) {
        let needle = query.trim().to_lowercase();
        for row in &mut self.rows {
            let text = row.cells.join(" ").to_lowercase();
            row.hidden = !needle.is_empty() && !text.contains(&needle);
        }
    }

    /// Sorts all rows by the cell at `column`. Each column keeps its own
    /// direction: first activation sorts ascending, every further activation
    /// of the same column toggles. The stable sort keeps ties deterministic.
    pub fn sort_by_column(&mut self, column: usize) -> SortDirection {
        let direction = self
            .direction(column)
            .map_or(SortDirection::Ascending, SortDirection::toggled);

        self.rows.sort_by(|a, b| {
            let ordering = compare_cells(a.cell(column), b.cell(column));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        if let Some(slot) = self.directions.get_mut(column) {
            *slot = Some(direction);
        }
        direction
    }
}

/// Numeric when both sides parse fully as numbers, string comparison over
/// trimmed lowercased text otherwise. `total_cmp` keeps the comparator total.
fn compare_cells(a: &str, b: &str) -> Ordering {
    match (parse_number(a), parse_number(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => a.trim().to_lowercase().cmp(&b.trim().to_lowercase()),
    }
}

fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variable(name: &str, label: &str, missing: Option<f64>) -> Variable {
        let mut value = serde_json::json!({
            "name": name,
            "label": label,
            "type": "numeric",
            "unit": "",
        });
        if let Some(rate) = missing {
            value["missing"] = serde_json::json!(rate);
        }
        serde_json::from_value(value).unwrap()
    }

    fn table() -> VariableTable {
        VariableTable::from_variables(&[
            variable("bmi", "Body mass index", Some(12.0)),
            variable("age", "Age at baseline", Some(2.0)),
            variable("sex", "Sex", Some(101.0)),
        ])
    }

    fn names(table: &VariableTable) -> Vec<String> {
        table.rows().iter().map(|row| row.cell(0).to_string()).collect()
    }

    #[test]
    fn filter_toggles_visibility_without_reordering() {
        let mut table = table();
        table.apply_filter("a");
        assert_eq!(names(&table), vec!["bmi", "age", "sex"]);
        assert_eq!(table.visible_count(), 2);

        table.apply_filter("");
        assert_eq!(table.visible_count(), 3);
    }

    #[test]
    fn filter_matches_any_cell_case_insensitively() {
        let mut table = table();
        table.apply_filter("BASELINE");
        assert_eq!(table.visible_count(), 1);
        assert!(!table.rows()[1].is_hidden());
    }

    #[test]
    fn string_sort_is_case_normalized() {
        let mut table = VariableTable::from_variables(&[
            variable("Zeta", "", None),
            variable("alpha", "", None),
            variable("Beta", "", None),
        ]);
        table.sort_by_column(0);
        assert_eq!(names(&table), vec!["alpha", "Beta", "Zeta"]);
    }

    #[test]
    fn numeric_cells_sort_numerically_not_lexically() {
        let mut table = table();
        // Lexical order would put "101" before "12" and "2".
        table.sort_by_column(4);
        assert_eq!(names(&table), vec!["age", "bmi", "sex"]);
    }

    #[test]
    fn mixed_cells_fall_back_to_string_comparison() {
        let mut table = VariableTable::from_variables(&[
            variable("a", "10", None),
            variable("b", "n/a", None),
            variable("c", "2", None),
        ]);
        table.sort_by_column(1);
        // "2" and "10" still compare numerically; "n/a" compares as text.
        assert_eq!(names(&table), vec!["c", "a", "b"]);
    }

    #[test]
    fn sort_is_a_permutation() {
        let mut table = table();
        table.sort_by_column(1);
        let mut sorted = names(&table);
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["age", "bmi", "sex"]);
    }

    #[test]
    fn reactivating_a_column_toggles_to_the_exact_reverse() {
        let mut table = table();
        assert_eq!(table.sort_by_column(0), SortDirection::Ascending);
        let ascending = names(&table);

        assert_eq!(table.sort_by_column(0), SortDirection::Descending);
        let descending = names(&table);

        let mut reversed = ascending;
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn each_column_remembers_its_own_direction() {
        let mut table = table();
        assert_eq!(table.sort_by_column(0), SortDirection::Ascending);
        // A different column starts fresh rather than inheriting the toggle.
        assert_eq!(table.sort_by_column(4), SortDirection::Ascending);
        // Returning to the first column still toggles it.
        assert_eq!(table.sort_by_column(0), SortDirection::Descending);
        assert_eq!(table.direction(4), Some(SortDirection::Ascending));
    }

    #[test]
    fn hidden_rows_stay_hidden_through_sorting() {
        let mut table = table();
        table.apply_filter("sex");
        assert_eq!(table.visible_count(), 1);

        table.sort_by_column(0);
        assert_eq!(table.visible_count(), 1);
        let hidden: Vec<_> = table
            .rows()
            .iter()
            .filter(|row| row.is_hidden())
            .map(|row| row.cell(0).to_string())
            .collect();
        assert_eq!(hidden, vec!["age", "bmi"]);
    }

    #[test]
    fn empty_table_is_inert() {
        let mut table = VariableTable::default();
        table.apply_filter("x");
        table.sort_by_column(0);
        assert!(table.is_empty());
        assert_eq!(table.direction(0), None);
    }
}
