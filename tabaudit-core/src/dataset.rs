//! In-memory tabular dataset model.
//!
//! This module defines the rectangular dataset the audit scanners operate
//! on: named columns of equal length, each holding typed cell values with a
//! distinguished missing marker. Column kind (numeric vs. other) is inferred
//! once at construction; a dataset is immutable afterwards, so scanners can
//! share it freely without locking.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};

/// A single cell in a dataset.
///
/// Variant order matters for untagged deserialization: JSON numbers map to
/// `Int` when integral and `Float` otherwise, `null` maps to `Missing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Text value
    Text(String),
    /// The distinguished missing marker, distinct from every present value
    Missing,
}

impl CellValue {
    /// Returns true if this cell is the missing marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Returns true if this cell holds a present numeric value.
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Int(_) | CellValue::Float(_))
    }

    /// Returns the numeric value of this cell, widening integers to f64.
    ///
    /// Missing and non-numeric cells return `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => CellValue::Missing,
        }
    }
}

/// Declared kind of a column, fixed at dataset construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Every present value is an integer or float
    Numeric,
    /// At least one present value is non-numeric
    Other,
}

/// Infers the kind of a column from its values.
///
/// A column is numeric when every present value is `Int` or `Float`;
/// missing markers do not affect the classification, so an all-missing
/// column is (vacuously) numeric.
fn infer_kind(values: &[CellValue]) -> ColumnKind {
    let all_numeric = values
        .iter()
        .all(|value| value.is_numeric() || value.is_missing());
    if all_numeric {
        ColumnKind::Numeric
    } else {
        ColumnKind::Other
    }
}

/// A named column of cell values with an inferred kind.
///
/// Columns are only created through [`Dataset`] construction, which
/// guarantees name uniqueness and equal lengths across the dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    name: String,
    kind: ColumnKind,
    values: Vec<CellValue>,
}

impl Column {
    fn new(name: String, values: Vec<CellValue>) -> Self {
        let kind = infer_kind(&values);
        Self { name, kind, values }
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the inferred column kind.
    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// Returns the cell values in row order.
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    /// Returns the number of cells (the dataset row count).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if the column kind is numeric.
    pub fn is_numeric(&self) -> bool {
        self.kind == ColumnKind::Numeric
    }

    /// Counts cells holding the missing marker.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }
}

/// An immutable rectangular dataset: uniquely named columns of equal length.
///
/// Scanners borrow a dataset for the duration of one audit call and never
/// mutate it. Serialization is one-way; reconstructing a dataset goes
/// through [`Dataset::from_columns`] so the rectangularity invariant cannot
/// be bypassed.
///
/// # Example
///
/// ```rust
/// use tabaudit_core::{CellValue, Dataset};
///
/// let dataset = Dataset::from_columns([
///     ("age", vec![CellValue::Int(34), CellValue::Missing]),
///     ("name", vec![CellValue::from("Ada"), CellValue::from("Grace")]),
/// ])?;
///
/// assert_eq!(dataset.row_count(), 2);
/// assert_eq!(dataset.column_names(), vec!["age", "name"]);
/// # Ok::<(), tabaudit_core::AuditError>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Constructs a dataset from named columns of cell values.
    ///
    /// Column order is preserved. Fails with [`AuditError::InvalidInput`]
    /// when two columns share a name or lengths differ.
    pub fn from_columns<N, I>(columns: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<CellValue>)>,
    {
        let mut built: Vec<Column> = Vec::new();
        let mut seen_names: HashSet<String> = HashSet::new();
        let mut row_count: Option<usize> = None;

        for (name, values) in columns {
            let name = name.into();
            if !seen_names.insert(name.clone()) {
                return Err(AuditError::invalid_input(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }

            match row_count {
                None => row_count = Some(values.len()),
                Some(expected) if values.len() != expected => {
                    return Err(AuditError::invalid_input(format!(
                        "column '{}' has {} rows, expected {}",
                        name,
                        values.len(),
                        expected
                    )));
                }
                Some(_) => {}
            }

            built.push(Column::new(name, values));
        }

        let row_count = row_count.unwrap_or(0);
        tracing::trace!(
            "constructed dataset with {} columns and {} rows",
            built.len(),
            row_count
        );

        Ok(Self {
            columns: built,
            row_count,
        })
    }

    /// Constructs a dataset from row-major data.
    ///
    /// Convenience for loaders that produce one record at a time. Every row
    /// must have exactly one cell per column name; a ragged row fails with
    /// [`AuditError::InvalidInput`].
    pub fn from_rows<N>(
        names: impl IntoIterator<Item = N>,
        rows: impl IntoIterator<Item = Vec<CellValue>>,
    ) -> Result<Self>
    where
        N: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut columns: Vec<Vec<CellValue>> = names.iter().map(|_| Vec::new()).collect();

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != names.len() {
                return Err(AuditError::invalid_input(format!(
                    "row {} has {} cells, expected {}",
                    index,
                    row.len(),
                    names.len()
                )));
            }
            for (column, cell) in columns.iter_mut().zip(row) {
                column.push(cell);
            }
        }

        Self::from_columns(names.into_iter().zip(columns))
    }

    /// Returns the columns in construction order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column names in construction order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Iterates over the numeric-kind subset of columns.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_numeric())
    }

    /// Returns the number of rows shared by every column.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from(42i64), CellValue::Int(42));
        assert_eq!(CellValue::from(2.5), CellValue::Float(2.5));
        assert_eq!(CellValue::from(true), CellValue::Bool(true));
        assert_eq!(CellValue::from("abc"), CellValue::Text("abc".to_string()));
        assert_eq!(CellValue::from(None::<i64>), CellValue::Missing);
        assert_eq!(CellValue::from(Some(7i64)), CellValue::Int(7));
    }

    #[test]
    fn test_cell_value_as_f64() {
        assert_eq!(CellValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(CellValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(CellValue::Bool(true).as_f64(), None);
        assert_eq!(CellValue::Text("1.5".to_string()).as_f64(), None);
        assert_eq!(CellValue::Missing.as_f64(), None);
    }

    #[test]
    fn test_cell_value_untagged_serde() {
        let cells = vec![
            CellValue::Int(1),
            CellValue::Float(2.5),
            CellValue::Bool(false),
            CellValue::Text("x".to_string()),
            CellValue::Missing,
        ];

        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"[1,2.5,false,"x",null]"#);

        let parsed: Vec<CellValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cells);
    }

    #[test]
    fn test_kind_inference_numeric() {
        let values = vec![CellValue::Int(1), CellValue::Float(2.5), CellValue::Missing];
        assert_eq!(infer_kind(&values), ColumnKind::Numeric);
    }

    #[test]
    fn test_kind_inference_other() {
        // A single present non-numeric value makes the whole column Other
        let values = vec![
            CellValue::Int(1),
            CellValue::Text("oops".to_string()),
            CellValue::Missing,
        ];
        assert_eq!(infer_kind(&values), ColumnKind::Other);
    }

    #[test]
    fn test_kind_inference_bool_is_other() {
        let values = vec![CellValue::Bool(true), CellValue::Bool(false)];
        assert_eq!(infer_kind(&values), ColumnKind::Other);
    }

    #[test]
    fn test_kind_inference_all_missing() {
        // No present value contradicts numeric, so the column stays numeric
        let values = vec![CellValue::Missing, CellValue::Missing];
        assert_eq!(infer_kind(&values), ColumnKind::Numeric);
    }

    #[test]
    fn test_dataset_construction() {
        let dataset = Dataset::from_columns([
            ("id", vec![CellValue::Int(1), CellValue::Int(2)]),
            (
                "name",
                vec![CellValue::from("Alice"), CellValue::from("Bob")],
            ),
        ])
        .unwrap();

        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.column_count(), 2);
        assert_eq!(dataset.column_names(), vec!["id", "name"]);
        assert!(dataset.column("id").unwrap().is_numeric());
        assert!(!dataset.column("name").unwrap().is_numeric());
        assert!(dataset.column("missing_column").is_none());
    }

    #[test]
    fn test_dataset_empty() {
        let dataset = Dataset::from_columns(Vec::<(String, Vec<CellValue>)>::new()).unwrap();

        assert_eq!(dataset.row_count(), 0);
        assert_eq!(dataset.column_count(), 0);
        assert!(dataset.column_names().is_empty());
    }

    #[test]
    fn test_dataset_rejects_ragged_columns() {
        let result = Dataset::from_columns([
            ("a", vec![CellValue::Int(1), CellValue::Int(2)]),
            ("b", vec![CellValue::Int(3)]),
        ]);

        assert!(matches!(result, Err(AuditError::InvalidInput { .. })));
    }

    #[test]
    fn test_dataset_rejects_duplicate_names() {
        let result = Dataset::from_columns([
            ("a", vec![CellValue::Int(1)]),
            ("a", vec![CellValue::Int(2)]),
        ]);

        assert!(matches!(result, Err(AuditError::InvalidInput { .. })));
    }

    #[test]
    fn test_dataset_from_rows() {
        let dataset = Dataset::from_rows(
            ["id", "score"],
            vec![
                vec![CellValue::Int(1), CellValue::Float(0.5)],
                vec![CellValue::Int(2), CellValue::Missing],
            ],
        )
        .unwrap();

        assert_eq!(dataset.row_count(), 2);
        assert_eq!(
            dataset.column("score").unwrap().values(),
            &[CellValue::Float(0.5), CellValue::Missing]
        );
    }

    #[test]
    fn test_dataset_from_rows_rejects_ragged_row() {
        let result = Dataset::from_rows(
            ["id", "score"],
            vec![
                vec![CellValue::Int(1), CellValue::Float(0.5)],
                vec![CellValue::Int(2)],
            ],
        );

        assert!(matches!(result, Err(AuditError::InvalidInput { .. })));
    }

    #[test]
    fn test_numeric_columns_subset() {
        let dataset = Dataset::from_columns([
            ("age", vec![CellValue::Int(30)]),
            ("name", vec![CellValue::from("Ada")]),
            ("height", vec![CellValue::Float(1.7)]),
        ])
        .unwrap();

        let numeric: Vec<&str> = dataset.numeric_columns().map(Column::name).collect();
        assert_eq!(numeric, vec!["age", "height"]);
    }

    #[test]
    fn test_column_missing_count() {
        let dataset = Dataset::from_columns([(
            "value",
            vec![
                CellValue::Int(1),
                CellValue::Missing,
                CellValue::Missing,
                CellValue::Float(4.0),
            ],
        )])
        .unwrap();

        assert_eq!(dataset.column("value").unwrap().missing_count(), 2);
        assert_eq!(dataset.column("value").unwrap().len(), 4);
    }

    #[test]
    fn test_dataset_serializes() {
        let dataset = Dataset::from_columns([("v", vec![CellValue::Int(1), CellValue::Missing])])
            .unwrap();

        let json = serde_json::to_value(&dataset).unwrap();
        assert_eq!(json["row_count"], 2);
        assert_eq!(json["columns"][0]["name"], "v");
        assert_eq!(json["columns"][0]["kind"], "numeric");
        assert_eq!(json["columns"][0]["values"][1], serde_json::Value::Null);
    }
}
