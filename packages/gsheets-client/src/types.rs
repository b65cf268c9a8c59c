use serde::Deserialize;
use serde_json::Value;

/// A block of cell values returned by the values.get endpoint.
///
/// The API omits `values` entirely for an empty range, and trailing
/// empty cells within a row are not padded.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl ValueRange {
    /// Flatten the returned cells into rows of strings.
    ///
    /// With the default FORMATTED_VALUE render option every cell is
    /// already a JSON string; any other value kind is rendered through
    /// its display form so numeric cells never panic.
    pub fn into_string_rows(self) -> Vec<Vec<String>> {
        self.values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect()
    }
}

fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Response body from the values.update endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    pub spreadsheet_id: String,
    #[serde(default)]
    pub updated_range: Option<String>,
    #[serde(default)]
    pub updated_rows: u64,
    #[serde(default)]
    pub updated_columns: u64,
    #[serde(default)]
    pub updated_cells: u64,
}

/// Response body from the values.clear endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearValuesResponse {
    pub spreadsheet_id: String,
    #[serde(default)]
    pub cleared_range: Option<String>,
}

/// Spreadsheet metadata, restricted to the sheet list.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SpreadsheetMeta {
    #[serde(default)]
    pub sheets: Vec<SheetMeta>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SheetMeta {
    pub properties: SheetProperties,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SheetProperties {
    pub title: String,
    #[serde(default)]
    pub index: u64,
}
