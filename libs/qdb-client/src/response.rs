use serde::Deserialize;

// ════════════════════════════════════════════════════════════════
//  /exec response envelope
// ════════════════════════════════════════════════════════════════

/// Колонка результата: имя + тип QuestDB ("STRING", "TIMESTAMP", ...).
#[derive(Debug, Clone, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

/// JSON envelope returned by `/exec`.
///
/// SELECT responses carry `columns` + `dataset` (+ `count` when requested);
/// DDL statements such as ALTER TABLE answer with `{"ddl":"OK"}` and none
/// of the dataset fields, hence the defaults and options.
#[derive(Debug, Deserialize)]
pub struct ExecResponse {
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub dataset: Vec<Vec<serde_json::Value>>,
    pub count: Option<u64>,
    pub ddl: Option<String>,
}
