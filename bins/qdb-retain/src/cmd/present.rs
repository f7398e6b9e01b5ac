use qdb_client::Column;

/// Вывод результата запроса оператору. Сменная точка: сюда можно
/// подставить и более нарядный рендер, workflow этого не заметит.
pub trait Presenter {
    fn present(&self, columns: &[Column], dataset: &[Vec<serde_json::Value>]);
}

/// Width-aligned plain columnar printout, no table library.
pub struct PlainPresenter;

impl Presenter for PlainPresenter {
    fn present(&self, columns: &[Column], dataset: &[Vec<serde_json::Value>]) {
        for line in render(columns, dataset) {
            println!("{line}");
        }
        println!();
    }
}

fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Renders header, separator and rows with per-column padding.
fn render(columns: &[Column], dataset: &[Vec<serde_json::Value>]) -> Vec<String> {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.name.len()).collect();
    let rows: Vec<Vec<String>> = dataset
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            } else if i >= widths.len() {
                widths.push(cell.len());
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:<w$}", c.name, w = widths[i]))
        .collect();
    lines.push(header.join("  ").trim_end().to_string());
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:<w$}", c, w = widths.get(i).copied().unwrap_or(0)))
            .collect();
        lines.push(cells.join("  ").trim_end().to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str) -> Column {
        serde_json::from_value(serde_json::json!({"name": name, "type": "STRING"})).unwrap()
    }

    #[test]
    fn renders_aligned_columns() {
        let columns = vec![col("name"), col("minTimestamp")];
        let dataset = vec![
            vec![
                serde_json::json!("2024-01"),
                serde_json::json!("2024-01-01T00:00:00.000000Z"),
            ],
            vec![serde_json::json!("x"), serde_json::json!("t")],
        ];
        let lines = render(&columns, &dataset);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "name     minTimestamp");
        assert!(lines[1].starts_with("-------  "));
        assert_eq!(lines[2], "2024-01  2024-01-01T00:00:00.000000Z");
        assert_eq!(lines[3], "x        t");
    }

    #[test]
    fn non_string_cells_are_printed_verbatim() {
        assert_eq!(cell_text(&serde_json::json!(42)), "42");
        assert_eq!(cell_text(&serde_json::json!(null)), "");
        assert_eq!(cell_text(&serde_json::json!("s")), "s");
    }
}
