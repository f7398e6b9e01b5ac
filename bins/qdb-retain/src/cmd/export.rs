use std::path::PathBuf;

use qdb_client::{QdbClient, escape_literal};

use super::config::RetentionConfig;
use super::confirm::{Confirm, ConfirmDefault};
use super::error::RetainError;
use super::select::Partition;

/// Что случилось с одной партицией при экспорте.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    Exported,
    /// Operator declined to overwrite an existing file.
    Skipped,
}

/// Full-row dump of one partition, bounded by its own timestamps.
pub fn export_sql(table: &str, partition: &Partition) -> String {
    format!(
        "SELECT * FROM {} WHERE timestamp BETWEEN '{}' AND '{}';",
        table,
        escape_literal(&partition.min_timestamp),
        escape_literal(&partition.max_timestamp)
    )
}

/// Target file for a partition: `<output_folder>/<table>/<name>.csv`.
pub fn export_path(cfg: &RetentionConfig, partition: &Partition) -> PathBuf {
    cfg.output_folder
        .join(&cfg.table)
        .join(format!("{}.csv", partition.name))
}

/// Exports one partition to its .csv file.
///
/// The overwrite gate runs before any HTTP request: a declined prompt
/// leaves both the file and the network untouched.
pub async fn export_partition(
    client: &QdbClient,
    cfg: &RetentionConfig,
    partition: &Partition,
    gate: &impl Confirm,
) -> Result<ExportOutcome, RetainError> {
    let path = export_path(cfg, partition);
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    if path.exists() {
        let prompt = format!("File {} exists, overwrite? [y/N]: ", path.display());
        if !gate.confirm(&prompt, ConfirmDefault::No) {
            tracing::warn!(partition = %partition.name, "export skipped, file exists");
            return Ok(ExportOutcome::Skipped);
        }
    }

    tracing::info!(partition = %partition.name, path = %path.display(), "exporting partition");
    let body = client.export(&export_sql(&cfg.table, partition)).await?;
    std::fs::write(&path, body)?;
    Ok(ExportOutcome::Exported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::config::TimeUnit;

    fn partition() -> Partition {
        Partition {
            name: "2024-01".into(),
            min_timestamp: "2024-01-01T00:00:00.000000Z".into(),
            max_timestamp: "2024-01-31T23:59:59.999999Z".into(),
        }
    }

    fn config(folder: &std::path::Path) -> RetentionConfig {
        RetentionConfig {
            host: "http://127.0.0.1:9000".into(),
            table: "trades".into(),
            unit: TimeUnit::Day,
            amount: 30,
            output_folder: folder.to_path_buf(),
            export_csv: true,
            drop_enabled: true,
            drop_by_age: false,
            force: false,
        }
    }

    #[test]
    fn export_sql_matches_wire_format() {
        assert_eq!(
            export_sql("trades", &partition()),
            "SELECT * FROM trades WHERE timestamp BETWEEN \
             '2024-01-01T00:00:00.000000Z' AND '2024-01-31T23:59:59.999999Z';"
        );
    }

    #[test]
    fn export_path_nests_under_table() {
        let cfg = config(std::path::Path::new("/data/backups"));
        assert_eq!(
            export_path(&cfg, &partition()),
            PathBuf::from("/data/backups/trades/2024-01.csv")
        );
    }
}
