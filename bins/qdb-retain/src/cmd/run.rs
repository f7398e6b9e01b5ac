use qdb_client::QdbClient;

use super::config::RetentionConfig;
use super::confirm::Confirm;
use super::drop::{self, DropOutcome};
use super::error::RetainError;
use super::export::{self, ExportOutcome};
use super::present::Presenter;
use super::select;

/// Один прогон retention: select → export* → drop.
///
/// Список имён для удаления фиксируется в момент выборки; экспортные
/// ошибки его не меняют. Отказ оператора — не ошибка: процесс
/// завершается нулём.
pub async fn run(
    cfg: &RetentionConfig,
    gate: &impl Confirm,
    presenter: &impl Presenter,
) -> Result<(), RetainError> {
    let client = QdbClient::new(&cfg.host);

    let partitions = select::find_expired(&client, cfg, presenter).await?;
    if partitions.is_empty() {
        tracing::info!(table = %cfg.table, "no expired partitions, nothing to do");
        return Ok(());
    }

    // Captured once; export and drop act on the same set.
    let names: Vec<String> = partitions.iter().map(|p| p.name.clone()).collect();

    let mut failed = 0usize;
    if cfg.export_csv {
        for partition in &partitions {
            match export::export_partition(&client, cfg, partition, gate).await {
                Ok(ExportOutcome::Exported | ExportOutcome::Skipped) => {}
                Err(e) => {
                    failed += 1;
                    tracing::error!(partition = %partition.name, error = %e, "export failed");
                }
            }
        }
    }

    if cfg.drop_enabled {
        let outcome = if cfg.drop_by_age {
            drop::drop_by_age(&client, cfg, gate).await?
        } else {
            drop::drop_partitions(&client, cfg, &names, gate).await?
        };
        match outcome {
            DropOutcome::Dropped(res) => {
                tracing::info!(ddl = res.ddl.as_deref().unwrap_or(""), "partitions dropped");
            }
            DropOutcome::Aborted | DropOutcome::Nothing => {}
        }
    }

    if failed > 0 {
        return Err(RetainError::ExportIncomplete {
            failed,
            total: partitions.len(),
        });
    }
    Ok(())
}
