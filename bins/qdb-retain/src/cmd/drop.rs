use qdb_client::{ExecOptions, ExecResponse, QdbClient, escape_literal};

use super::config::{RetentionConfig, TimeUnit};
use super::confirm::{Confirm, ConfirmDefault};
use super::error::RetainError;

/// Результат шага удаления.
#[derive(Debug)]
pub enum DropOutcome {
    Dropped(ExecResponse),
    /// Operator declined the confirmation; nothing was sent.
    Aborted,
    /// Empty selection, no statement to issue.
    Nothing,
}

/// One batched statement for the whole name list, selection order kept.
pub fn drop_list_sql(table: &str, names: &[String]) -> String {
    let list = names
        .iter()
        .map(|n| format!("'{}'", escape_literal(n)))
        .collect::<Vec<_>>()
        .join(",");
    format!("ALTER TABLE {table} DROP PARTITION LIST {list};")
}

/// Age-predicate form: the server evaluates the cutoff at drop time.
pub fn drop_by_age_sql(table: &str, unit: TimeUnit, amount: u32) -> String {
    format!(
        "ALTER TABLE {table} DROP PARTITION WHERE timestamp < dateadd('{unit}', -{amount}, now());"
    )
}

/// Drops the given partitions in a single all-or-nothing batch.
pub async fn drop_partitions(
    client: &QdbClient,
    cfg: &RetentionConfig,
    names: &[String],
    gate: &impl Confirm,
) -> Result<DropOutcome, RetainError> {
    if names.is_empty() {
        return Ok(DropOutcome::Nothing);
    }

    let sql = drop_list_sql(&cfg.table, names);
    tracing::info!(count = names.len(), table = %cfg.table, sql = %sql, "dropping partitions");
    if !gate.confirm(
        "Are you sure you want to drop these partitions? [y/N]: ",
        ConfirmDefault::No,
    ) {
        tracing::warn!("drop aborted by operator");
        return Ok(DropOutcome::Aborted);
    }

    let res = client.exec(&sql, &ExecOptions::default()).await?;
    Ok(DropOutcome::Dropped(res))
}

/// Drops every partition older than the retention window, server-side.
pub async fn drop_by_age(
    client: &QdbClient,
    cfg: &RetentionConfig,
    gate: &impl Confirm,
) -> Result<DropOutcome, RetainError> {
    let sql = drop_by_age_sql(&cfg.table, cfg.unit, cfg.amount);
    tracing::info!(table = %cfg.table, sql = %sql, "dropping partitions by age");
    if !gate.confirm(
        "Are you sure you want to drop all partitions older than the window? [y/N]: ",
        ConfirmDefault::No,
    ) {
        tracing::warn!("drop aborted by operator");
        return Ok(DropOutcome::Aborted);
    }

    let res = client.exec(&sql, &ExecOptions::default()).await?;
    Ok(DropOutcome::Dropped(res))
}
