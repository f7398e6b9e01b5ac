use qdb_client::{ExecOptions, QdbClient, escape_literal};

use super::config::{RetentionConfig, TimeUnit};
use super::error::RetainError;
use super::present::Presenter;

/// Партиция таблицы: имя и временные границы, как их вернул сервер.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub name: String,
    pub min_timestamp: String,
    pub max_timestamp: String,
}

/// Selection query over table_partitions(); row cap matches the fetch
/// limit passed alongside.
pub fn selection_sql(table: &str, unit: TimeUnit, amount: u32) -> String {
    format!(
        "SELECT name,minTimestamp,maxTimestamp FROM table_partitions('{}') \
         WHERE minTimestamp <= dateadd('{}',-{},now());",
        escape_literal(table),
        unit,
        amount
    )
}

/// Finds partitions older than the retention window.
///
/// The returned list is the single source of truth for the rest of the
/// run: both export and drop act on it, nothing is re-queried. An empty
/// list means "nothing to do", not an error. The result set is shown to
/// the operator before returning.
pub async fn find_expired(
    client: &QdbClient,
    cfg: &RetentionConfig,
    presenter: &impl Presenter,
) -> Result<Vec<Partition>, RetainError> {
    let sql = selection_sql(&cfg.table, cfg.unit, cfg.amount);
    let opts = ExecOptions {
        count: true,
        limit: Some("0,1000".into()),
    };
    let res = client.exec(&sql, &opts).await?;

    let count = res
        .count
        .ok_or_else(|| RetainError::Malformed("selection response missing 'count'".into()))?;
    if count == 0 {
        return Ok(Vec::new());
    }

    let partitions = res
        .dataset
        .iter()
        .map(|row| row_to_partition(row))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(count, table = %cfg.table, "found expired partitions");
    presenter.present(&res.columns, &res.dataset);
    Ok(partitions)
}

// Positional mapping: name, minTimestamp, maxTimestamp.
fn row_to_partition(row: &[serde_json::Value]) -> Result<Partition, RetainError> {
    let text = |i: usize| {
        row.get(i)
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                RetainError::Malformed(format!("partition row missing string column {i}"))
            })
    };
    Ok(Partition {
        name: text(0)?,
        min_timestamp: text(1)?,
        max_timestamp: text(2)?,
    })
}
