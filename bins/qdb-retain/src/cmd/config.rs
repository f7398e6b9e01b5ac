use std::path::PathBuf;

use clap::Args;

use super::error::RetainError;

// ════════════════════════════════════════════════════════════════
//  Time unit
// ════════════════════════════════════════════════════════════════

/// Единица времени для `dateadd()` в QuestDB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// Символ, который понимает `dateadd()`. `M` и `m` различаются.
    pub fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Minute => "m",
            TimeUnit::Hour => "h",
            TimeUnit::Day => "d",
            TimeUnit::Week => "w",
            TimeUnit::Month => "M",
            TimeUnit::Year => "y",
        }
    }
}

impl std::str::FromStr for TimeUnit {
    type Err = RetainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(TimeUnit::Second),
            "m" => Ok(TimeUnit::Minute),
            "h" => Ok(TimeUnit::Hour),
            "d" => Ok(TimeUnit::Day),
            "w" => Ok(TimeUnit::Week),
            "M" => Ok(TimeUnit::Month),
            "y" => Ok(TimeUnit::Year),
            other => Err(RetainError::Config(format!(
                "unknown time unit '{other}' (expected one of: s, m, h, d, w, M, y)"
            ))),
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ════════════════════════════════════════════════════════════════
//  CLI args
// ════════════════════════════════════════════════════════════════

#[derive(Args, Clone, Debug)]
pub struct RetainArgs {
    /// Table whose partitions are selected, e.g. "trades".
    pub table: String,

    /// Save each selected partition to a .csv file before dropping.
    #[arg(long)]
    pub csv: bool,

    /// Destination folder for .csv files, created recursively.
    /// Defaults to the home directory; files land in <folder>/<table>/.
    #[arg(short = 'o', long = "output-folder")]
    pub output_folder: Option<PathBuf>,

    /// Do not drop the selected partitions (export only).
    #[arg(long)]
    pub dont_drop: bool,

    /// Time unit for the retention window: s, m, h, d, w, M, y.
    #[arg(short = 'u', long = "unit", default_value = "d")]
    pub unit: String,

    /// Amount to keep: partitions with minTimestamp older than now()
    /// minus this many units are selected.
    #[arg(short = 'n', long = "time-unit", default_value_t = 30)]
    pub amount: u32,

    /// Base URL of the QuestDB HTTP endpoint.
    #[arg(short = 'H', long, default_value = "http://127.0.0.1:9000")]
    pub host: String,

    /// Drop by age (DROP PARTITION WHERE) instead of the selected
    /// name list.
    #[arg(long)]
    pub by_age: bool,

    /// Skip all confirmations (drop and file overwrite).
    #[arg(short = 'f', long)]
    pub force: bool,
}

// ════════════════════════════════════════════════════════════════
//  RetentionConfig — validated, immutable
// ════════════════════════════════════════════════════════════════

/// Итоговая конфигурация запуска. Строится один раз из CLI-аргументов
/// и дальше только читается.
#[derive(Debug, Clone)]
pub struct RetentionConfig {
    pub host: String,
    pub table: String,
    pub unit: TimeUnit,
    pub amount: u32,
    pub output_folder: PathBuf,
    pub export_csv: bool,
    pub drop_enabled: bool,
    pub drop_by_age: bool,
    pub force: bool,
}

impl RetentionConfig {
    pub fn new(args: &RetainArgs) -> Result<Self, RetainError> {
        let unit: TimeUnit = args.unit.parse()?;

        let output_folder = match &args.output_folder {
            Some(p) => p.clone(),
            None => dirs::home_dir().ok_or_else(|| {
                RetainError::Config(
                    "cannot determine home directory, pass --output-folder".into(),
                )
            })?,
        };

        if args.table.trim().is_empty() {
            return Err(RetainError::Config("table name is empty".into()));
        }

        Ok(Self {
            host: args.host.trim_end_matches('/').to_string(),
            table: args.table.clone(),
            unit,
            amount: args.amount,
            output_folder,
            export_csv: args.csv,
            drop_enabled: !args.dont_drop,
            drop_by_age: args.by_age,
            force: args.force,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> RetainArgs {
        RetainArgs {
            table: "trades".into(),
            csv: false,
            output_folder: Some(PathBuf::from("/tmp/out")),
            dont_drop: false,
            unit: "d".into(),
            amount: 30,
            host: "http://127.0.0.1:9000".into(),
            by_age: false,
            force: false,
        }
    }

    #[test]
    fn time_unit_symbols_round_trip() {
        for s in ["s", "m", "h", "d", "w", "M", "y"] {
            let unit: TimeUnit = s.parse().unwrap();
            assert_eq!(unit.symbol(), s);
        }
    }

    #[test]
    fn month_and_minute_are_distinct() {
        assert_eq!("m".parse::<TimeUnit>().unwrap(), TimeUnit::Minute);
        assert_eq!("M".parse::<TimeUnit>().unwrap(), TimeUnit::Month);
    }

    #[test]
    fn unknown_unit_is_a_config_error() {
        let err = "days".parse::<TimeUnit>().unwrap_err();
        assert!(matches!(err, RetainError::Config(_)));
    }

    #[test]
    fn config_defaults_map_through() {
        let cfg = RetentionConfig::new(&base_args()).unwrap();
        assert_eq!(cfg.table, "trades");
        assert_eq!(cfg.unit, TimeUnit::Day);
        assert_eq!(cfg.amount, 30);
        assert!(cfg.drop_enabled);
        assert!(!cfg.export_csv);
        assert!(!cfg.drop_by_age);
    }

    #[test]
    fn dont_drop_disables_dropping() {
        let mut args = base_args();
        args.dont_drop = true;
        let cfg = RetentionConfig::new(&args).unwrap();
        assert!(!cfg.drop_enabled);
    }

    #[test]
    fn host_trailing_slash_is_trimmed() {
        let mut args = base_args();
        args.host = "http://db:9000/".into();
        let cfg = RetentionConfig::new(&args).unwrap();
        assert_eq!(cfg.host, "http://db:9000");
    }

    #[test]
    fn empty_table_is_rejected() {
        let mut args = base_args();
        args.table = "  ".into();
        assert!(RetentionConfig::new(&args).is_err());
    }
}
