use clap::Parser;
use qdb_retain::cmd;
use qdb_retain::cmd::config::{RetainArgs, RetentionConfig};
use qdb_retain::cmd::confirm::StdinGate;
use qdb_retain::cmd::present::PlainPresenter;

#[derive(Parser)]
#[command(
    name = "qdb-retain",
    about = "Exports expired QuestDB table partitions to .csv and drops them",
    version
)]
struct Cli {
    #[command(flatten)]
    args: RetainArgs,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let cfg = match RetentionConfig::new(&cli.args) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid arguments");
            std::process::exit(1);
        }
    };

    let gate = StdinGate::new(cfg.force);
    if let Err(e) = cmd::run::run(&cfg, &gate, &PlainPresenter).await {
        tracing::error!(error = %e, "retention run failed");
        std::process::exit(1);
    }
}
