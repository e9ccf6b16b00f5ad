use crate::report::{run_ai_ml_report, run_matrix_report, AiMlReportArgs, MatrixReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use workload_fit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Workload Fit",
    about = "Score database workloads against compute-storage separation architectures",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score every workload against every architecture and export the matrix
    Matrix(MatrixReportArgs),
    /// Assess AI/ML pipeline patterns for compute-storage separation
    AiMl(AiMlReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Matrix(args) => run_matrix_report(args),
        Command::AiMl(args) => run_ai_ml_report(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_command_parses_repeated_categories() {
        let cli = Cli::try_parse_from([
            "workload-fit",
            "matrix",
            "--workloads",
            "workloads.csv",
            "--architectures",
            "architectures.json",
            "--category",
            "OLTP",
            "--category",
            "HTAP",
            "--date",
            "2025-08-20",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Matrix(args)) => {
                assert_eq!(args.categories, vec!["OLTP", "HTAP"]);
                assert_eq!(
                    args.date,
                    chrono::NaiveDate::from_ymd_opt(2025, 8, 20)
                );
                assert!(!args.no_export);
            }
            other => panic!("expected matrix command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["workload-fit"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn ai_ml_command_requires_patterns() {
        assert!(Cli::try_parse_from(["workload-fit", "ai-ml"]).is_err());
    }
}
