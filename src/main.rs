use clap::{Parser, ValueEnum};
use colored::Colorize;

use a3s_cron_parser::parse_schedule;

#[derive(Parser)]
#[command(
    name = "cron-parser",
    about = "Expand a cron expression into the minutes, hours, days and months it matches"
)]
struct Cli {
    /// Cron expression followed by a command, e.g. "*/15 0 1,15 * 1-5 /usr/bin/find"
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One padded line per field
    Table,
    /// Pretty-printed JSON object
    Json,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "[cron-parser]".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let expression = cli.expression.join(" ");
    let schedule = parse_schedule(&expression)?;

    match cli.format {
        OutputFormat::Table => println!("{schedule}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schedule)?),
    }

    Ok(())
}
