use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(name = "gqlcodegen")]
#[command(version = "0.1.0")]
#[command(about = "Generate typed Rust data types and client stubs from GraphQL schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a configuration file, optionally with an example schema
    Init {
        /// Also write the example product catalogue schema
        #[arg(long)]
        example: bool,

        /// Directory for the example schema
        #[arg(long, default_value = "schema")]
        schema_dir: String,

        /// Output config file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },

    /// Generate Rust code from the configured schema
    Generate {
        /// Config file path
        #[arg(long, default_value = "gqlcodegen.toml")]
        config: String,

        /// Override the configured output directory
        #[arg(long)]
        output_dir: Option<String>,
    },

    /// Parse and validate the configured schema without writing anything
    Check {
        /// Config file path
        #[arg(long, default_value = "gqlcodegen.toml")]
        config: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { example, schema_dir, output } => {
            cli::init::run(example, schema_dir, output)?;
        }
        Commands::Generate { config, output_dir } => {
            cli::generate::run(config, output_dir)?;
        }
        Commands::Check { config } => {
            cli::check::run(config)?;
        }
    }

    Ok(())
}
