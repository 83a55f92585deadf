use anyhow::Result;
use clap::{Parser, Subcommand};
use oreo_cli::{commands, Width};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "oreo")]
#[command(about = "Oreo - Compact binary archive toolkit", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON document into an archive
    Encode {
        /// Schema file describing the archive layout
        #[arg(short, long)]
        schema: String,

        /// Input JSON file (use - for stdin)
        #[arg(short, long)]
        input: String,

        /// Output file for the encoded archive
        #[arg(short, long)]
        output: String,
    },

    /// Decode an archive back into JSON
    Decode {
        /// Schema file describing the archive layout
        #[arg(short, long)]
        schema: String,

        /// Input archive (use - for stdin)
        #[arg(short, long)]
        input: String,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// JSON file with max_string_len / max_sequence_len
        #[arg(long)]
        limits: Option<String>,
    },

    /// Inspect the varint integer encoding
    Varint {
        #[command(subcommand)]
        action: VarintAction,
    },
}

#[derive(Subcommand)]
enum VarintAction {
    /// Print the hex encoding of a decimal integer
    Encode {
        /// Decimal value
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Integer width in bits
        #[arg(short, long, value_enum, default_value = "32")]
        width: Width,

        /// Treat the value as signed
        #[arg(long)]
        signed: bool,
    },

    /// Print the integer held in a hex varint
    Decode {
        /// Hex bytes, e.g. ac02
        hex: String,

        /// Integer width in bits
        #[arg(short, long, value_enum, default_value = "32")]
        width: Width,

        /// Interpret the bits as signed
        #[arg(long)]
        signed: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for command output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Encode {
            schema,
            input,
            output,
        } => commands::encode::execute(&schema, &input, &output),

        Commands::Decode {
            schema,
            input,
            output,
            limits,
        } => commands::decode::execute(&schema, &input, output.as_deref(), limits.as_deref()),

        Commands::Varint { action } => match action {
            VarintAction::Encode {
                value,
                width,
                signed,
            } => commands::varint::execute_encode(&value, width, signed),
            VarintAction::Decode { hex, width, signed } => {
                commands::varint::execute_decode(&hex, width, signed)
            }
        },
    }
}
