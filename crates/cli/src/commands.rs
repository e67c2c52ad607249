use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Create the table from the CSV header and insert every row
    Load {
        #[command(flatten)]
        source: ConfigArgs,

        #[arg(
            long,
            help = "If specified, writes the JSON summary to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Print the CREATE TABLE and INSERT statements without connecting
    Preview {
        #[command(flatten)]
        source: ConfigArgs,
    },
    /// Test the configured connection with a `SELECT 1`
    TestConn {
        #[command(flatten)]
        source: ConfigArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(long, help = "Config file path (JSON)")]
    pub config: String,

    #[arg(long, help = "Overrides the CSV file named in the config")]
    pub csv: Option<String>,

    #[arg(long, help = "Overrides the destination table named in the config")]
    pub table: Option<String>,

    #[arg(long, help = "Loads KEY=VALUE pairs from this file before resolving secrets")]
    pub env_file: Option<String>,
}
