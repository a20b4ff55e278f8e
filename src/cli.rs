use clap::Parser;

#[derive(Parser)]
#[command(name = "log-groups")]
#[command(about = "Build log groups and print their logging-friendly form")]
pub struct Cli {
    /// Group ids, one group is built per id
    #[arg(required = true)]
    pub gids: Vec<String>,

    /// URL attached to every group
    #[arg(long)]
    pub url: Option<String>,

    /// Name of the infrastructure descriptor shared by all groups
    #[arg(long)]
    pub infra: Option<String>,

    /// Clusters belonging to the infrastructure descriptor
    #[arg(long, value_delimiter = ',', requires = "infra")]
    pub cluster: Vec<String>,

    /// Log entry as SOURCE:LINE (repeatable)
    #[arg(short = 'L', long = "log")]
    pub logs: Vec<String>,

    /// Print each group's log lines under its header
    #[arg(long)]
    pub show_logs: bool,

    /// Verbose output (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
