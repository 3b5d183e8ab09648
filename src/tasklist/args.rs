use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tasklist", bin_name = "tasklist", version)]
#[command(about = "Interactive to-do list backed by a JSON file", long_about = None)]
pub struct Cli {
    /// Backing JSON file [default: tasklist.json]
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Hours east of UTC used to decide what "today" is [default: 2]
    #[arg(long, value_name = "HOURS", allow_hyphen_values = true)]
    pub utc_offset: Option<i32>,

    /// Render priority and due tags as plain spaces
    #[arg(long)]
    pub no_color: bool,

    /// Config file [default: <user config dir>/tasklist/config.json]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
