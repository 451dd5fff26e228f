use std::{path::PathBuf, sync::Arc, time::Duration};

use clap::{
    ArgAction, Args, CommandFactory, Parser, Subcommand, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use collabnet::{
    cli, config,
    network::{LayoutConfig, WeightMode},
    types::PkceToken,
    warning,
};
use tokio::sync::Mutex;

const TRACKS_FILE: &str = "spotify_song_analysis.csv";

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Collect playlist tracks and audio features into the track table
    Collect(CollectOptions),

    /// Build the collaboration network and rank artists
    Analyze(AnalyzeOptions),

    /// Collect, then analyze the freshly written track table
    Run(RunOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Args, Debug, Clone)]
pub struct CollectOptions {
    /// Playlist id to collect; can be repeated (defaults to COLLABNET_PLAYLISTS)
    #[clap(long = "playlist", action = ArgAction::Append, num_args = 1)]
    playlists: Vec<String>,

    /// Track table to write
    #[clap(long, default_value = TRACKS_FILE)]
    output: PathBuf,

    /// Track ids per audio feature request
    #[clap(long, default_value_t = 10)]
    batch_size: usize,

    /// Pause after each audio feature batch, in milliseconds
    #[clap(long, default_value_t = 200)]
    delay_ms: u64,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeOptions {
    /// Track table to read
    #[clap(long, default_value = TRACKS_FILE)]
    input: PathBuf,

    #[command(flatten)]
    output: AnalyzeOutputOptions,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeOutputOptions {
    /// Directory for the ranking table and charts
    #[clap(long, default_value = ".")]
    out_dir: PathBuf,

    /// How collaboration counts turn into path costs for betweenness
    #[clap(long, value_enum, default_value_t = WeightModeArg::Distance)]
    weight_mode: WeightModeArg,

    /// Number of artists in the console table and bar charts
    #[clap(long, default_value_t = 10)]
    top: usize,

    /// Skip chart rendering
    #[clap(long)]
    no_charts: bool,

    /// Seed of the network layout
    #[clap(long, default_value_t = 42)]
    layout_seed: u64,

    /// Iterations of the network layout
    #[clap(long, default_value_t = 1200)]
    layout_iterations: usize,
}

#[derive(Args, Debug, Clone)]
pub struct RunOptions {
    #[command(flatten)]
    collect: CollectOptions,

    #[command(flatten)]
    output: AnalyzeOutputOptions,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum WeightModeArg {
    /// Cost = collaboration count (frequent collaborators are farther apart)
    Distance,
    /// Cost = 1 / collaboration count (frequent collaborators are closer)
    Strength,
}

impl From<WeightModeArg> for WeightMode {
    fn from(arg: WeightModeArg) -> Self {
        match arg {
            WeightModeArg::Distance => WeightMode::Distance,
            WeightModeArg::Strength => WeightMode::Strength,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

impl CollectOptions {
    fn settings(&self) -> cli::CollectSettings {
        let playlists = if self.playlists.is_empty() {
            config::playlists()
        } else {
            self.playlists.clone()
        };

        cli::CollectSettings {
            playlists,
            output: self.output.clone(),
            batch_size: self.batch_size,
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}

impl AnalyzeOutputOptions {
    fn settings(&self, input: PathBuf) -> cli::AnalyzeSettings {
        cli::AnalyzeSettings {
            input,
            out_dir: self.out_dir.clone(),
            weight_mode: self.weight_mode.into(),
            top: self.top,
            charts: !self.no_charts,
            layout: LayoutConfig {
                seed: self.layout_seed,
                iterations: self.layout_iterations,
                ..LayoutConfig::default()
            },
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Collect(opt) => cli::collect(&opt.settings()).await,
        Command::Analyze(opt) => cli::analyze(&opt.output.settings(opt.input.clone())),
        Command::Run(opt) => {
            let collect = opt.collect.settings();
            cli::collect(&collect).await;
            cli::analyze(&opt.output.settings(collect.output));
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
