use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tdk::cli::output::{self, OutputFormat};
use tdk::{Config, HttpTransport, TdkError, WordQuery};

#[derive(Parser, Debug)]
#[command(name = "tdk")]
#[command(version, about = "Query the TDK Turkish dictionary", long_about = None)]
struct Cli {
    /// The word you want to query
    #[arg(value_name = "WORD", required_unless_present = "completion")]
    word: Option<String>,

    /// Download pronunciations instead of printing definitions
    #[arg(short = 'p', long = "pronunciations")]
    pronunciations: bool,

    /// Directory to save pronunciations into
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Prefix for downloaded file names
    #[arg(long)]
    prefix: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// User-Agent header sent with every request
    #[arg(long, env = "TDK_USER_AGENT")]
    user_agent: Option<String>,

    /// Dictionary service base URL
    #[arg(long, env = "TDK_BASE_URL", hide = true)]
    base_url: Option<String>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "tdk", &mut io::stdout());
        return Ok(());
    }

    let use_color = !cli.no_color;
    if !use_color {
        colored::control::set_override(false);
    }

    let config = load_config(&cli)?;
    let word = cli.word.clone().context("No word specified")?;
    let mut query = WordQuery::with_config(word, &config)?;

    let outcome = if cli.pronunciations {
        download(&mut query, &config, use_color)
    } else {
        lookup(&mut query, cli.format, use_color)
    };

    if let Err(err) = outcome {
        output::print_error(&format!("{:#}", err), use_color);
        if matches!(err.downcast_ref::<TdkError>(), Some(TdkError::WordNotFound(_))) {
            suggest(&mut query, use_color);
        }
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load().context("Failed to load configuration")?;

    if let Some(user_agent) = &cli.user_agent {
        config.user_agent = user_agent.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(dir) = &cli.dir {
        config.download_dir = dir.clone();
    }
    if let Some(prefix) = &cli.prefix {
        config.filename_prefix = prefix.clone();
    }

    Ok(config)
}

fn lookup(
    query: &mut WordQuery<HttpTransport>,
    format: OutputFormat,
    colored: bool,
) -> Result<()> {
    let entries = query.entries()?;
    let rendered = output::render_entries(query.word(), &entries, format, colored)
        .context("Failed to render output")?;
    print!("{}", rendered);
    Ok(())
}

fn download(
    query: &mut WordQuery<HttpTransport>,
    config: &Config,
    colored: bool,
) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Downloading pronunciations of {}...", query.word()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = query.download_audio(&config.download_dir, &config.filename_prefix);
    pb.finish_and_clear();

    output::print_downloads(&result?, colored);
    Ok(())
}

fn suggest(query: &mut WordQuery<HttpTransport>, colored: bool) {
    match query.similar_words() {
        Ok(words) => output::print_suggestions(words, colored),
        Err(e) => log::warn!("could not fetch suggestions: {}", e),
    }
}
