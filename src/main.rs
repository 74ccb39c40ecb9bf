use anyhow::Result;
use clap::Parser;
use contrarian::app::{run_session, App};
use contrarian::engine::config::Config;
use contrarian::engine::{
    AntonymResolver, DatamuseResolver, LexiconClassifier, NoAntonyms, Pipeline,
};
use contrarian::input::{CompletionSource, EchoSource, SentenceSource};
use contrarian::rendering::{StreamRenderer, TerminalSink};
use std::time::Duration;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contrarian")]
#[command(about = "A typewriter that argues with everything you tell it", long_about = None)]
#[command(version)]
struct Cli {
    /// Delay after each typed character, in milliseconds
    #[arg(long, env = "CONTRARIAN_CHAR_DELAY_MS", default_value = "35")]
    char_delay_ms: u64,

    /// Delay after each erased column, in milliseconds
    #[arg(long, env = "CONTRARIAN_ERASE_DELAY_MS", default_value = "12")]
    erase_delay_ms: u64,

    /// Pause before a word is rewritten, in milliseconds
    #[arg(long, env = "CONTRARIAN_PAUSE_MS", default_value = "350")]
    pause_ms: u64,

    /// Seed for reproducible output
    #[arg(long, env = "CONTRARIAN_SEED")]
    seed: Option<u64>,

    /// Never query the antonym service
    #[arg(long)]
    offline: bool,

    /// Datamuse-compatible antonym endpoint
    #[arg(long, env = "CONTRARIAN_ANTONYM_URL", default_value = "https://api.datamuse.com/words")]
    antonym_url: String,

    /// Antonym request timeout, in milliseconds
    #[arg(long, default_value = "3000")]
    antonym_timeout_ms: u64,

    /// Render the input itself instead of asking the completion API
    #[arg(long)]
    echo: bool,

    /// Log level (logs go to stderr)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config {
            seed: self.seed,
            ..Config::default()
        };
        config.typing.char_delay = Duration::from_millis(self.char_delay_ms);
        config.typing.erase_delay = Duration::from_millis(self.erase_delay_ms);
        config.typing.rewrite_pause = Duration::from_millis(self.pause_ms);
        config.resolver.base_url = self.antonym_url.clone();
        config.resolver.timeout = Duration::from_millis(self.antonym_timeout_ms);
        config.resolver.offline = self.offline;
        config
    }
}

fn sentence_source(cli: &Cli, config: &Config) -> Result<Box<dyn SentenceSource>> {
    if cli.echo {
        return Ok(Box::new(EchoSource));
    }
    if config.completion.api_key.is_empty() {
        warn!("CONTRARIAN_API_KEY not set, echoing input instead");
        return Ok(Box::new(EchoSource));
    }
    Ok(Box::new(CompletionSource::new(config.completion.clone())?))
}

fn antonym_resolver(config: &Config) -> Result<Box<dyn AntonymResolver>> {
    if config.resolver.offline {
        return Ok(Box::new(NoAntonyms));
    }
    Ok(Box::new(DatamuseResolver::new(config.resolver.clone())?))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("contrarian={}", cli.log_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config();
    info!(seed = ?config.seed, offline = config.resolver.offline, "starting");

    let source = sentence_source(&cli, &config)?;
    let resolver = antonym_resolver(&config)?;
    let pipeline = Pipeline::new(LexiconClassifier::new(), resolver, &config);
    let mut app = App::new(source, pipeline);

    let mut renderer = StreamRenderer::new(TerminalSink::stdout(), config.typing.erase_delay);
    let stdin = BufReader::new(tokio::io::stdin());
    run_session(&mut app, stdin, &mut renderer).await?;

    Ok(())
}
