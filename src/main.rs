use anyhow::Context;
use clap::{Parser, ValueEnum};
use heriquiz::{QuizAssembler, QuizConfig, RecordId, RecordPool, SelectionReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Generate multiple-choice heritage quizzes from tagged records
#[derive(Parser, Debug)]
#[command(name = "heriquiz")]
#[command(about = "Pick quiz distractors and assemble questions for a heritage record", long_about = None)]
struct Args {
    /// JSON file of heritage records (array or {"content": [...]})
    #[arg(short, long)]
    records: PathBuf,

    /// Id of the record to build the quiz for
    #[arg(short, long)]
    target: i64,

    /// What to print
    #[arg(long, value_enum, default_value_t = Mode::Quiz)]
    mode: Mode,

    /// JSON quiz configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Distractors per question (overrides the config file)
    #[arg(long, allow_negative_numbers = true)]
    count: Option<i64>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (falls back to RUST_LOG when omitted)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Assembled questions plus skipped templates
    Quiz,
    /// Selected distractors with their match tiers
    Distractors,
}

fn init_logging(log_level: Option<&str>) -> anyhow::Result<()> {
    let builder = FmtSubscriber::builder().with_writer(std::io::stderr);
    match log_level {
        Some(level) => {
            let level = match level {
                "trace" => Level::TRACE,
                "debug" => Level::DEBUG,
                "info" => Level::INFO,
                "warn" => Level::WARN,
                "error" => Level::ERROR,
                _ => Level::INFO,
            };
            tracing::subscriber::set_global_default(builder.with_max_level(level).finish())?;
        }
        None => {
            let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing::subscriber::set_global_default(builder.with_env_filter(filter).finish())?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref())?;

    info!("Starting heriquiz v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => QuizConfig::from_path(path)
            .with_context(|| format!("failed to load quiz config {}", path.display()))?,
        None => QuizConfig::default(),
    };
    if let Some(count) = args.count {
        config.distractor_count = count;
    }
    debug!(?config, "quiz configuration");

    let pool = RecordPool::from_path(&args.records)
        .with_context(|| format!("failed to load records from {}", args.records.display()))?;
    info!("Loaded {} heritage records", pool.len());

    let (target, candidates) = pool.split_target(RecordId(args.target))?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let output = match args.mode {
        Mode::Quiz => {
            let assembler = QuizAssembler::new(config)?;
            let assembly = assembler.assemble(target, candidates, &mut rng);
            info!(
                "Generated {} questions, skipped {} templates",
                assembly.questions.len(),
                assembly.skipped.len()
            );
            serde_json::to_string_pretty(&assembly)?
        }
        Mode::Distractors => {
            let set = heriquiz::select_distractors(target, candidates, config.distractor_count, &mut rng)?;
            info!("Selected {} of {} requested distractors", set.len(), set.requested());
            serde_json::to_string_pretty(&SelectionReport::new(target.id, &set))?
        }
    };

    println!("{}", output);
    Ok(())
}
