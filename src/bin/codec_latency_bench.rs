use clap::{Parser, Subcommand, ValueEnum};
use codec_latency_bench::codecs::BuilderStrategy;
use codec_latency_bench::dataset::{self, GenerateConfig, LargeSource, DEFAULT_RECORDS};
use codec_latency_bench::fixture::SmallFixtureMode;
use codec_latency_bench::harness::{BenchConfig, Profile};
use codec_latency_bench::report;
use codec_latency_bench::schema::{BenchmarkResult, CodecBenchReport, RunMeta};
use codec_latency_bench::session::{RunObserver, RunState, Session, TriggerState};
use codec_latency_bench::{FormatKind, Result};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProfileArg {
    Embedded,
    Web,
}

impl From<ProfileArg> for Profile {
    fn from(v: ProfileArg) -> Self {
        match v {
            ProfileArg::Embedded => Profile::Embedded,
            ProfileArg::Web => Profile::Web,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serialize/deserialize timings for every selected format.
    Run {
        /// Formats to benchmark; always executed in declared order.
        #[arg(long, value_enum, value_delimiter = ',', default_values_t = FormatKind::ALL)]
        format: Vec<FormatKind>,

        /// Skip the single-iteration large-dataset variants.
        #[arg(long, default_value_t = false)]
        skip_large: bool,

        /// JSON dataset file for the large variants (see `generate-dataset`).
        ///
        /// If omitted, the dataset is generated in memory from `--seed`.
        #[arg(long, value_name = "FILE", conflicts_with = "records")]
        dataset: Option<PathBuf>,

        /// Record count for an in-memory large dataset.
        #[arg(long)]
        records: Option<usize>,

        /// Use "bar{i}" instead of the constant "bar" in small records.
        #[arg(long, default_value_t = false)]
        vary_strings: bool,

        /// Skip checking decoded values against their fixtures.
        #[arg(long, default_value_t = false)]
        no_validate: bool,

        /// FlatBuffers builder allocation strategy.
        #[arg(long, value_enum, default_value_t = BuilderStrategy::Reuse)]
        builder: BuilderStrategy,

        /// Pause between formats, outside every timed interval.
        #[arg(long, value_name = "MS", default_value_t = 0)]
        pause_ms: u64,
    },

    /// Generate the deterministic large dataset as a JSON file.
    GenerateDataset {
        /// Number of people to generate.
        #[arg(long, short = 'n', default_value_t = DEFAULT_RECORDS)]
        count: usize,

        /// Output directory for the generated dataset.
        #[arg(long, short = 'o', value_name = "DIR")]
        output: PathBuf,
    },

    /// Show record count, size and checksum of a dataset file.
    DatasetInfo {
        /// Path to the dataset file.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "codec-latency-bench")]
#[command(about = "Serialize/deserialize latency comparison across data-interchange formats")]
struct Args {
    #[arg(long, value_enum, default_value_t = ProfileArg::Embedded, global = true)]
    profile: ProfileArg,

    /// Override the profile's iteration count for small records.
    #[arg(long, global = true)]
    iterations: Option<usize>,

    /// Seed for dataset generation.
    #[arg(long, default_value_t = 42, global = true)]
    seed: u64,

    /// Where to write the JSON report.
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Print the JSON report to stdout instead of result cards.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    #[command(subcommand)]
    cmd: Command,
}

fn now_utc_rfc3339() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("unix:{secs}")
}

fn git_sha_short() -> Option<String> {
    // Best-effort: read from environment set by CI/build scripts.
    std::env::var("GIT_SHA")
        .ok()
        .or_else(|| std::env::var("GITHUB_SHA").ok())
        .map(|s| s.chars().take(12).collect())
}

/// Prints each card as soon as its format finishes.
struct Console {
    cards: bool,
}

impl RunObserver for Console {
    fn on_state(&mut self, state: &RunState, trigger: TriggerState) {
        if *state == RunState::Running {
            eprintln!("[{}]", trigger.label());
        }
    }

    fn on_result(&mut self, results: &[BenchmarkResult]) {
        if let (true, Some(last)) = (self.cards, results.last()) {
            println!("{}", report::render_card(last));
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut cfg = BenchConfig::new(args.profile.into());
    cfg.iterations = args.iterations;
    cfg.seed = args.seed;

    match args.cmd {
        Command::Run {
            format,
            skip_large,
            dataset,
            records,
            vary_strings,
            no_validate,
            builder,
            pause_ms,
        } => {
            cfg.formats = format;
            cfg.fixture_mode = if vary_strings {
                SmallFixtureMode::Varying
            } else {
                SmallFixtureMode::Constant
            };
            cfg.validate = !no_validate;
            cfg.builder = builder;
            cfg.pause = Duration::from_millis(pause_ms);
            cfg.large = match (skip_large, dataset) {
                (true, _) => None,
                (false, Some(path)) => Some(LargeSource::File(path)),
                (false, None) => Some(LargeSource::Generated(GenerateConfig {
                    count: records.unwrap_or(DEFAULT_RECORDS),
                    seed: args.seed,
                })),
            };
        }
        Command::GenerateDataset { count, output } => {
            let gen_config = GenerateConfig {
                count,
                seed: args.seed,
            };

            fs::create_dir_all(&output)?;
            let filepath = output.join(dataset::dataset_file_name(&gen_config));

            eprintln!("Generating {} people (seed={})...", count, args.seed);
            let start = Instant::now();
            let data = dataset::generate_dataset(&gen_config);
            dataset::write_dataset(&filepath, &data)?;
            let elapsed = start.elapsed();

            let file_size = fs::metadata(&filepath)?.len();
            eprintln!(
                "Wrote {:.2} MB in {:.2}s",
                file_size as f64 / 1_048_576.0,
                elapsed.as_secs_f64()
            );
            eprintln!("\nDataset saved: {}", filepath.display());
            return Ok(());
        }
        Command::DatasetInfo { path } => {
            let meta = dataset::read_dataset_meta(&path)?;
            eprintln!("Dataset: {}", path.display());
            eprintln!("  Records: {}", meta.records);
            eprintln!("  File size: {:.2} MB", meta.file_bytes as f64 / 1_048_576.0);
            eprintln!("  SHA-256: {}", meta.sha256);
            return Ok(());
        }
    }

    let mut session = Session::new(cfg);
    let mut console = Console { cards: !args.json };
    let results = session.run(&mut console)?.to_vec();

    if !(args.json || args.out.is_some()) {
        return Ok(());
    }

    let cfg = session.config();
    let report = CodecBenchReport {
        run: RunMeta {
            schema_version: 1,
            bench_version: env!("CARGO_PKG_VERSION").to_string(),
            profile: cfg.profile.as_str().to_string(),
            iterations: cfg.iters(),
            seed: cfg.seed,
            timestamp_utc: now_utc_rfc3339(),
            git_sha: git_sha_short(),
        },
        results,
    };

    let json = serde_json::to_string_pretty(&report)?;
    if let Some(out) = args.out {
        fs::write(out, &json)?;
    }
    if args.json {
        println!("{json}");
    }

    Ok(())
}
