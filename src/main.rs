use anyhow::Result;
use clap::Parser;
use styler::commands::{self, Config, ConfigOverrides, TransferOptions};
use styler::runtime::RealRuntime;
use styler::style::{InputType, ReportId};

/// styler - Style Transfer API client
///
/// Submit style transfer jobs and manage stored results on a style transfer
/// backend.
///
/// If the STYLER_API_TOKEN environment variable is set, it is sent as a bearer
/// token with every request.
///
/// Examples:
///   styler transfer --input-type text --source-file story.txt \
///       --theme "a walk by the sea" --provider openai --model gpt-4o
///   styler results list
#[derive(Parser, Debug)]
#[command(author, version = env!("STYLER_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL (defaults to http://localhost:8000)
    #[arg(long = "api-url", env = "STYLER_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Path prefix the backend mounts its API under (defaults to /api)
    #[arg(long = "api-prefix", env = "STYLER_API_PREFIX", value_name = "PREFIX", global = true)]
    pub api_prefix: Option<String>,

    /// Timeout in seconds for result requests
    #[arg(long = "timeout", env = "STYLER_TIMEOUT", value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Timeout in seconds for transfer submissions
    #[arg(long = "long-timeout", env = "STYLER_LONG_TIMEOUT", value_name = "SECS", global = true)]
    pub long_timeout: Option<u64>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run a style transfer
    Transfer(TransferArgs),

    /// Submit a raw JSON request to the legacy transfer endpoint
    Submit(SubmitArgs),

    /// Browse and save stored results
    #[command(subcommand)]
    Results(ResultsCommands),
}

#[derive(clap::Args, Debug)]
pub struct TransferArgs {
    /// Source kind: text, file or analysis
    #[arg(long = "input-type", short = 'i', value_name = "TYPE")]
    pub input_type: InputType,

    /// The new theme or topic to write about in the source style
    #[arg(long = "theme", short = 't')]
    pub theme: String,

    /// Model provider name
    #[arg(long, short = 'p')]
    pub provider: String,

    /// Model name
    #[arg(long, short = 'm')]
    pub model: String,

    /// Source text whose style is imitated
    #[arg(long = "source-text", conflicts_with = "source_file")]
    pub source_text: Option<String>,

    /// Read the source text from a file ("-" for stdin)
    #[arg(long = "source-file", value_name = "FILE")]
    pub source_file: Option<String>,

    /// Analysis report to take the style from
    #[arg(long = "report-id", value_name = "ID")]
    pub report_id: Option<ReportId>,

    /// Print only the generated text
    #[arg(long = "text-only")]
    pub text_only: bool,
}

#[derive(clap::Args, Debug)]
pub struct SubmitArgs {
    /// JSON file with the request body ("-" for stdin)
    #[arg(value_name = "FILE")]
    pub source: String,
}

#[derive(clap::Subcommand, Debug)]
enum ResultsCommands {
    /// List stored style transfer results
    List,

    /// Show one stored result
    Show {
        /// Result id
        #[arg(value_name = "ID")]
        id: ReportId,
    },

    /// Save a result from a JSON file ("-" for stdin)
    Save {
        #[arg(value_name = "FILE")]
        source: String,
    },
}

impl From<TransferArgs> for TransferOptions {
    fn from(args: TransferArgs) -> Self {
        TransferOptions {
            input_type: args.input_type,
            new_theme: args.theme,
            provider: args.provider,
            model: args.model,
            source_text: args.source_text,
            source_file: args.source_file,
            report_id: args.report_id,
            text_only: args.text_only,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    let config = Config::load(
        &runtime,
        ConfigOverrides {
            api_url: cli.api_url,
            api_prefix: cli.api_prefix,
            timeout_secs: cli.timeout,
            long_timeout_secs: cli.long_timeout,
        },
    )?;
    let api = commands::build_services(&config)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Transfer(args) => {
            commands::transfer(&api, &runtime, args.into(), &mut out).await?
        }
        Commands::Submit(args) => commands::submit(&api, &runtime, &args.source, &mut out).await?,
        Commands::Results(ResultsCommands::List) => commands::list_results(&api, &mut out).await?,
        Commands::Results(ResultsCommands::Show { id }) => {
            commands::show_result(&api, &id, &mut out).await?
        }
        Commands::Results(ResultsCommands::Save { source }) => {
            commands::save_result(&api, &runtime, &source, &mut out).await?
        }
    }
    Ok(())
}
