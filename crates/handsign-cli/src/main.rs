//! handsign CLI — classify hand-gesture frames from the command line.

use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use handsign::{ActionSignal, Classifier, ClassifyConfig, GestureLabel};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "handsign")]
#[command(about = "Classify a hand-gesture frame into a classroom action (chat / teacher view / attendance)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single frame.
    Classify(ClassifyArgs),

    /// Print the default classification configuration (JSON).
    ConfigInfo,

    /// Print the gesture-to-action table.
    Actions,
}

#[derive(Debug, Clone, Args)]
struct ClassifyArgs {
    /// Path to the input image.
    #[arg(long, conflicts_with = "payload_stdin")]
    image: Option<PathBuf>,

    /// Read a base64 or data-URI payload from stdin instead of a file.
    #[arg(long)]
    payload_stdin: bool,

    /// Path to write the classification record (JSON). Prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Path to a JSON classification config overriding the defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> CliResult<()> {
    env_logger::init();
    match Cli::parse().command {
        Commands::Classify(args) => run_classify(args),
        Commands::ConfigInfo => {
            println!("{}", serde_json::to_string_pretty(&ClassifyConfig::default())?);
            Ok(())
        }
        Commands::Actions => {
            for label in [
                GestureLabel::OpenChat,
                GestureLabel::TeacherView,
                GestureLabel::MarkAttendance,
                GestureLabel::None,
            ] {
                let key = label.key().map_or("-".to_string(), |k| k.to_string());
                println!("{:<16} {:<4} key: {}", label.as_str(), label.emoji(), key);
            }
            Ok(())
        }
    }
}

fn run_classify(args: ClassifyArgs) -> CliResult<()> {
    let classifier = match &args.config {
        Some(path) => Classifier::from_config_json_file(path)?,
        None => Classifier::new(),
    };

    let signal: ActionSignal = if args.payload_stdin {
        let mut payload = String::new();
        std::io::stdin().read_to_string(&mut payload)?;
        classifier.classify_payload(payload.trim())
    } else if let Some(path) = &args.image {
        let gray = image::open(path)?.to_luma8();
        log::info!("classifying {} ({}x{})", path.display(), gray.width(), gray.height());
        classifier.classify_image(&gray)
    } else {
        return Err("either --image or --payload-stdin is required".into());
    };

    let json = serde_json::to_string_pretty(&signal)?;
    match &args.out {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
