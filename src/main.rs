//! Chat Distance CLI
//!
//! Usage:
//!   chat-distance                              # Interactive input (A/B prompts)
//!   chat-distance --transcript chat.txt        # Analyze `SENDER: text` lines
//!   chat-distance --transcript - --json        # Read stdin, JSON output
//!   chat-distance --phrases my_avoid.txt       # Custom avoidance phrase list

use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use chat_distance::core::{load_avoidance_phrases_or_empty, read_transcript, ChatSession, MessageScorer};
use chat_distance::types::{Participant, PerUserReport, SessionReport};
use chat_distance::{DistanceError, DEFAULT_PHRASE_FILE, VERSION};

/// Input that ends the conversation and prints the reports
const FINISH_COMMAND: &str = "p";

/// Input at the sender prompt that starts a new conversation
const CLEAR_COMMAND: &str = "clear";

#[derive(Parser, Debug)]
#[command(
    name = "chat-distance",
    version = VERSION,
    about = "Score a two-party chat for conversational distance",
    long_about = "Chat Distance scores each message of a conversation between A and B.\n\n\
                  Penalties:\n  \
                  short reply   1  one word, no question mark\n  \
                  no question   2  no question mark anywhere\n  \
                  avoidance     3  a word from the avoidance phrase list\n\n\
                  The session distance is the total penalty as a percentage of the\n\
                  maximum possible penalty, followed by a per-participant breakdown."
)]
struct Args {
    /// Avoidance phrase file, one phrase per line
    #[arg(short, long, env = "CHAT_DISTANCE_PHRASES", default_value = DEFAULT_PHRASE_FILE)]
    phrases: PathBuf,

    /// Analyze a transcript of `SENDER: text` lines instead of prompting (use - for stdin)
    #[arg(short, long)]
    transcript: Option<PathBuf>,

    /// Output reports as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), DistanceError> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let phrases = load_avoidance_phrases_or_empty(&args.phrases);
    let mut session = ChatSession::new(MessageScorer::new(phrases));

    match &args.transcript {
        Some(path) => run_transcript(&mut session, path)?,
        None => run_interactive(&mut session)?,
    }

    print_reports(&session, args)
}

/// Log to stderr so reports on stdout stay clean
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    // Ignore error if a global subscriber is already set
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Feed every transcript line into the session
fn run_transcript(session: &mut ChatSession, path: &Path) -> Result<(), DistanceError> {
    let pairs = if path.as_os_str() == "-" {
        read_transcript(io::stdin().lock())?
    } else {
        let file = File::open(path).map_err(|source| DistanceError::Transcript {
            path: path.to_path_buf(),
            source,
        })?;
        read_transcript(BufReader::new(file))?
    };

    tracing::info!(messages = pairs.len(), "transcript loaded");
    for (sender, content) in pairs {
        session.add_message(sender, content);
    }
    Ok(())
}

/// Prompt for sender and content until `p` or end of input
fn run_interactive(session: &mut ChatSession) -> Result<(), DistanceError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    println!(
        "[Conversation input] ('{}' to finish, '{}' to start over)",
        FINISH_COMMAND, CLEAR_COMMAND
    );

    loop {
        let sender = loop {
            print!("Who is speaking? (A/B): ");
            stdout.flush()?;

            let Some(line) = read_input_line(&mut input)? else {
                return Ok(());
            };
            let sender = line.trim();

            if sender == FINISH_COMMAND {
                return Ok(());
            }
            if sender == CLEAR_COMMAND {
                session.clear();
                println!("Conversation cleared.");
                continue;
            }
            if Participant::from_sender(sender).is_some() {
                break sender.to_string();
            }
            println!("[error] Please choose A or B.");
        };

        print!("> ");
        stdout.flush()?;

        let Some(content) = read_input_line(&mut input)? else {
            return Ok(());
        };
        if content == FINISH_COMMAND {
            return Ok(());
        }

        session.add_message(sender, content);
    }
}

/// Read one line without its line ending; `None` at end of input
fn read_input_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(Some(line))
}

fn print_reports(session: &ChatSession, args: &Args) -> Result<(), DistanceError> {
    let summary = session.analyze_session();
    let per_user = session.analyze_session_per_user();

    if args.json {
        #[derive(serde::Serialize)]
        struct Reports<'a> {
            session: &'a SessionReport,
            per_user: &'a PerUserReport,
        }

        let reports = Reports {
            session: &summary,
            per_user: &per_user,
        };
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if args.no_color {
        print!("{}", summary);
        print!("{}", per_user);
    } else {
        print!("{}", summary.to_terminal_string());
        print!("{}", per_user.to_terminal_string());
    }
    Ok(())
}
