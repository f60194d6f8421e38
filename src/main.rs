//! Wordwatch CLI
//!
//! Usage:
//!   wordwatch                               # Practice with data/words.json
//!   wordwatch --words list.json             # Practice another list
//!   wordwatch --stats                       # Progress summary
//!   wordwatch --preview 10                  # Next 10 scheduled words
//!   wordwatch --json                        # JSON lines instead of cards

use clap::Parser;
use colored::Colorize;
use log::warn;
use std::io::{self, BufRead, Write};
use std::thread::sleep;
use std::time::Duration;

use wordwatch::core::{load_progress_if_exists, load_words, save_progress, PracticeSession};
use wordwatch::types::{CardView, Word};
use wordwatch::{DEFAULT_PROGRESS_PATH, DEFAULT_WORDS_PATH, FEEDBACK_DELAY_MS, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "wordwatch",
    version = VERSION,
    about = "Vocabulary flashcards with spaced repetition",
    long_about = "Wordwatch walks through a word list in order. Marking a word as\n\
                  familiar sends it away for a while: 2% of the list length the\n\
                  first time, doubling with every further mark, never more than 60%.\n\n\
                  Commands:\n  \
                  n / Enter   next word\n  \
                  p           previous word\n  \
                  f           familiar (schedules the word, then moves on)\n  \
                  d           show/hide meaning and example\n  \
                  s           progress summary\n  \
                  q           save and quit"
)]
struct Args {
    /// Word list (JSON array of {id, text, phonetic, meaning, example})
    #[arg(short, long, default_value = DEFAULT_WORDS_PATH)]
    words: String,

    /// Progress file
    #[arg(short, long, default_value = DEFAULT_PROGRESS_PATH)]
    progress: String,

    /// Do not write the progress file
    #[arg(long)]
    no_save: bool,

    /// Ignore any saved progress and start over
    #[arg(long)]
    reset: bool,

    /// Pause after marking a word familiar (milliseconds)
    #[arg(long, default_value_t = FEEDBACK_DELAY_MS)]
    feedback_delay_ms: u64,

    /// Print a progress summary and exit
    #[arg(long)]
    stats: bool,

    /// Print the next N scheduled words and exit
    #[arg(long, value_name = "N")]
    preview: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show scheduling reason with every card
    #[arg(short, long)]
    verbose: bool,
}

/// One line of interactive input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Next,
    Previous,
    Familiar,
    Details,
    Stats,
    Quit,
    Unknown,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let mut session = open_session(&args);

    if args.stats {
        print_stats(&session, &args);
    } else if let Some(count) = args.preview {
        print_preview(&session, count, &args);
    } else {
        run_interactive(&mut session, &args);
    }
}

/// Load the word list and any saved progress
fn open_session(args: &Args) -> PracticeSession {
    let words: Vec<Word> = match load_words(&args.words) {
        Ok(list) => {
            if list.repaired {
                eprintln!("{}", format!("Note: {} had punctuation errors and was repaired", args.words).yellow());
            }
            list.words
        }
        Err(e) => {
            eprintln!("{}", format!("Could not load {}: {} [{}]", args.words, e, e.code()).red());
            Vec::new()
        }
    };

    if args.reset {
        return PracticeSession::new(words);
    }

    match load_progress_if_exists(&args.progress) {
        Ok(Some(file)) => PracticeSession::restore(words, file),
        Ok(None) => PracticeSession::new(words),
        Err(e) => {
            warn!("ignoring progress file {}: {}", args.progress, e);
            eprintln!("{}", format!("Could not read {}: {}, starting fresh", args.progress, e).yellow());
            PracticeSession::new(words)
        }
    }
}

/// Interactive practice loop
fn run_interactive(session: &mut PracticeSession, args: &Args) {
    print_header(args.no_color);

    if session.is_empty() {
        println!("{}", "No words available. Check the word list file.".dimmed());
        return;
    }

    println!("n/Enter next · p previous · f familiar · d details · s stats · q quit");
    println!();
    if let Some(view) = session.view() {
        print_card(&view, args);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", "> ".dimmed());
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        match parse_command(&line) {
            Command::Next => {
                if let Some(view) = session.next() {
                    print_card(&view, args);
                }
            }
            Command::Previous => {
                if let Some(view) = session.previous() {
                    print_card(&view, args);
                }
            }
            Command::Familiar => {
                if let Some(record) = session.mark_familiar() {
                    if !args.json {
                        println!(
                            "{}",
                            format!(
                                "  ✓ familiar ×{} · back from step {}",
                                record.familiar_count, record.next_available_step
                            )
                            .green()
                        );
                    }
                    autosave(session, args);
                    sleep(Duration::from_millis(args.feedback_delay_ms));
                    if let Some(view) = session.next() {
                        print_card(&view, args);
                    }
                }
            }
            Command::Details => {
                if let Some(view) = session.toggle_details() {
                    print_card(&view, args);
                }
            }
            Command::Stats => print_stats(session, args),
            Command::Quit => break,
            Command::Unknown => {
                println!("{}", "Unknown command. n, p, f, d, s or q.".yellow());
            }
        }
    }

    autosave(session, args);
    let stats = session.stats();
    println!(
        "\nSession ended at step {}. {} of {} words marked familiar.",
        stats.step,
        stats.total - stats.unseen,
        stats.total
    );
}

/// Map an input line to a command. Empty input means "next".
fn parse_command(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        "" | "n" | "next" | "+" => Command::Next,
        "p" | "prev" | "previous" | "-" => Command::Previous,
        "f" | "familiar" | "ok" => Command::Familiar,
        "d" | "details" => Command::Details,
        "s" | "stats" => Command::Stats,
        "q" | "quit" | "exit" => Command::Quit,
        _ => Command::Unknown,
    }
}

/// Save unless --no-save
fn autosave(session: &PracticeSession, args: &Args) {
    if args.no_save || session.is_empty() {
        return;
    }
    if let Err(e) = save_progress(&session.to_progress_file(), &args.progress) {
        eprintln!("{}", format!("Progress save failed: {} [{}]", e, e.code()).red());
    }
}

/// Print header
fn print_header(no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Wordwatch v{}", VERSION);
        println!("========================================");
    } else {
        println!("{}", format!("── Wordwatch v{} ──", VERSION).bold());
    }
    println!();
}

/// Print one card
fn print_card(view: &CardView, args: &Args) {
    if args.json {
        match serde_json::to_string(view) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("JSON error: {}", e),
        }
    } else if args.no_color {
        println!("{}", view.to_parseable_string());
    } else {
        println!("{}", view.to_terminal_string());
        if args.verbose {
            println!("   {}", view.reason.to_string().dimmed());
        }
    }
}

/// Print progress summary
fn print_stats(session: &PracticeSession, args: &Args) {
    let stats = session.stats();
    if args.json {
        match serde_json::to_string_pretty(&stats) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("JSON error: {}", e),
        }
    } else if args.no_color {
        println!("{}", stats.to_parseable_string());
    } else {
        println!("{}", "Progress".bold());
        println!("  words:    {}", stats.total);
        println!("  unseen:   {}", stats.unseen.to_string().bright_white());
        println!("  cooling:  {}", stats.cooling.to_string().cyan());
        println!("  due:      {}", stats.due.to_string().yellow());
        println!("  marks:    {} (max {} on one word)", stats.familiar_marks, stats.max_familiar_count);
        println!("  step:     {}", stats.step);
    }
}

/// Print the next scheduled words
fn print_preview(session: &PracticeSession, count: usize, args: &Args) {
    let words = session.words();
    for (cursor, reason) in session.preview(count) {
        let text = &words[cursor.index].text;
        if args.json {
            println!(
                "{}",
                serde_json::json!({
                    "index": cursor.index,
                    "step": cursor.step,
                    "word": text,
                    "reason": reason,
                })
            );
        } else if args.no_color {
            println!("step={} | index={} | word={} | reason={}", cursor.step, cursor.index, text, reason.code());
        } else {
            let line = format!("{:>6}  {:>4}  {}", cursor.step, cursor.index, text);
            if reason.is_fallback() {
                println!("{}  {}", line, reason.description().red());
            } else {
                println!("{}", line);
            }
        }
    }
}
