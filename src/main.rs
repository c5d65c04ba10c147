//! Moltverify CLI
//!
//! Usage:
//!   moltverify --text "challenge text"       # Solve one challenge
//!   moltverify --interactive                 # Read challenges from stdin
//!   moltverify --verify-file v.json          # Solve + submit once
//!   moltverify --text "..." --json           # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use moltverify::core::{ChallengeSolver, VerifyClient};
use moltverify::types::{SolveOutput, VerificationChallenge};
use moltverify::{DEFAULT_VERIFY_URL, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "moltverify",
    version = VERSION,
    about = "Moltverify - solve garbled Moltbook verification challenges",
    long_about = "Moltverify degarbles Moltbook's 'lobster math' verification\n\
                  challenges and computes the answer to submit.\n\n\
                  Modes:\n  \
                  --text         Solve a single challenge\n  \
                  --interactive  Read challenges from stdin\n  \
                  --verify-file  Solve a verification payload and submit it ONCE\n\n\
                  Submission is strictly one-shot: wrong answers are penalized\n\
                  by Moltbook, so a failed submission is never retried."
)]
struct Args {
    /// Challenge text to solve (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive mode - read challenges from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Verification JSON file with challenge_text and verification_code
    #[arg(long)]
    verify_file: Option<String>,

    /// Moltbook API key (falls back to the MOLTBOOK_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Verification endpoint
    #[arg(long, default_value = DEFAULT_VERIFY_URL)]
    api_url: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Show the pipeline breakdown
    #[arg(long)]
    verbose: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Some(ref path) = args.verify_file {
        run_verify(path, &args).await;
    } else if args.interactive {
        run_interactive(&args);
    } else if let Some(ref text) = args.text {
        run_single(text, &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args);
    }
}

/// Solve a single challenge
fn run_single(text: &str, args: &Args) {
    let solver = ChallengeSolver::new();
    let output = solver.solve_detailed(text);

    print_output(&output, args);
}

/// Interactive mode - solve each stdin line
fn run_interactive(args: &Args) {
    let solver = ChallengeSolver::new();

    if !args.json {
        println!("{}", format!("moltverify v{}", VERSION).bold());
        println!("Paste a challenge and press Enter. Type 'quit' to exit.");
        println!();
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut seen = 0u64;
    let mut solved = 0u64;

    loop {
        if !args.json {
            print!("> ");
            stdout.flush().unwrap();
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        seen += 1;
        let output = solver.solve_detailed(line);
        if output.solved() {
            solved += 1;
        }

        print_output(&output, args);
    }

    if !args.json {
        println!();
        println!("Session ended. Solved {}/{} challenges.", solved, seen);
    }
}

/// Solve a verification payload and submit the answer exactly once
async fn run_verify(path: &str, args: &Args) {
    let api_key = match args
        .api_key
        .clone()
        .or_else(|| std::env::var("MOLTBOOK_API_KEY").ok())
    {
        Some(key) => key,
        None => {
            eprintln!("No API key: pass --api-key or set MOLTBOOK_API_KEY");
            std::process::exit(1);
        }
    };

    let verification: VerificationChallenge = match std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|s| serde_json::from_str(&s).map_err(|e| e.to_string()))
    {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Could not read verification file {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let client = VerifyClient::new(args.api_url.clone());

    // One submission only: wrong answers are penalized upstream.
    match client.verify(&api_key, &verification).await {
        Ok(response) if response.success => {
            println!("{}", "verified".green().bold());
        }
        Ok(response) => {
            let message = response.message.unwrap_or_else(|| "answer rejected".to_string());
            eprintln!("{} {}", "not verified:".red(), message);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{} {}", "verification failed:".red(), e);
            std::process::exit(1);
        }
    }
}

/// Print a solve result in the selected format
fn print_output(output: &SolveOutput, args: &Args) {
    if args.json {
        println!("{}", serde_json::to_string(output).unwrap());
    } else if args.verbose {
        print_verbose(output);
    } else {
        match &output.answer {
            Some(answer) => println!("{}", answer.green().bold()),
            None => println!("{}", "unsolvable".red()),
        }
    }
}

/// Print the pipeline breakdown for one solve
fn print_verbose(output: &SolveOutput) {
    println!("cleaned:  {}", output.cleaned);
    match output.explicit_op {
        Some(op) => println!("explicit: {}", op),
        None => println!("explicit: -"),
    }
    println!("operands: {:?}", output.operands);
    match &output.decision {
        Some(d) => println!("decision: {} via {}", d.operation, d.tier.code()),
        None => println!("decision: {}", "none".dimmed()),
    }
    match &output.answer {
        Some(a) => println!("answer:   {}", a.green().bold()),
        None => println!("answer:   {}", "unsolvable".red()),
    }
}
