mod report;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use painrank::{Post, Profile, Scorer, export_csv_file, filter_min, import_csv_file, rank};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<(), String> {
    let scorer = Scorer::new(config.profile);

    match &config.input {
        Some(path) => {
            let posts = import_csv_file(path)
                .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
            let analyzed = posts.len();
            println!("Scoring {analyzed} posts ({:?} profile)...", scorer.profile());

            let mut scored: Vec<_> = posts.iter().map(|p| scorer.score(p)).collect();
            rank(&mut scored);
            let kept = filter_min(scored, config.min_score);

            report::print_top(&kept, config.top, config.color);
            report::print_stats(analyzed, &kept, config.color);

            if let Some(out) = &config.output {
                export_csv_file(out, &kept)
                    .map_err(|err| format!("failed to write {}: {err}", out.display()))?;
                println!("Exported {} posts to {}", kept.len(), out.display());
            }
            Ok(())
        }
        None => {
            let text = match &config.text {
                Some(value) => value.clone(),
                None => read_stdin_input()?,
            };
            if text.trim().is_empty() {
                return Err(format!("no input provided\n\n{}", help_text()));
            }
            let post = Post { text, ..Post::default() };
            report::print_single(&scorer.score(&post), config.color);
            Ok(())
        }
    }
}

struct CliConfig {
    profile: Profile,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    min_score: u32,
    top: usize,
    text: Option<String>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut profile = Profile::default();
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut min_score: u32 = 0;
    let mut top: usize = 10;
    let mut text: Option<String> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("painrank {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--profile" => {
                let value = args.next().ok_or_else(|| "error: --profile expects a value".to_string())?;
                profile = value.parse().map_err(|err| format!("error: {err}"))?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                input = Some(PathBuf::from(value));
            }
            "--output" | "-o" => {
                let value = args.next().ok_or_else(|| "error: --output expects a value".to_string())?;
                output = Some(PathBuf::from(value));
            }
            "--min-score" => {
                let value = args.next().ok_or_else(|| "error: --min-score expects a value".to_string())?;
                min_score = value
                    .parse()
                    .map_err(|_| format!("error: invalid --min-score '{value}' (expected integer)"))?;
            }
            "--top" => {
                let value = args.next().ok_or_else(|| "error: --top expects a value".to_string())?;
                top = value
                    .parse()
                    .map_err(|_| format!("error: invalid --top '{value}' (expected integer)"))?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if text.is_some() {
                        return Err("error: text provided multiple times".to_string());
                    }
                    text = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--profile=") => {
                let value = arg.trim_start_matches("--profile=");
                profile = value.parse().map_err(|err| format!("error: {err}"))?;
            }
            _ if arg.starts_with("--input=") => {
                input = Some(PathBuf::from(arg.trim_start_matches("--input=")));
            }
            _ if arg.starts_with("--output=") => {
                output = Some(PathBuf::from(arg.trim_start_matches("--output=")));
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if text.is_some() {
                    return Err("error: text provided multiple times".to_string());
                }
                text = Some(rest);
                break;
            }
        }
    }

    if input.is_some() && text.is_some() {
        return Err("error: provide either --input or ad-hoc text, not both".to_string());
    }

    Ok(CliConfig { profile, input, output, min_score, top, text, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn help_text() -> String {
    format!(
        "painrank {version}

Rule-based executive-pain scoring CLI.

Usage:
  painrank [OPTIONS] [--] <text...>
  painrank [OPTIONS] --input <candidates.csv>

Modes:
  With --input, scores every row of a candidate CSV, ranks the results,
  and prints the top matches. Without it, scores the given text (or stdin)
  and prints the breakdown.

Options:
  -i, --input <file>         Candidate posts CSV to score.
  -o, --output <file>        Write ranked results as CSV.
  --min-score <n>            Drop results below this score. Default: 0
  --top <n>                  Number of results to display. Default: 10
  --profile <gated|additive> Scoring policy. Default: gated
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
