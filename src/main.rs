use diatonic::{
    analyze, canonicalize_with_policy, interval_between_with, parse, transpose_with_policy,
    EngineConfig, IntervalSpec,
};
use serde::Serialize;
use std::env;
use std::error::Error;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "\
Usage: diatonic [--config <file.yaml>] [--json] <command> [args...]

Commands:
  parse <note>                     Show the parsed spelling
  interval <root> <target>         Interval from root up to target
  transpose <root> <interval>      Spell the note an interval (e.g. P5, m3, d4) above root
  canonicalize <note>...           Order and deduplicate a note set
  analyze [--root <note>] <note>...  Canonical note set with intervals above the root";

fn usage() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let mut config_path: Option<String> = None;
    let mut json = false;

    // Global flags come before the command
    while let Some(first) = args.first().cloned() {
        match first.as_str() {
            "--json" => {
                json = true;
                args.remove(0);
            }
            "--config" => {
                if args.len() < 2 {
                    usage();
                }
                config_path = Some(args.remove(1));
                args.remove(0);
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            _ => break,
        }
    }

    if args.is_empty() {
        usage();
    }

    let config = match &config_path {
        Some(path) => match EngineConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error reading config '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    match run(&args[0], &args[1..], &config, json) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(
    command: &str,
    args: &[String],
    config: &EngineConfig,
    json: bool,
) -> Result<String, Box<dyn Error>> {
    tracing::debug!(command, ?args, "running command");
    match (command, args) {
        ("parse", [token]) => {
            let note = parse(token)?;
            let text = format!(
                "{} (letter {}, {:?}, delta {:+})",
                note,
                note.letter(),
                note.accidental(),
                note.accidental_delta()
            );
            render(&note, text, json)
        }
        ("interval", [root, target]) => {
            let interval = interval_between_with(root, target, config.baseline)?;
            let mut text = format!("{} ({} semitones)", interval.label, interval.semitones);
            if interval.clamped {
                text.push_str(" [clamped]");
            }
            render(&interval, text, json)
        }
        ("transpose", [root, label]) => {
            let spec: IntervalSpec = label.parse()?;
            let transposed = transpose_with_policy(root, spec, config)?;
            let mut text = transposed.spelling.clone();
            if transposed.clamped {
                text.push_str(" [clamped]");
            }
            render(&transposed, text, json)
        }
        ("canonicalize", notes) if !notes.is_empty() => {
            let canonical = canonicalize_with_policy(notes, config)?;
            let text = canonical.join(" ");
            render(&canonical, text, json)
        }
        ("analyze", rest) => {
            let (root, notes) = match rest {
                [flag, root, notes @ ..] if flag == "--root" => (Some(root.as_str()), notes),
                notes => (None, notes),
            };
            if notes.is_empty() {
                usage();
            }
            let report = analyze(notes, root, config)?;
            let mut lines = vec![report.notes.join(" ")];
            if let Some(root) = &report.root {
                lines.push(format!("root {}", root));
                for entry in &report.intervals {
                    lines.push(format!("  {:<4} {}", entry.note, entry.interval));
                }
            }
            if !report.invalid.is_empty() {
                lines.push(format!("invalid: {}", report.invalid.join(" ")));
            }
            render(&report, lines.join("\n"), json)
        }
        _ => usage(),
    }
}

fn render<T: Serialize>(value: &T, text: String, json: bool) -> Result<String, Box<dyn Error>> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text)
    }
}
