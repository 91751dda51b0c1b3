// lampung-syllabify: Split Latin Lampung words into syllables.
//
// Every word of the input is printed on its own line with its syllables
// joined by the separator. With --json each input line becomes one JSON array
// holding the syllable arrays of its words.
//
// Usage:
//   lampung-syllabify [--separator SEP] [--exceptions ai,au] [--json] [WORD...]

use std::io::{self, Write};

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lampung-syllabify",
    version,
    about = "Split Latin Lampung words into syllables"
)]
struct Cli {
    /// Separator printed between syllables
    #[arg(long, default_value = "-")]
    separator: String,
    /// Comma-separated vowel pairs kept together as diphthongs
    #[arg(long, value_name = "PAIRS")]
    exceptions: Option<String>,
    /// Print one JSON array per input line
    #[arg(long)]
    json: bool,
    /// Words to syllabify (reads stdin lines when absent)
    words: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    lampungify_cli::init_tracing();

    let handle = lampungify_cli::build_handle(cli.exceptions.as_deref())
        .unwrap_or_else(|e| lampungify_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    lampungify_cli::for_each_input(&cli.words, |line| {
        let words = handle.syllabify_text(line);
        if cli.json {
            match serde_json::to_string(&words) {
                Ok(json) => {
                    let _ = writeln!(out, "{json}");
                }
                Err(e) => lampungify_cli::fatal(&format!("failed to serialize: {e}")),
            }
            return;
        }
        for (word, syllables) in line.split(' ').zip(&words) {
            if word.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{word}\t{}", syllables.join(&cli.separator));
        }
    });
}
