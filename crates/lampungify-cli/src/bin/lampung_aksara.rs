// lampung-aksara: Transliterate Latin Lampung text into aksara marker text.
//
// Reads text from the arguments, or from stdin one line at a time, and prints
// the marker text for each line. With --syllables the syllable split of every
// word is printed before the encoding.
//
// Usage:
//   lampung-aksara [--exceptions ai,au] [--syllables] [TEXT...]

use std::io::{self, Write};

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lampung-aksara",
    version,
    about = "Transliterate Latin Lampung text into aksara marker text"
)]
struct Cli {
    /// Comma-separated vowel pairs kept together as diphthongs
    #[arg(long, value_name = "PAIRS")]
    exceptions: Option<String>,
    /// Also print the syllables of every word
    #[arg(long)]
    syllables: bool,
    /// Text to transliterate (reads stdin lines when absent)
    text: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    lampungify_cli::init_tracing();

    let handle = lampungify_cli::build_handle(cli.exceptions.as_deref())
        .unwrap_or_else(|e| lampungify_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    lampungify_cli::for_each_input(&cli.text, |line| {
        if cli.syllables {
            let words: Vec<String> = handle
                .syllabify_text(line)
                .iter()
                .map(|syllables| syllables.join("-"))
                .collect();
            let _ = writeln!(out, "# {}", words.join(" "));
        }
        let _ = writeln!(out, "{}", handle.to_aksara(line));
    });
}
