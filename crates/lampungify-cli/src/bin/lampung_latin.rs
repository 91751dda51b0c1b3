// lampung-latin: Decode aksara marker text back into Latin.
//
// Best effort: the result is not guaranteed to match the text the markers
// were made from.
//
// Usage:
//   lampung-latin [TEXT...]

use std::io::{self, Write};

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lampung-latin",
    version,
    about = "Decode aksara marker text into Latin (best effort)"
)]
struct Cli {
    /// Marker text to decode (reads stdin lines when absent)
    text: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    lampungify_cli::init_tracing();

    let handle = lampungify_aksara::AksaraHandle::new();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    lampungify_cli::for_each_input(&cli.text, |line| {
        let _ = writeln!(out, "{}", handle.to_latin(line));
    });
}
