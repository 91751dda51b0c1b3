// lampung-font: Print the CSS class for a Lampung script font.
//
// Unknown or missing names print the default (Suarnadipa) class.
//
// Usage:
//   lampung-font [--json] [--list] [NAME...]

use clap::Parser;
use serde::Serialize;

use lampungify_aksara::{Font, resolve_font};

#[derive(Parser)]
#[command(
    name = "lampung-font",
    version,
    about = "Resolve a Lampung script font name to its CSS class"
)]
struct Cli {
    /// Print {"class": ...} instead of the bare class
    #[arg(long)]
    json: bool,
    /// List the known fonts and their classes
    #[arg(long)]
    list: bool,
    /// Font display name, e.g. "Lampung Kaganga"
    name: Vec<String>,
}

#[derive(Serialize)]
struct FontClassOutput<'a> {
    class: &'a str,
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        for font in Font::ALL {
            println!("{}\t{}", font.display_name(), font.class().class);
        }
        return;
    }

    let name = (!cli.name.is_empty()).then(|| cli.name.join(" "));
    let font = resolve_font(name.as_deref());

    if cli.json {
        let output = FontClassOutput { class: font.class };
        match serde_json::to_string(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => lampungify_cli::fatal(&format!("failed to serialize: {e}")),
        }
    } else {
        println!("{}", font.class);
    }
}
