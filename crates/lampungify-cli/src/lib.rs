// lampungify-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::process;

use lampungify_aksara::{AksaraError, AksaraHandle};

/// Environment variable holding the tracing filter (when built with `trace`).
pub const TRACE_ENV: &str = "LAMPUNGIFY_LOG";

/// Split a `--exceptions ai,au` value into its pairs. Empty entries are
/// skipped, so `--exceptions ""` clears the set.
pub fn parse_exceptions(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(str::to_string)
        .collect()
}

/// Create an AksaraHandle, optionally with custom diphthongs.
pub fn build_handle(exceptions: Option<&str>) -> Result<AksaraHandle, String> {
    let mut handle = AksaraHandle::new();
    if let Some(value) = exceptions {
        handle
            .set_vowel_pair_exceptions(&parse_exceptions(value))
            .map_err(|e: AksaraError| format!("bad --exceptions: {e}"))?;
    }
    Ok(handle)
}

/// Feed each input line to `f`.
///
/// With positional arguments, they are joined by single spaces into one
/// line. Otherwise lines are read from stdin, trimmed, and empty ones
/// skipped.
pub fn for_each_input<F: FnMut(&str)>(args: &[String], mut f: F) {
    if !args.is_empty() {
        f(&args.join(" "));
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        f(text);
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Install a stderr fmt subscriber filtered by `LAMPUNGIFY_LOG`.
#[cfg(feature = "trace")]
pub fn init_tracing() {
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_target(true)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env(TRACE_ENV).unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("lampungify_aksara=debug")
                }),
            )
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing() {}
