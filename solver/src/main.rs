use std::io::{self, BufRead, BufReader, Read};
use std::process::ExitCode;

use alien_alphabet::extract_alphabet_chars;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// one word per line; blank lines are ignored
fn read_words(source: impl Read) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in BufReader::new(source).lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_owned());
        }
    }

    Ok(words)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alien_alphabet=warn,solver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let words = match std::env::args().nth(1).filter(|arg| arg != "-") {
        Some(path) => std::fs::File::open(&path).and_then(read_words),
        None => read_words(io::stdin().lock()),
    };

    let words = match words {
        Ok(words) => words,
        Err(e) => {
            error!(error = %e, "could not read word list");
            return ExitCode::FAILURE;
        }
    };

    info!(words = words.len(), "read word list");
    let alphabet = extract_alphabet_chars(&words);
    println!("{}", alphabet.into_iter().collect::<String>());

    ExitCode::SUCCESS
}
