use std::io::{Read, Write};

use verbund_tagconf::{Config, Error, Parser};

fn main() {
    if let Err(err) = main_err() {
        eprintln!("error: {err}");
    }
}

#[derive(Debug, thiserror::Error)]
enum DumpError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] Error),
}

fn main_err() -> Result<(), DumpError> {
    let lenient = std::env::args().any(|arg| arg == "--lenient");

    let mut input = String::new();
    std::io::stdin().lock().read_to_string(&mut input)?;

    let config = Config::default()
        .check_close_tags(!lenient)
        .reject_duplicate_keys(!lenient);
    let parser = Parser::new(config);
    let section = parser.parse(&input)?;

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    write!(stdout, "{section}")?;
    stdout.flush()?;
    Ok(())
}
