use std::io::{Read, Write};

use verbund_calc::{Calculator, Config};

fn main() {
    if let Err(err) = main_err() {
        eprintln!("error: {err}");
    }
}

fn main_err() -> std::io::Result<()> {
    let mut input = String::new();
    std::io::stdin().lock().read_to_string(&mut input)?;

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    let calculator = Calculator::new(Config::default());

    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match calculator.parse(line) {
            Ok(expr) => match expr.eval() {
                Ok(value) => writeln!(stdout, "{expr} = {value}")?,
                Err(err) => writeln!(stdout, "{expr}: {err}")?,
            },
            Err(err) => eprintln!("line {}: {err}", index + 1),
        }
    }

    stdout.flush()
}
