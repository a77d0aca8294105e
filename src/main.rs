use std::{io::stdout, process::ExitCode};

use ansi_term::{Color, Style};

fn main() -> ExitCode {
    let stdout = stdout();
    let mut out = stdout.lock();

    match melodies::run(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!(
                "{}: {}",
                Style::new().bold().paint("Error"),
                Color::Red.paint(err.to_string())
            );
            ExitCode::FAILURE
        }
    }
}
