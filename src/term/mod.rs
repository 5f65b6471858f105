use crate::mach::{Event, Mode, Runtime};
use crate::{error, lang::Error};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};
use log::info;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Interactive session. Every line runs against the same variables.
pub fn main(mode: Mode) {
    if let Err(error) = main_loop(mode) {
        eprintln!("{}", error);
    }
}

fn main_loop(mode: Mode) -> std::io::Result<()> {
    let mut runtime = Runtime::new(mode);
    let command = Interface::new("bitwise")?;
    command.set_prompt("> ")?;
    command.set_report_signal(Signal::Interrupt, true);

    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string.trim().is_empty() {
            continue;
        }
        runtime.enter(&string);
        command.add_history_unique(string);
        loop {
            match runtime.execute() {
                Event::Stopped => break,
                Event::Print(s) => {
                    command.write_fmt(format_args!("{}", s))?;
                }
                Event::Error(error) => {
                    command.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?;
                }
            }
        }
    }
    Ok(())
}

/// Runs the program in `filename`, writing printed values to `out`.
pub fn run_file<W: Write>(filename: &Path, mode: Mode, out: &mut W) -> Result<(), Error> {
    let source = load(filename)?;
    info!("loaded {} bytes from {}", source.len(), filename.display());
    run(&source, mode, out)
}

/// Runs `source` to completion, writing printed values to `out` as they
/// are produced. Output written before a failure stays written.
pub fn run<W: Write>(source: &str, mode: Mode, out: &mut W) -> Result<(), Error> {
    let mut runtime = Runtime::new(mode);
    runtime.enter(source);
    loop {
        match runtime.execute() {
            Event::Stopped => return Ok(()),
            Event::Print(s) => {
                if let Err(error) = out.write_all(s.as_bytes()).and_then(|_| out.flush()) {
                    return Err(error!(InternalError; error.to_string()));
                }
            }
            Event::Error(error) => return Err(error),
        }
    }
}

fn load(filename: &Path) -> Result<String, Error> {
    match std::fs::read_to_string(filename) {
        Ok(source) => Ok(source),
        Err(error) => {
            let msg = format!("{}: {}", filename.display(), error);
            match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; msg)),
                _ => Err(error!(InternalError; msg)),
            }
        }
    }
}
