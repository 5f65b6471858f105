use bitwise::mach::Mode;
use bitwise::term;
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

/// Runs bitwise programs. Starts an interactive session when no file is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Only check that the program parses.
    #[arg(short, long)]
    check: bool,

    /// Log more detail to the terminal. Repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(error) = SimpleLogger::new().with_level(level).init() {
        eprintln!("{}", error);
    }

    let mode = if args.check {
        Mode::Recognize
    } else {
        Mode::Evaluate
    };

    match args.file {
        Some(file) => {
            let stdout = std::io::stdout();
            if let Err(error) = term::run_file(&file, mode, &mut stdout.lock()) {
                eprintln!("{}", error);
                std::process::exit(1);
            }
        }
        None => term::main(mode),
    }
}
