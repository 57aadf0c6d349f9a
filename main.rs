use std::env;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use word_freq::{logging, run, Config};

fn main() -> ExitCode {
    logging::initialize();
    let config = Config::from_args(env::args());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match run(&config, &mut out).and_then(|()| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error writing report: {}", e);
            ExitCode::FAILURE
        }
    }
}
