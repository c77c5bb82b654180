#[macro_use]
extern crate log;
pub mod pipeline;
pub mod rvg_commands;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Open a file for reading. `-` is the standard input.
pub fn open_input(path: &Path) -> std::io::Result<Box<dyn Read>> {
    if path == Path::new("-") {
        Ok(Box::new(BufReader::new(std::io::stdin())))
    } else {
        let file = std::fs::File::open(path).map_err(|why| with_path(path, why))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Create a file for writing. `-` is the standard output.
pub fn create_output(path: &Path) -> std::io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        Ok(Box::new(BufWriter::new(std::io::stdout())))
    } else {
        let file = std::fs::File::create(path).map_err(|why| with_path(path, why))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

/// Prefix an error message with the file it is about.
pub fn with_path<E: Into<std::io::Error>>(path: &Path, why: E) -> std::io::Error {
    let why: std::io::Error = why.into();
    std::io::Error::new(why.kind(), format!("{}: {}", path.display(), why))
}

/// Log level from the number of `-v`.
pub fn log_level(verbose: usize) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn set_threads(threads: usize) {
    debug!("Set Threads\t{}", threads);
    if let Err(why) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        debug!("{:?} The global pool was already built.", why);
    }
}
