use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Append one invocation record to the runtime log: chain length, worker
/// count, per-family wall-clock seconds (−1 for skipped families) and the
/// run date.
pub fn append_runtime(
    path: &Path,
    chain_length: usize,
    workers: usize,
    seconds: [f64; 3],
) -> io::Result<()> {
    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    let date = chrono::Local::now().format("%Y-%m-%d");
    writeln!(
        f,
        "{}, {}, {}, {}, {}, {}",
        chain_length, workers, seconds[0], seconds[1], seconds[2], date
    )
}
