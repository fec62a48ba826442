// Opt-in file-based diagnostic logging for the interactive binary.
// The TUI owns the terminal, so diagnostics go to a file instead of stderr;
// enable with --debug and watch with `tail -f`.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::SystemTime;

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

const LOG_FILE_PATH: &str = "/tmp/paddlebot-debug.log";

/// Initialize debug logging. With `enabled = false` this is a no-op and
/// `log` calls are silently dropped; otherwise the log file is truncated
/// and held open for the session.
pub fn init(enabled: bool) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(LOG_FILE_PATH)?;

    writeln!(file, "=== Paddlebot Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", LOG_FILE_PATH)?;
    writeln!(file)?;

    if let Ok(mut slot) = LOG_FILE.lock() {
        *slot = Some(file);
    }

    Ok(())
}

/// Append one line to the debug log: `[timestamp] [CATEGORY] message`.
/// Does nothing when logging wasn't enabled at init.
pub fn log(category: &str, message: &str) {
    let Ok(mut slot) = LOG_FILE.lock() else {
        return;
    };
    let Some(file) = slot.as_mut() else {
        return;
    };

    let timestamp = SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis());

    let _ = writeln!(file, "[{:013}] [{}] {}", timestamp, category, message);
}
