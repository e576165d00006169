use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File name of the log inside the data directory
pub const LOG_FILE: &str = "chronicle.log";

/// Maximum log file size before rotation (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Size to keep after rotation (1 MB of most recent logs)
const KEEP_SIZE: u64 = 1024 * 1024;

/// Rotate log file if it exceeds `max_size`, keeping only the most recent
/// `keep_size` bytes starting at a line boundary.
fn rotate_log_if_needed(log_path: &Path, max_size: u64, keep_size: u64) -> io::Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let file_size = fs::metadata(log_path)?.len();
    if file_size <= max_size {
        return Ok(());
    }

    let mut file = File::open(log_path)?;
    file.seek(SeekFrom::Start(file_size.saturating_sub(keep_size)))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    drop(file);

    // Skip to the first newline to avoid partial lines
    let skip = buffer
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut file = File::create(log_path)?;
    file.write_all(b"--- Log rotated (older entries removed) ---\n")?;
    file.write_all(&buffer[skip..])?;

    Ok(())
}

/// A writer factory that produces writers for the shared log file
#[derive(Clone)]
struct LogWriterFactory {
    file: Arc<Mutex<File>>,
}

impl LogWriterFactory {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

/// A writer that holds a reference to the shared file
struct LogWriter {
    file: Arc<Mutex<File>>,
}

impl LogWriter {
    fn lock(&self) -> io::Result<MutexGuard<'_, File>> {
        self.file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.flush()
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            file: self.file.clone(),
        }
    }
}

/// Filter used when `RUST_LOG` is unset. The engine crate logs at the same
/// level as the app so calendar and event creation reach the log file.
fn default_filter(level: &str) -> String {
    format!("chronicle={level},chronicle_core={level}")
}

/// Initialize logging to write to a file in the data directory.
///
/// Logs are written to `{data_dir}/chronicle.log` with size-based rotation.
/// When the log exceeds 5MB, older entries are removed keeping only the last 1MB.
/// The log level can be controlled via the `level` parameter or the `RUST_LOG` environment variable.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE);

    if let Err(e) = rotate_log_if_needed(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: Failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(LogWriterFactory::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!(log_path = %log_path.display(), "Chronicle logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rotate_keeps_recent_lines() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join(LOG_FILE);
        let content: String = (0..100).map(|i| format!("line {i:03}\n")).collect();
        fs::write(&log_path, &content).unwrap();

        rotate_log_if_needed(&log_path, 500, 100).unwrap();

        let rotated = fs::read_to_string(&log_path).unwrap();
        assert!(rotated.starts_with("--- Log rotated"));
        assert!(rotated.ends_with("line 099\n"));
        assert!(!rotated.contains("line 000"));
        // Every kept line is whole
        assert!(rotated.lines().skip(1).all(|l| l.starts_with("line ")));
    }

    #[test]
    fn test_small_log_is_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join(LOG_FILE);
        fs::write(&log_path, "short\n").unwrap();

        rotate_log_if_needed(&log_path, 500, 100).unwrap();
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "short\n");
    }

    #[test]
    fn test_missing_log_is_fine() {
        let temp_dir = TempDir::new().unwrap();
        assert!(rotate_log_if_needed(&temp_dir.path().join(LOG_FILE), 500, 100).is_ok());
    }

    #[test]
    fn test_log_writer_appends() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join(LOG_FILE);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .unwrap();

        let factory = LogWriterFactory::new(file);
        factory.make_writer().write_all(b"first\n").unwrap();
        factory.make_writer().write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(&log_path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_default_filter_keeps_core_info() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join(LOG_FILE);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .unwrap();

        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new(default_filter("info")))
            .with(
                fmt::layer()
                    .with_writer(LogWriterFactory::new(file))
                    .with_ansi(false),
            );
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "chronicle_core::wizard", name = "Harptos", "calendar created");
            tracing::debug!(target: "chronicle_core::model::config", "hidden at info");
            tracing::info!(target: "chronicle::app", "app event");
        });

        let logged = fs::read_to_string(&log_path).unwrap();
        assert!(logged.contains("calendar created"));
        assert!(logged.contains("app event"));
        assert!(!logged.contains("hidden at info"));
    }
}
