use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

use crate::workspace::Settings;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid log filter '{0}'")]
    Filter(String),
    #[error("logging already initialized: {0}")]
    Init(String),
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. With a log file configured,
/// events are appended there as JSON lines; otherwise they go to stderr.
pub fn init_logging(settings: &Settings) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.log_level)
            .map_err(|_| LoggingError::Filter(settings.log_level.clone()))?,
    };

    let file_layer = match &settings.log_file {
        Some(path) => {
            let make_writer = file_writer(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_timer(UtcTime::rfc_3339())
                    .with_writer(make_writer),
            )
        }
        None => None,
    };

    let stderr_layer = settings.log_file.is_none().then(|| {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|err| LoggingError::Init(err.to_string()))
}

fn file_writer(path: &Path) -> Result<BoxMakeWriter, LoggingError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let file = Arc::new(Mutex::new(file));

    Ok(BoxMakeWriter::new(move || SharedWriter {
        file: Arc::clone(&file),
    }))
}

struct SharedWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("failed to lock log file"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("failed to lock log file"))?;
        file.flush()
    }
}
