use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub enum LogOutput {
    Stdout,
    Stderr,
}

pub struct Logger {
    pub write_to_file: bool,
    pub write_to_std: Option<LogOutput>,
    pub severity: Level,
    pub file: Option<Arc<Mutex<File>>>,
    pub enable_colors: bool,
}

impl Logger {
    /// Create a new logger
    pub fn new(
        file_path: Option<PathBuf>,
        severity: Option<Level>,
        write_to_std: Option<LogOutput>,
        write_to_file: bool,
        enable_colors: bool,
    ) -> Self {
        let path = file_path.or_else(|| {
            std::env::var_os("PLAINWIKI_LOG_FILE").map(PathBuf::from)
        });
        let mut file = None;

        // Create log directory if it doesn't exist
        if let Some(path_ref) = path.as_ref() {
            if let Some(parent) = path_ref.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
        }

        if write_to_file {
            if let Some(path_ref) = path.as_ref() {
                file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path_ref)
                    .ok()
                    .map(|f| Arc::new(Mutex::new(f)));
            }
        }

        Logger {
            write_to_file,
            write_to_std,
            severity: severity.unwrap_or(Level::Info),
            file,
            enable_colors,
        }
    }

    /// Get current timestamp as an RFC 3339 string
    fn get_timestamp() -> String {
        OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("-"))
    }

    /// Get color code for log level
    fn get_color(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1b[31m", // Red
            Level::Warn => "\x1b[33m",  // Yellow
            Level::Info => "\x1b[36m",  // Cyan
            Level::Debug => "\x1b[35m", // Magenta
            Level::Trace => "\x1b[37m", // White
        }
    }

    /// Get reset color code
    fn get_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Initialize logger with environment variables
    pub fn init() -> Result<(), log::SetLoggerError> {
        let severity = std::env::var("PLAINWIKI_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string())
            .parse::<Level>()
            .unwrap_or(Level::Info);

        let write_to_std = Some(LogOutput::Stderr);
        let write_to_file = std::env::var_os("PLAINWIKI_LOG_FILE").is_some();
        let enable_colors = std::env::var("NO_COLOR").is_err();

        let logger = Logger::new(
            None,
            Some(severity),
            write_to_std,
            write_to_file,
            enable_colors,
        );
        log::set_max_level(LevelFilter::Trace);
        log::set_logger(Box::leak(Box::new(logger)))?;
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Dependencies only get through at warn or above
        let limit = if metadata.target().starts_with(env!("CARGO_CRATE_NAME")) {
            self.severity
        } else {
            self.severity.min(Level::Warn)
        };
        metadata.level() <= limit
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Self::get_timestamp();
        let level_str = record.level().as_str();
        let target = record.target();
        let args = record.args();

        let formatted_message = if self.enable_colors {
            let color = Self::get_color(record.level());
            let reset = Self::get_reset();
            format!("{color}[{timestamp}] {level_str:<5}{reset} {target}: {args}\n")
        } else {
            format!("[{timestamp}] {level_str:<5} {target}: {args}\n")
        };

        // Write to stdout/stderr
        if let Some(write_to_std) = &self.write_to_std {
            match write_to_std {
                LogOutput::Stdout => {
                    let _ = std::io::stdout().write_all(formatted_message.as_bytes());
                }
                LogOutput::Stderr => {
                    let _ = std::io::stderr().write_all(formatted_message.as_bytes());
                }
            }
        }

        // Write to file (without colors)
        if self.write_to_file {
            if let Some(file) = &self.file {
                if let Ok(mut file_guard) = file.lock() {
                    let file_message = format!("[{timestamp}] {level_str:<5} {target}: {args}");
                    let _ = writeln!(file_guard, "{file_message}");
                }
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }
}
