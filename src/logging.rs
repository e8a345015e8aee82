//! Structured logging and tracing for Umeme
//!
//! Console output plus an optional daily-rotated log file, both driven by
//! `tracing-subscriber`. Components log through [`StructuredLogger`] so each
//! line carries the component name and, for pipeline runs, the zone.

use crate::config::LoggingConfig;
use crate::error::{Result, UmemeError};
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::Once;
use tracing::{Level, debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Keep the non-blocking worker guard alive for the entire process lifetime
static LOG_GUARD: OnceCell<WorkerGuard> = OnceCell::new();
static INIT_ONCE: Once = Once::new();
static INIT_ERROR: OnceCell<String> = OnceCell::new();

/// Initialize logging system based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    INIT_ONCE.call_once(|| {
        let init_result = (|| -> Result<()> {
            let level = parse_log_level(&config.level)?;
            let filter = build_env_filter(level);

            if should_use_console_only() {
                init_console_only_logging(filter, config.json_format, level);
                return Ok(());
            }

            init_file_logging(config, filter, level)
        })();

        if let Err(e) = init_result {
            let _ = INIT_ERROR.set(e.to_string());
        }
    });

    if let Some(err) = INIT_ERROR.get() {
        return Err(UmemeError::config(err.clone()));
    }
    Ok(())
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("umeme={},tower_http=info,reqwest=warn", level).into())
}

fn should_use_console_only() -> bool {
    cfg!(test) || std::env::var_os("UMEME_DISABLE_FILE_LOG").is_some()
}

fn init_console_only_logging(filter: EnvFilter, json_format: bool, level: Level) {
    let base = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false);
    let console_layer = if json_format {
        base.json().with_filter(LevelFilter::from_level(level)).boxed()
    } else {
        base.with_filter(LevelFilter::from_level(level)).boxed()
    };

    // A global subscriber may already be installed (tests share a process)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();

    info!("Logging initialized - level: {:?}, console-only", level);
}

fn init_file_logging(config: &LoggingConfig, filter: EnvFilter, level: Level) -> Result<()> {
    let file_appender = rolling::Builder::new()
        .rotation(rolling::Rotation::DAILY)
        .filename_prefix("umeme")
        .filename_suffix("log")
        .max_log_files(config.backup_count.max(1) as usize)
        .build(log_directory(&config.file))
        .map_err(|e| UmemeError::io(format!("Failed to create log file appender: {}", e)))?;

    let (non_blocking_appender, guard) = non_blocking(file_appender);
    let _ = LOG_GUARD.set(guard);

    let file_layer = {
        let base = fmt::layer()
            .with_writer(non_blocking_appender)
            .with_target(false)
            .with_ansi(false);
        if config.json_format {
            base.json().with_filter(LevelFilter::from_level(level)).boxed()
        } else {
            base.with_filter(LevelFilter::from_level(level)).boxed()
        }
    };

    let console_layer = config.console_output.then(|| {
        let base = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(false)
            .with_thread_ids(false);
        if config.json_format {
            base.json().with_filter(LevelFilter::from_level(level)).boxed()
        } else {
            base.with_filter(LevelFilter::from_level(level)).boxed()
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| UmemeError::config(format!("Failed to install subscriber: {}", e)))?;

    info!(
        "Logging initialized - level: {:?}, file: {}, console: {}",
        level, config.file, config.console_output
    );
    Ok(())
}

/// Directory receiving rotated files: the parent when `file` looks like a
/// file path, `file` itself otherwise
fn log_directory(file: &str) -> &Path {
    let p = Path::new(file);
    if p.extension().is_some() {
        p.parent()
            .filter(|d| !d.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    } else {
        p
    }
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.trim().to_uppercase().as_str() {
        "TRACE" => Ok(Level::TRACE),
        "DEBUG" => Ok(Level::DEBUG),
        "INFO" => Ok(Level::INFO),
        "WARN" | "WARNING" => Ok(Level::WARN),
        "ERROR" => Ok(Level::ERROR),
        _ => Err(UmemeError::config(format!(
            "Invalid log level: {}",
            level_str
        ))),
    }
}

/// Context information for log messages
#[derive(Debug, Clone)]
pub struct LogContext {
    /// Component name (e.g., "acquisition", "dashboard", "web")
    pub component: String,

    /// Grid zone the message concerns
    pub zone: Option<String>,

    /// Additional context fields
    pub extra_fields: Vec<(String, String)>,
}

impl LogContext {
    /// Create a new log context
    pub fn new(component: &str) -> Self {
        Self {
            component: component.to_string(),
            zone: None,
            extra_fields: Vec::new(),
        }
    }

    pub fn with_zone(mut self, zone: &str) -> Self {
        self.zone = Some(zone.to_string());
        self
    }

    /// Add extra field
    pub fn with_field(mut self, key: &str, value: String) -> Self {
        self.extra_fields.push((key.to_string(), value));
        self
    }
}

/// Structured logger with context
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    context: LogContext,
}

impl StructuredLogger {
    /// Create a new structured logger with context
    pub fn new(context: LogContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &LogContext {
        &self.context
    }

    pub fn info(&self, message: &str) {
        let fields = self.format_fields();
        info!(%fields, "{}", message);
    }

    pub fn warn(&self, message: &str) {
        let fields = self.format_fields();
        warn!(%fields, "{}", message);
    }

    pub fn error(&self, message: &str) {
        let fields = self.format_fields();
        error!(%fields, "{}", message);
    }

    pub fn debug(&self, message: &str) {
        let fields = self.format_fields();
        debug!(%fields, "{}", message);
    }

    fn format_fields(&self) -> String {
        let mut fields = vec![format!("component={}", self.context.component)];

        if let Some(ref zone) = self.context.zone {
            fields.push(format!("zone={}", zone));
        }

        for (key, value) in &self.context.extra_fields {
            fields.push(format!("{}={}", key, value));
        }

        fields.join(",")
    }
}

/// Create a logger for a specific component
pub fn get_logger(component: &str) -> StructuredLogger {
    StructuredLogger::new(LogContext::new(component))
}

/// Create a logger with full context
pub fn get_logger_with_context(context: LogContext) -> StructuredLogger {
    StructuredLogger::new(context)
}
