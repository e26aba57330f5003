#![forbid(unsafe_code)]

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Level { Error = 1, Warn = 2, Info = 3, Debug = 4, Trace = 5 }

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    fn ansi(&self) -> &'static str {
        match self {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[32m",
            Level::Debug => "\x1b[34m",
            Level::Trace => "\x1b[35m",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LevelFilter { Off = 0, Error = 1, Warn = 2, Info = 3, Debug = 4, Trace = 5 }

impl LevelFilter {
    fn from_index(value: u8) -> LevelFilter {
        match value {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

impl std::str::FromStr for LevelFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(LevelFilter::Off),
            "error" => Ok(LevelFilter::Error),
            "warn" | "warning" => Ok(LevelFilter::Warn),
            "info" => Ok(LevelFilter::Info),
            "debug" => Ok(LevelFilter::Debug),
            "trace" => Ok(LevelFilter::Trace),
            _ => Err(()),
        }
    }
}

pub struct Record<'a> {
    pub level: Level,
    pub target: &'a str,
    pub args: fmt::Arguments<'a>,
}

pub trait Log: Sync + Send + 'static {
    fn enabled(&self, level: Level) -> bool;
    fn log(&self, record: &Record);
}

static LOGGER: OnceLock<&'static dyn Log> = OnceLock::new();
static MAX_LEVEL: AtomicU8 = AtomicU8::new(LevelFilter::Info as u8);

pub fn set_logger<L: Log>(logger: &'static L) -> Result<(), ()> {
    LOGGER.set(logger).map_err(|_| ())
}

pub fn set_max_level(filter: LevelFilter) {
    MAX_LEVEL.store(filter as u8, Ordering::Relaxed);
}

pub fn max_level() -> LevelFilter {
    LevelFilter::from_index(MAX_LEVEL.load(Ordering::Relaxed))
}

// Target of every logging macro. A level above the filter drops here, before
// any formatting work happens in the sink.
pub fn dispatch(level: Level, target: &str, args: fmt::Arguments) {
    if level as u8 > max_level() as u8 {
        return;
    }

    let Some(logger) = LOGGER.get() else {
        return;
    };

    if logger.enabled(level) {
        logger.log(&Record { level, target, args });
    }
}

#[macro_export]
macro_rules! log {
    ($lvl:expr, $($arg:tt)+) => {
        $crate::log::dispatch($lvl, module_path!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log::dispatch($crate::log::Level::Error, module_path!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::log::dispatch($crate::log::Level::Warn, module_path!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log::dispatch($crate::log::Level::Info, module_path!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log::dispatch($crate::log::Level::Debug, module_path!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::log::dispatch($crate::log::Level::Trace, module_path!(), format_args!($($arg)+))
    };
}

pub use crate::{debug, error, info, log, trace, warn};

struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, _level: Level) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut out = std::io::stderr().lock();
        let _ = writeln!(
            out,
            "{} {}{:<5}\x1b[0m {} - {}",
            timestamp(),
            record.level.ansi(),
            record.level.label(),
            record.target,
            record.args
        );
    }
}

// Unix seconds to a civil date via era arithmetic, so no per-year loop and no
// leap table.
fn timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    let secs = now.as_secs() as i64;

    let z = secs.div_euclid(86_400) + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);

    let of_day = secs.rem_euclid(86_400);

    format!(
        "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}",
        of_day / 3_600,
        (of_day / 60) % 60,
        of_day % 60
    )
}

pub struct Builder {
    filter: LevelFilter,
}

impl Builder {
    pub fn new() -> Self {
        Builder { filter: LevelFilter::Info }
    }

    pub fn filter_level(mut self, filter: LevelFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Install the stderr sink. RUST_LOG, when set to a known level name,
    /// overrides the built filter.
    pub fn init(self) {
        let filter = std::env::var("RUST_LOG")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(self.filter);
        set_max_level(filter);

        static SINK: OnceLock<SimpleLogger> = OnceLock::new();
        let _ = set_logger(SINK.get_or_init(|| SimpleLogger));
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

pub fn init() {
    Builder::new().init();
}
