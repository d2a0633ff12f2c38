use std::{
    io::{self, Write},
    sync::{Mutex, MutexGuard, OnceLock, RwLock},
    time::Instant,
};

use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(log::LevelFilter::Warn))
}

/// Installs the logger. Messages are held in memory until [`AppLogger::flush_to`], so they
/// don't end up in the middle of an animation frame.
pub fn init(level: log::LevelFilter) {
    let logger = get_logger();
    logger.set_min_level(level);

    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

#[derive(Clone, Debug)]
pub struct Message {
    pub level: log::Level,
    pub pushed: Instant,
    pub message: String,
    pub source: String,
}

pub struct AppLogger {
    min_level: RwLock<log::LevelFilter>,
    started: Instant,
    logs: Mutex<Vec<Message>>,
}

impl AppLogger {
    fn new(min_level: log::LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            started: Instant::now(),
            logs: Mutex::new(Vec::new()),
        }
    }

    pub fn min_level(&self) -> log::LevelFilter {
        *self.min_level.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_min_level(&self, level: log::LevelFilter) {
        *self.min_level.write().unwrap_or_else(|e| e.into_inner()) = level;
    }

    // A panic while holding the lock only loses the message being pushed.
    fn borrow_mut_logs(&self) -> MutexGuard<Vec<Message>> {
        self.logs.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Removes and returns everything logged so far, oldest first.
    pub fn take_logs(&self) -> Vec<Message> {
        std::mem::take(&mut *self.borrow_mut_logs())
    }

    pub fn flush_to(&self, out: &mut impl Write) -> io::Result<()> {
        for log in self.take_logs() {
            let elapsed = log.pushed.duration_since(self.started).as_secs_f32();
            writeln!(
                out,
                "[{:>8.3}s {:<5} {}] {}",
                elapsed, log.level, log.source, log.message
            )?;
        }
        out.flush()
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.borrow_mut_logs().push(Message {
                level: record.level(),
                pushed: Instant::now(),
                message: record.args().to_string(),
                source: record.module_path().unwrap_or("unknown").to_string(),
            });
        }
    }

    fn flush(&self) {}
}
