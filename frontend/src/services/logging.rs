use log::{Level, LevelFilter, Log, Metadata, Record};

/// Browser console logging with a component tag, e.g. `[booking] ...`
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        gloo::console::debug!(format!("[{}] {}", component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(format!("[{}] {}", component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(format!("[{}] {}", component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(format!("[{}] {}", component, message));
    }
}

/// Routes the backend's `log` records to the browser console
struct ConsoleLog;

static CONSOLE_LOG: ConsoleLog = ConsoleLog;

impl Log for ConsoleLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let component = record.module_path().unwrap_or("backend");
        let message = record.args().to_string();
        match record.level() {
            Level::Error => Logger::error_with_component(component, &message),
            Level::Warn => Logger::warn_with_component(component, &message),
            Level::Info => Logger::info_with_component(component, &message),
            Level::Debug | Level::Trace => Logger::debug_with_component(component, &message),
        }
    }

    fn flush(&self) {}
}

/// Install the console bridge; later calls are no-ops
pub fn init(level: LevelFilter) {
    if log::set_logger(&CONSOLE_LOG).is_ok() {
        log::set_max_level(level);
    }
}
