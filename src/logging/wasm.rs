use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

#[derive(Clone, Copy, Debug)]
pub struct Config {
	level: LevelFilter,
	prefer_target: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			level: LevelFilter::Info,
			prefer_target: false,
		}
	}
}

impl Config {
	pub fn with_level(mut self, level: LevelFilter) -> Self {
		self.level = level;
		self
	}

	/// Labels each line with the record's target instead of its module path.
	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}

	fn origin<'a>(&self, record: &Record<'a>) -> &'a str {
		match (self.prefer_target, record.module_path()) {
			(false, Some(module_path)) => module_path,
			_ => record.target(),
		}
	}

	pub(crate) fn format(&self, record: &Record) -> String {
		// Levels are padded so that they line up in the console.
		// [ERROR]
		// [ WARN]
		// [ INFO]
		format!("[{:>5}] {}: {}", record.level(), self.origin(record), record.args())
	}
}

struct ConsoleLogger {
	config: Config,
}

impl Log for ConsoleLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= self.config.level
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let line = JsValue::from(self.config.format(record));
		match record.level() {
			Level::Error => web_sys::console::error_1(&line),
			Level::Warn => web_sys::console::warn_1(&line),
			Level::Info => web_sys::console::info_1(&line),
			Level::Debug => web_sys::console::debug_1(&line),
			Level::Trace => web_sys::console::log_1(&line),
		}
	}

	fn flush(&self) {}
}

/// Routes the `log` macros to the browser console. Fails if a logger is already installed.
pub fn init(config: Config) -> Result<(), SetLoggerError> {
	let level = config.level;
	log::set_boxed_logger(Box::new(ConsoleLogger { config }))?;
	log::set_max_level(level);
	Ok(())
}
