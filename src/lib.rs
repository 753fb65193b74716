use std::str::FromStr;
use wasm_bindgen::prelude::*;

pub mod components;
mod error;
pub use error::*;
pub mod event;
pub mod logging;
mod options;
pub use options::*;
pub mod selector;
mod spinner;
pub use spinner::*;
pub mod stepper;
pub mod style;
pub mod timer;
mod touchspin;
pub use touchspin::*;

/// Javascript handle to a [`Touchspin`].
///
/// ```js
/// const touchspin = new InputTouchspin(document.querySelector('.touchspin'), { delay: 400 });
/// touchspin.cleanUp();
/// ```
#[wasm_bindgen(js_name = InputTouchspin)]
pub struct InputTouchspin {
	touchspin: Touchspin,
}

#[wasm_bindgen(js_class = InputTouchspin)]
impl InputTouchspin {
	#[wasm_bindgen(constructor)]
	pub fn new(target: &web_sys::Element, options: JsValue) -> Result<InputTouchspin, JsValue> {
		let options = Options::from_js(options)?;
		let touchspin = Touchspin::new(target, options)?;
		Ok(Self { touchspin })
	}

	#[wasm_bindgen(js_name = cleanUp)]
	pub fn clean_up(&mut self) {
		self.touchspin.clean_up();
	}
}

/// Sends touchspin logging to the browser console, at `level` (default `info`) and above.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) -> Result<(), JsValue> {
	let level = match level {
		None => log::LevelFilter::Info,
		Some(level) => log::LevelFilter::from_str(&level)
			.map_err(|_| Error::InvalidOption("level", format!("unknown log level {level:?}")))?,
	};
	logging::wasm::init(logging::wasm::Config::default().with_level(level).prefer_target())
		.map_err(|err| JsValue::from(Error::Dom(err.to_string())))
}
