use crate::Error;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Timing of a press-and-hold spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
	/// Milliseconds a button must be held before repeating starts.
	pub delay: u32,
	/// Milliseconds between repeated steps.
	pub interval: u32,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			delay: 300,
			interval: 50,
		}
	}
}

impl Options {
	pub fn with_delay(mut self, delay: u32) -> Self {
		self.delay = delay;
		self
	}

	pub fn with_interval(mut self, interval: u32) -> Self {
		self.interval = interval;
		self
	}

	pub fn validate(&self) -> Result<(), Error> {
		if self.interval == 0 {
			return Err(Error::InvalidOption("interval", "must be greater than zero".into()));
		}
		Ok(())
	}

	/// Reads options passed from javascript, where `undefined` and `null` mean defaults.
	pub fn from_js(value: JsValue) -> Result<Self, Error> {
		if value.is_undefined() || value.is_null() {
			return Ok(Self::default());
		}
		let options: Self = serde_wasm_bindgen::from_value(value)?;
		options.validate()?;
		Ok(options)
	}
}
