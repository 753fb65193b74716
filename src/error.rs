use wasm_bindgen::{JsCast, JsValue};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
	#[error("{0}")]
	Dom(String),
	#[error("{0}")]
	Serialization(String),
	#[error("Invalid option {0:?}: {1}")]
	InvalidOption(&'static str, String),
	#[error("Document has no <head> to install the touchspin style into.")]
	MissingHead,
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		if let Some(message) = value.as_string() {
			return Self::Dom(message);
		}
		// DOMExceptions thrown by the browser are also `Error`s
		match value.dyn_ref::<js_sys::Error>() {
			Some(error) => Self::Dom(String::from(error.message())),
			None => Self::Dom(format!("{value:?}")),
		}
	}
}

impl From<serde_wasm_bindgen::Error> for Error {
	fn from(value: serde_wasm_bindgen::Error) -> Self {
		Self::Serialization(value.to_string())
	}
}

impl From<Error> for JsValue {
	fn from(value: Error) -> Self {
		js_sys::Error::new(&value.to_string()).into()
	}
}
