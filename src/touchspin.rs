use crate::{
	event::bindings,
	selector::Part,
	spinner::Spinner,
	style,
	timer::BrowserScheduler,
	Error, Options,
};
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlInputElement};

/// The elements of a touchspin found under its container.
#[derive(Clone, Debug, Default)]
pub struct Parts {
	pub input: Option<HtmlInputElement>,
	pub increment: Option<Element>,
	pub decrement: Option<Element>,
}

impl Parts {
	pub fn query(container: &Element) -> Self {
		let find = |part: Part| container.query_selector(&part.selector()).ok().flatten();
		Self {
			input: find(Part::Input).and_then(|element| element.dyn_into::<HtmlInputElement>().ok()),
			increment: find(Part::Increment),
			decrement: find(Part::Decrement),
		}
	}

	pub fn target(&self, part: Part) -> Option<&EventTarget> {
		match part {
			Part::Input => self.input.as_ref().map(|input| {
				let target: &EventTarget = input;
				target
			}),
			Part::Increment => self.increment.as_ref().map(|button| {
				let target: &EventTarget = button;
				target
			}),
			Part::Decrement => self.decrement.as_ref().map(|button| {
				let target: &EventTarget = button;
				target
			}),
		}
	}

	/// True if there is an input, and the user is allowed to edit it.
	pub fn is_editable(&self) -> bool {
		match &self.input {
			Some(input) => !input.read_only() && !input.disabled(),
			None => false,
		}
	}
}

/// A numeric input with increment/decrement buttons, bound to the dom.
///
/// Listeners stay bound until [`Touchspin::clean_up`] is called or the touchspin is dropped.
pub struct Touchspin {
	parts: Parts,
	options: Options,
	spinner: Option<Spinner<HtmlInputElement, BrowserScheduler>>,
	listeners: Vec<EventListener>,
}

impl Touchspin {
	/// Finds the input and buttons under `container`, installs the shared style,
	/// and binds listeners if the input can be edited.
	pub fn new(container: &Element, options: Options) -> Result<Self, Error> {
		options.validate()?;

		let document = container.owner_document().unwrap_or_else(gloo_utils::document);
		if let Err(err) = style::install(&document) {
			log::error!(target: "touchspin", "{err}");
		}

		let mut touchspin = Self {
			parts: Parts::query(container),
			options,
			spinner: None,
			listeners: Vec::new(),
		};
		if touchspin.parts.is_editable() {
			touchspin.clean_up();
			touchspin.bind();
		} else {
			log::debug!(target: "touchspin", "Input is missing, read-only, or disabled; not binding listeners.");
		}
		Ok(touchspin)
	}

	pub fn parts(&self) -> &Parts {
		&self.parts
	}

	pub fn is_bound(&self) -> bool {
		!self.listeners.is_empty()
	}

	fn bind(&mut self) {
		let Some(input) = self.parts.input.clone() else {
			return;
		};
		let spinner = Spinner::new(input, BrowserScheduler, self.options);
		for binding in bindings() {
			let Some(target) = self.parts.target(binding.part) else {
				continue;
			};
			let listener_options = match binding.prevents_default() {
				true => EventListenerOptions::enable_prevent_default(),
				false => EventListenerOptions::default(),
			};
			let spinner = spinner.clone();
			let action = binding.action;
			self.listeners.push(EventListener::new_with_options(
				target,
				binding.event.as_str(),
				listener_options,
				move |event| spinner.handle(action, event),
			));
		}
		log::debug!(target: "touchspin", "Bound {} listeners", self.listeners.len());
		self.spinner = Some(spinner);
	}

	/// Removes every listener and stops any hold in progress. Does nothing if nothing was bound.
	pub fn clean_up(&mut self) {
		self.listeners.clear();
		if let Some(spinner) = self.spinner.take() {
			spinner.clear_timers();
		}
	}
}
