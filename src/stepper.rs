use crate::Error;
use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};
use web_sys::HtmlInputElement;

#[wasm_bindgen]
extern "C" {
	/// `HtmlInputElement` with the `stepUp`/`stepDown` methods web-sys does not bind.
	#[wasm_bindgen(extends = HtmlInputElement)]
	type NumberInput;

	#[wasm_bindgen(method, catch, js_name = stepUp)]
	fn step_up(this: &NumberInput) -> Result<(), JsValue>;

	#[wasm_bindgen(method, catch, js_name = stepDown)]
	fn step_down(this: &NumberInput) -> Result<(), JsValue>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
	Up,
	Down,
}

impl Direction {
	/// Scrolling away from the user (negative delta) steps up, anything else steps down.
	pub fn from_wheel_delta(delta_y: f64) -> Self {
		match delta_y < 0.0 {
			true => Self::Up,
			false => Self::Down,
		}
	}
}

/// Something with a value that can be nudged one step at a time.
pub trait Steppable {
	fn current_value(&self) -> String;

	fn apply_step(&self, direction: Direction) -> Result<(), Error>;

	/// Announces that the value was changed by a step.
	fn notify_change(&self) -> Result<(), Error>;
}

impl Steppable for HtmlInputElement {
	fn current_value(&self) -> String {
		self.value()
	}

	fn apply_step(&self, direction: Direction) -> Result<(), Error> {
		// Throws for input types that have no notion of a step (e.g. `text`).
		let input = self.unchecked_ref::<NumberInput>();
		match direction {
			Direction::Up => input.step_up()?,
			Direction::Down => input.step_down()?,
		}
		Ok(())
	}

	fn notify_change(&self) -> Result<(), Error> {
		let init = web_sys::EventInit::new();
		init.set_bubbles(true);
		let event = web_sys::Event::new_with_event_init_dict("change", &init)?;
		self.dispatch_event(&event)?;
		Ok(())
	}
}
