use crate::{selector::Part, stepper::Direction};
use enumset::{enum_set, EnumSet, EnumSetType};
use wasm_bindgen::JsCast;

#[derive(Debug, EnumSetType)]
pub enum EventType {
	MouseDown,
	MouseUp,
	MouseLeave,
	TouchStart,
	TouchEnd,
	Wheel,
}

/// Interactions that end a button hold.
pub const RELEASE_EVENTS: EnumSet<EventType> =
	enum_set!(EventType::MouseUp | EventType::MouseLeave | EventType::TouchEnd);

impl EventType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::MouseDown => "mousedown",
			Self::MouseUp => "mouseup",
			Self::MouseLeave => "mouseleave",
			Self::TouchStart => "touchstart",
			Self::TouchEnd => "touchend",
			Self::Wheel => "wheel",
		}
	}
}

/// What a bound listener does when its event fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
	Press(Direction),
	/// Like [`Action::Press`], but also keeps the browser from synthesizing mouse events or scrolling.
	Touch(Direction),
	Release,
	Wheel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
	pub part: Part,
	pub event: EventType,
	pub action: Action,
}

impl Binding {
	/// Listeners that call `preventDefault` must not be registered as passive.
	pub fn prevents_default(&self) -> bool {
		matches!(self.action, Action::Touch(_) | Action::Wheel)
	}
}

/// Every listener a touchspin installs, so binding and unbinding walk the same list.
pub fn bindings() -> Vec<Binding> {
	let buttons = [(Part::Increment, Direction::Up), (Part::Decrement, Direction::Down)];
	let mut bindings = Vec::with_capacity(11);
	for (part, direction) in buttons {
		bindings.push(Binding {
			part,
			event: EventType::MouseDown,
			action: Action::Press(direction),
		});
		bindings.push(Binding {
			part,
			event: EventType::TouchStart,
			action: Action::Touch(direction),
		});
		for event in RELEASE_EVENTS {
			bindings.push(Binding {
				part,
				event,
				action: Action::Release,
			});
		}
	}
	bindings.push(Binding {
		part: Part::Input,
		event: EventType::Wheel,
		action: Action::Wheel,
	});
	bindings
}

/// The parts of a dom event the spinner reacts to.
pub trait InteractionEvent {
	fn cancelable(&self) -> bool;

	fn prevent_default(&self);

	/// Vertical scroll amount, zero for events that are not wheel events.
	fn delta_y(&self) -> f64;
}

impl InteractionEvent for web_sys::Event {
	fn cancelable(&self) -> bool {
		web_sys::Event::cancelable(self)
	}

	fn prevent_default(&self) {
		web_sys::Event::prevent_default(self)
	}

	fn delta_y(&self) -> f64 {
		match self.dyn_ref::<web_sys::WheelEvent>() {
			Some(wheel) => wheel.delta_y(),
			None => 0.0,
		}
	}
}
