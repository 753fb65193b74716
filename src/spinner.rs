use crate::{
	event::{Action, InteractionEvent},
	stepper::{Direction, Steppable},
	timer::{HoldTimers, Scheduler},
	Options,
};
use std::{
	cell::RefCell,
	rc::{Rc, Weak},
};

/// Steps a target once per interaction, and repeatedly while a button is held.
///
/// Clones share the same target and timers. Pending timers only hold weak references,
/// so they are cancelled once the last clone is dropped.
pub struct Spinner<T, S: Scheduler> {
	inner: Rc<Inner<T, S>>,
}

struct Inner<T, S: Scheduler> {
	target: T,
	scheduler: S,
	options: Options,
	timers: RefCell<HoldTimers<S>>,
}

impl<T, S: Scheduler> Clone for Spinner<T, S> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<T, S> Spinner<T, S>
where
	T: Steppable + 'static,
	S: Scheduler,
{
	pub fn new(target: T, scheduler: S, options: Options) -> Self {
		Self {
			inner: Rc::new(Inner {
				target,
				scheduler,
				options,
				timers: RefCell::new(HoldTimers::default()),
			}),
		}
	}

	pub fn target(&self) -> &T {
		&self.inner.target
	}

	/// Returns true while a hold is waiting to repeat or repeating.
	pub fn is_spinning(&self) -> bool {
		self.inner.timers.borrow().is_active()
	}

	/// Steps the target once, returning whether its value changed.
	pub fn step(&self, direction: Direction) -> bool {
		self.inner.step(direction)
	}

	/// Steps immediately, then keeps stepping every `interval` once `delay` has passed.
	/// Any hold already in progress is replaced.
	pub fn spin(&self, direction: Direction) {
		self.clear_timers();
		self.step(direction);

		let inner = Rc::downgrade(&self.inner);
		let delay = self.inner.scheduler.timeout(self.inner.options.delay, move || {
			Inner::start_repeating(&inner, direction);
		});
		self.inner.timers.borrow_mut().delay = Some(delay);
	}

	pub fn clear_timers(&self) {
		if self.inner.timers.borrow_mut().clear() {
			log::trace!(target: "touchspin", "hold released");
		}
	}

	pub fn handle<E>(&self, action: Action, event: &E)
	where
		E: InteractionEvent + ?Sized,
	{
		match action {
			Action::Press(direction) => self.spin(direction),
			Action::Touch(direction) => {
				self.spin(direction);
				if event.cancelable() {
					event.prevent_default();
				}
			}
			Action::Release => self.clear_timers(),
			Action::Wheel => {
				self.step(Direction::from_wheel_delta(event.delta_y()));
				event.prevent_default();
			}
		}
	}
}

impl<T, S> Inner<T, S>
where
	T: Steppable + 'static,
	S: Scheduler,
{
	fn step(&self, direction: Direction) -> bool {
		let before = self.target.current_value();
		if let Err(err) = self.target.apply_step(direction) {
			log::warn!(target: "touchspin", "Failed to step {direction:?}: {err}");
			return false;
		}
		let after = self.target.current_value();
		if before == after {
			return false;
		}
		log::debug!(target: "touchspin", "Stepped {direction:?} from {before:?} to {after:?}");
		if let Err(err) = self.target.notify_change() {
			log::error!(target: "touchspin", "Failed to dispatch change event: {err}");
		}
		true
	}

	fn start_repeating(this: &Weak<Self>, direction: Direction) {
		let Some(inner) = this.upgrade() else {
			return;
		};
		let weak = this.clone();
		let repeat = inner.scheduler.interval(inner.options.interval, move || {
			if let Some(inner) = weak.upgrade() {
				inner.step(direction);
			}
		});
		inner.timers.borrow_mut().repeat = Some(repeat);
	}
}
