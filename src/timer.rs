use gloo_timers::callback::{Interval, Timeout};

#[cfg(test)]
mod manual;
#[cfg(test)]
pub(crate) use manual::*;

/// Source of deferred callbacks.
/// Dropping a handle returned by either method cancels its timer.
pub trait Scheduler: 'static {
	type Timeout: 'static;
	type Interval: 'static;

	fn timeout<F>(&self, millis: u32, callback: F) -> Self::Timeout
	where
		F: FnOnce() + 'static;

	fn interval<F>(&self, millis: u32, callback: F) -> Self::Interval
	where
		F: FnMut() + 'static;
}

/// `setTimeout`/`setInterval` on the browser's event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
	type Timeout = Timeout;
	type Interval = Interval;

	fn timeout<F>(&self, millis: u32, callback: F) -> Self::Timeout
	where
		F: FnOnce() + 'static,
	{
		Timeout::new(millis, callback)
	}

	fn interval<F>(&self, millis: u32, callback: F) -> Self::Interval
	where
		F: FnMut() + 'static,
	{
		Interval::new(millis, callback)
	}
}

/// The delay and repeat timers of a single button hold.
pub(crate) struct HoldTimers<S: Scheduler> {
	pub delay: Option<S::Timeout>,
	pub repeat: Option<S::Interval>,
}

impl<S: Scheduler> Default for HoldTimers<S> {
	fn default() -> Self {
		Self {
			delay: None,
			repeat: None,
		}
	}
}

impl<S: Scheduler> HoldTimers<S> {
	pub fn is_active(&self) -> bool {
		self.delay.is_some() || self.repeat.is_some()
	}

	/// Cancels both timers, returning whether either was still held.
	pub fn clear(&mut self) -> bool {
		let was_active = self.is_active();
		self.delay = None;
		self.repeat = None;
		was_active
	}
}
