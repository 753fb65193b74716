use super::Scheduler;
use std::{
	cell::RefCell,
	collections::BTreeMap,
	rc::{Rc, Weak},
};

enum Task {
	Once(Box<dyn FnOnce()>),
	Repeat(Box<dyn FnMut()>, u64),
}

struct Entry {
	due: u64,
	task: Task,
}

#[derive(Default)]
struct Queue {
	now: u64,
	next_id: u64,
	entries: BTreeMap<u64, Entry>,
	running: Option<u64>,
	running_cancelled: bool,
}

/// A clock that only moves when told to, so timer driven behavior can be tested off-browser.
#[derive(Clone, Default)]
pub(crate) struct ManualScheduler {
	queue: Rc<RefCell<Queue>>,
}

pub(crate) struct ManualHandle {
	id: u64,
	queue: Weak<RefCell<Queue>>,
}

impl Drop for ManualHandle {
	fn drop(&mut self) {
		let Some(queue) = self.queue.upgrade() else {
			return;
		};
		let mut queue = queue.borrow_mut();
		if queue.entries.remove(&self.id).is_none() && queue.running == Some(self.id) {
			queue.running_cancelled = true;
		}
	}
}

impl ManualScheduler {
	pub fn now(&self) -> u64 {
		self.queue.borrow().now
	}

	/// The number of timers waiting to fire.
	pub fn pending(&self) -> usize {
		self.queue.borrow().entries.len()
	}

	/// Moves the clock forward, firing every timer that comes due in order.
	pub fn advance(&self, millis: u64) {
		let target = self.now() + millis;
		loop {
			let (id, Entry { due, task }) = {
				let mut queue = self.queue.borrow_mut();
				let next = queue
					.entries
					.iter()
					.filter(|(_, entry)| entry.due <= target)
					.min_by_key(|(id, entry)| (entry.due, **id))
					.map(|(id, _)| *id);
				let Some(id) = next else {
					queue.now = target;
					return;
				};
				let Some(entry) = queue.entries.remove(&id) else {
					return;
				};
				queue.now = entry.due;
				queue.running = Some(id);
				queue.running_cancelled = false;
				(id, entry)
			};

			let rescheduled = match task {
				Task::Once(callback) => {
					callback();
					None
				}
				Task::Repeat(mut callback, period) => {
					callback();
					Some(Entry {
						due: due + period,
						task: Task::Repeat(callback, period),
					})
				}
			};

			let dropped = {
				let mut queue = self.queue.borrow_mut();
				let cancelled = std::mem::take(&mut queue.running_cancelled);
				queue.running = None;
				match (rescheduled, cancelled) {
					(Some(entry), false) => {
						queue.entries.insert(id, entry);
						None
					}
					(entry, _) => entry,
				}
			};
			drop(dropped);
		}
	}

	fn schedule(&self, millis: u32, task: Task) -> ManualHandle {
		let mut queue = self.queue.borrow_mut();
		let id = queue.next_id;
		queue.next_id += 1;
		let due = queue.now + u64::from(millis);
		queue.entries.insert(id, Entry { due, task });
		ManualHandle {
			id,
			queue: Rc::downgrade(&self.queue),
		}
	}
}

impl Scheduler for ManualScheduler {
	type Timeout = ManualHandle;
	type Interval = ManualHandle;

	fn timeout<F>(&self, millis: u32, callback: F) -> Self::Timeout
	where
		F: FnOnce() + 'static,
	{
		self.schedule(millis, Task::Once(Box::new(callback)))
	}

	fn interval<F>(&self, millis: u32, callback: F) -> Self::Interval
	where
		F: FnMut() + 'static,
	{
		let period = u64::from(millis).max(1);
		self.schedule(millis, Task::Repeat(Box::new(callback), period))
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use std::cell::Cell;

	#[test]
	fn timeout_fires_once_when_due() {
		let scheduler = ManualScheduler::default();
		let fired = Rc::new(Cell::new(0));
		let _handle = scheduler.timeout(100, {
			let fired = fired.clone();
			move || fired.set(fired.get() + 1)
		});
		scheduler.advance(99);
		assert_eq!(fired.get(), 0);
		scheduler.advance(1);
		assert_eq!(fired.get(), 1);
		scheduler.advance(1000);
		assert_eq!(fired.get(), 1);
		assert_eq!(scheduler.now(), 1100);
	}

	#[test]
	fn interval_repeats_until_dropped() {
		let scheduler = ManualScheduler::default();
		let fired = Rc::new(Cell::new(0));
		let handle = scheduler.interval(10, {
			let fired = fired.clone();
			move || fired.set(fired.get() + 1)
		});
		scheduler.advance(35);
		assert_eq!(fired.get(), 3);
		drop(handle);
		assert_eq!(scheduler.pending(), 0);
		scheduler.advance(100);
		assert_eq!(fired.get(), 3);
	}

	#[test]
	fn dropped_timeout_never_fires() {
		let scheduler = ManualScheduler::default();
		let fired = Rc::new(Cell::new(false));
		let handle = scheduler.timeout(10, {
			let fired = fired.clone();
			move || fired.set(true)
		});
		drop(handle);
		scheduler.advance(20);
		assert!(!fired.get());
	}

	#[test]
	fn interval_cancelled_from_its_own_callback() {
		let scheduler = ManualScheduler::default();
		let slot: Rc<RefCell<Option<ManualHandle>>> = Rc::new(RefCell::new(None));
		let fired = Rc::new(Cell::new(0));
		let handle = scheduler.interval(10, {
			let slot = slot.clone();
			let fired = fired.clone();
			move || {
				fired.set(fired.get() + 1);
				slot.borrow_mut().take();
			}
		});
		*slot.borrow_mut() = Some(handle);
		scheduler.advance(100);
		assert_eq!(fired.get(), 1);
		assert_eq!(scheduler.pending(), 0);
	}
}
