use crate::{Options, Touchspin};
use yew::prelude::*;

/// Attaches a [`Touchspin`] to the element behind `container` once it is rendered.
/// The touchspin is cleaned up on unmount, and rebuilt whenever `options` or `editable` change.
#[hook]
pub fn use_touchspin(container: NodeRef, options: Options, editable: bool) {
	use_effect_with(
		(container, options, editable),
		|(container, options, _editable): &(NodeRef, Options, bool)| {
			let touchspin = match container.cast::<web_sys::Element>() {
				None => None,
				Some(element) => match Touchspin::new(&element, *options) {
					Ok(touchspin) => Some(touchspin),
					Err(err) => {
						log::error!(target: "touchspin", "{err}");
						None
					}
				},
			};
			move || {
				if let Some(mut touchspin) = touchspin {
					touchspin.clean_up();
				}
			}
		},
	);
}
