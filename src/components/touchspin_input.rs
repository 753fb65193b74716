use super::use_touchspin;
use crate::Options;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct TouchspinInputProps {
	#[prop_or_default]
	pub value: Option<AttrValue>,
	#[prop_or_default]
	pub min: Option<AttrValue>,
	#[prop_or_default]
	pub max: Option<AttrValue>,
	#[prop_or_default]
	pub step: Option<AttrValue>,

	#[prop_or_default]
	pub readonly: bool,
	#[prop_or_default]
	pub disabled: bool,

	#[prop_or_default]
	pub options: Options,

	/// Emitted with the input's value whenever it is committed, by typing or by the buttons.
	#[prop_or_default]
	pub onchange: Callback<String>,

	#[prop_or_default]
	pub class: Classes,
}

/// A bootstrap input-group of `[-][number][+]`, wired up as a touchspin.
#[function_component]
pub fn TouchspinInput(props: &TouchspinInputProps) -> Html {
	let TouchspinInputProps {
		value,
		min,
		max,
		step,
		readonly,
		disabled,
		options,
		onchange,
		class,
	} = props;
	let container = use_node_ref();
	use_touchspin(container.clone(), *options, !*readonly && !*disabled);

	let onchange = Callback::from({
		let onchange = onchange.clone();
		move |evt: web_sys::Event| {
			let Some(input) = evt.target_dyn_into::<HtmlInputElement>() else {
				return;
			};
			onchange.emit(input.value());
		}
	});

	html! {
		<div ref={container} class={classes!("input-group", "touchspin", class.clone())}>
			<button type="button" class="btn btn-outline-secondary" data-touchspin-down="" disabled={*disabled}>
				<i class="bi bi-dash" />
			</button>
			<input
				type="number" class="form-control text-center" data-touchspin-input=""
				value={value.clone()} min={min.clone()} max={max.clone()} step={step.clone()}
				readonly={*readonly} disabled={*disabled}
				{onchange}
			/>
			<button type="button" class="btn btn-outline-secondary" data-touchspin-up="" disabled={*disabled}>
				<i class="bi bi-plus" />
			</button>
		</div>
	}
}
