/// Patterns matching the stepped input: a directly marked input, or an input nested in a marked container.
pub static INPUT_SELECTORS: [&'static str; 2] = ["input[data-touchspin-input]", "[data-touchspin-input] input"];
pub static INCREMENT_SELECTOR: &'static str = "[data-touchspin-up]";
pub static DECREMENT_SELECTOR: &'static str = "[data-touchspin-down]";

/// Id of the `<style>` element shared by every touchspin on the page.
pub static STYLE_ID: &'static str = "input-touchspin-style";

/// The elements of a touchspin that listeners are bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
	Input,
	Increment,
	Decrement,
}

impl Part {
	pub fn selector(&self) -> String {
		match self {
			Self::Input => INPUT_SELECTORS.join(","),
			Self::Increment => INCREMENT_SELECTOR.to_owned(),
			Self::Decrement => DECREMENT_SELECTOR.to_owned(),
		}
	}
}

/// Rules hiding the native spin buttons of every touchspin input.
pub fn stylesheet() -> String {
	let pseudo_elements = ["::-webkit-inner-spin-button", "::-webkit-outer-spin-button"];
	let webkit = pseudo_elements
		.iter()
		.flat_map(|pseudo| INPUT_SELECTORS.iter().map(move |selector| format!("{selector}{pseudo}")))
		.collect::<Vec<_>>()
		.join(",");
	let inputs = INPUT_SELECTORS.join(",");
	format!("{webkit} {{margin:0;-webkit-appearance:none;}}\n{inputs} {{-moz-appearance:textfield;}}\n")
}
