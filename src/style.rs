use crate::{
	selector::{stylesheet, STYLE_ID},
	Error,
};
use web_sys::Document;

/// Adds the shared touchspin `<style>` to the document's head, unless a previous touchspin already did.
/// Returns true if the element was created.
pub fn install(document: &Document) -> Result<bool, Error> {
	if document.get_element_by_id(STYLE_ID).is_some() {
		return Ok(false);
	}
	let head = document.head().ok_or(Error::MissingHead)?;
	let style = document.create_element("style")?;
	style.set_id(STYLE_ID);
	style.set_text_content(Some(&stylesheet()));
	head.append_child(&style)?;
	log::debug!(target: "touchspin", "Installed #{STYLE_ID} style");
	Ok(true)
}
