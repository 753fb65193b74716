mod hook;
pub use hook::*;
mod touchspin_input;
pub use touchspin_input::*;
