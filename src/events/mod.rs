pub mod pointer;
pub mod viewport;

pub use pointer::{wire_input_handlers, InputWiring};
pub use viewport::{wire_resize, wire_wheel};
