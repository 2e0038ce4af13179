pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_dodger_keys, wire_global_keydown};
pub use pointer::wire_pointer_handlers;
