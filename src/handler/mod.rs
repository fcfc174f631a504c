//! Handler module - Input event handling

pub mod action;
pub mod key;
pub mod mouse;

pub use action::{
    handle_action, handle_input_key, handle_mouse_action, handle_paste, ActionContext,
};
pub use key::{handle_key_event, insert_pasted, update_input_buffer, KeyAction};
pub use mouse::{handle_mouse_event, ClickDetector, MouseAction, PointerDrag};
