pub mod event_template;
pub mod keybindings_data;
pub mod storage;
