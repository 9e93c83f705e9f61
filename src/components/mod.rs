pub mod app;
pub mod board;
pub mod generic_modal;
pub mod minimap;
