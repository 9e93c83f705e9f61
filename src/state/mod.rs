pub mod minimap;
pub mod modal;
