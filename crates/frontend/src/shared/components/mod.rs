pub mod message;
pub mod spinner;
