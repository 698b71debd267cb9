pub mod drought;
pub mod signal;
