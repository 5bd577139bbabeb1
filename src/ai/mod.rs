pub mod services;
pub mod views;
