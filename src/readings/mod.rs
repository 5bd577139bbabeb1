pub mod air;
pub mod atmosphere;
pub mod light;
pub mod models;
pub mod services;
pub mod soil;
pub mod views;

#[cfg(test)]
mod tests;
