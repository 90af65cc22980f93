pub mod bills;
pub mod common;
pub mod export;
pub mod notes;
pub mod parties;
pub mod products;
pub mod stock;
pub mod workers;
