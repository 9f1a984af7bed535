pub mod contributions;
pub mod dashboard;
pub mod export;
pub mod geo;
pub mod health;
pub mod map;
pub mod places;
pub mod statistics;
