pub mod database;
pub mod geocoding;
pub mod repositories;
pub mod storage;
