pub mod entity;
pub mod media;
pub mod repository;
