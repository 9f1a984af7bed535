pub mod contribution;
pub mod place;
pub mod shared;
