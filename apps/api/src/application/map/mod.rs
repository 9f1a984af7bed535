pub mod dto;
pub mod markers;
pub mod selection;
pub mod use_case;
pub mod viewport;
