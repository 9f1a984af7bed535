pub mod aggregation;
pub mod dto;
pub mod use_case;
