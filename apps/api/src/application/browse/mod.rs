pub mod dto;
pub mod filter;
pub mod use_case;
