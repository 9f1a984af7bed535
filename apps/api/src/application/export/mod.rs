pub mod csv_export;
pub mod use_case;
