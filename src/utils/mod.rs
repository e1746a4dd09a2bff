#[macro_use]
mod string_enum;

pub mod date_format;
pub mod query;
