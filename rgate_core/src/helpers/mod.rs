pub mod address;
pub mod dto;
pub mod utils;
