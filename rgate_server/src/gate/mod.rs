pub mod dto;
pub mod handler;
pub mod routes;
