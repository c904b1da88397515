pub mod helpers;
pub mod registry;
pub mod scoring;
pub mod synthetic;
