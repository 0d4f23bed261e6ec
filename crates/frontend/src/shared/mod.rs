pub mod components;
pub mod download;
