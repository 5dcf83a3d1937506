pub mod browse;
pub mod click;
pub mod complete;
pub mod config;
pub mod page;
