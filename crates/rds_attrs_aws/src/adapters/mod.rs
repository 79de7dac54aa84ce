pub mod client;
pub mod rds;
