pub mod address_file;

pub use address_file::{load_addresses, parse_addresses};
