pub mod wallet;

pub use wallet::{ResultRow, ResultTable};
