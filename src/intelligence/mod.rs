pub mod classifier;

pub use classifier::{classify_wallet, Classification};
