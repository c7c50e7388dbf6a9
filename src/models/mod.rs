pub mod common;
pub mod rank;

pub use common::*;
pub use rank::*;
