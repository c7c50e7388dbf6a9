pub mod health;
pub mod index;
pub mod rank;

pub use health::*;
pub use index::*;
pub use rank::*;
