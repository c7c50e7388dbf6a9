pub mod ranking;
pub mod url;

pub use ranking::*;
pub use url::*;
