pub mod rank_service;
pub mod search_service;

pub use rank_service::*;
pub use search_service::*;
