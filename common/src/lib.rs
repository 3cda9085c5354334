//! Lost & Found Common Library
//!
//! Web(WASM)フロントエンドと共有される型とユーティリティ

pub mod date;
pub mod error;
pub mod parser;
pub mod score;
pub mod types;

pub use date::format_date;
pub use error::UploadError;
pub use parser::parse_upload_response;
pub use score::{badge_label, match_percent, ScoreTier};
pub use types::{ErrorResponse, ItemType, MatchResult, UploadResponse};
