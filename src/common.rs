pub mod error;
pub use error::AppError;
pub mod response;
pub use response::ApiResponse;
pub mod json;
pub use json::{AppJson, AppPath};
pub mod slug;
pub use slug::slugify;
