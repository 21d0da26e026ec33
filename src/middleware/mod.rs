pub mod auth;
pub mod response;

pub use auth::bearer_auth;
pub use response::{ApiResult, Envelope};
