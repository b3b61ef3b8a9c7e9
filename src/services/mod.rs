pub use errors::{ServiceError, ServiceResult};

pub mod auth;
pub mod errors;
pub mod reviews;
pub mod search;
pub mod seed;
pub mod widget;
