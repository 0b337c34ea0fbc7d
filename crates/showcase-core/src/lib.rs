pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::project::{MAX_NAME_LEN, MAX_SUBMITTED_BY_LEN, MAX_URL_LEN, Project};
pub use models::tag::Tag;
