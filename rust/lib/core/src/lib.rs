pub mod auditing;
pub mod error;
pub mod types;

pub use auditing::Auditing;
pub use error::ServiceError;
pub use types::{new_id, now};
