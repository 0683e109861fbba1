// Store operations

pub mod messages;
pub mod users;

pub use messages::{get_history, insert_message};
pub use users::{create_user, get_user_by_email};
