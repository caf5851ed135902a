//! User records, validation, and CRUD handlers.

mod handlers;
mod validation;

pub use handlers::{create_user, delete_user, get_user, list_users, main_page, update_user};
pub use validation::validate;

use serde::{Deserialize, Serialize};

/// A user record.
///
/// Identity lives in the store key, not in the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: i32,
}
