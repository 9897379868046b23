pub use crate::cli::{command, run_app, run_session};
pub use crate::domain::{
    ContactManager,
    contact::{self, Contact},
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, JsonStore, LoadOutcome, MemStore};
