pub mod contact;
pub mod manager;

use crate::errors::AppError;
use crate::store::ContactStore;
use contact::Contact;
use tracing::info;

pub use manager::ContactManager;
