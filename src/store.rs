pub mod json;
pub mod memory;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub use json::JsonStore;
pub use memory::MemStore;

/// What a store found when it went looking for its contacts.
///
/// A missing backing file is not an error, it is an empty contact book that
/// has never been saved. A backing file that cannot be parsed is an error and
/// is reported through the `Err` side of `load_outcome`.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    NotFound,
    Parsed(Vec<Contact>),
}

impl LoadOutcome {
    pub fn into_contacts(self) -> Vec<Contact> {
        match self {
            LoadOutcome::NotFound => Vec::new(),
            LoadOutcome::Parsed(contacts) => contacts,
        }
    }
}

pub trait ContactStore {
    fn load_outcome(&self) -> Result<LoadOutcome, AppError>;

    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.load_outcome()?.into_contacts())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
