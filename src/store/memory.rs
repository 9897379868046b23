use super::*;

/// Store that never touches the disk. Reports `NotFound` until first saved.
#[derive(Default)]
pub struct MemStore {
    data: RefCell<Option<Vec<Contact>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(Some(contacts)),
        }
    }
}

impl ContactStore for MemStore {
    fn load_outcome(&self) -> Result<LoadOutcome, AppError> {
        Ok(match &*self.data.borrow() {
            Some(contacts) => LoadOutcome::Parsed(contacts.clone()),
            None => LoadOutcome::NotFound,
        })
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = Some(contacts.to_vec());
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
