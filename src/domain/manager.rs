use super::*;

/// Record management over a [`ContactStore`].
///
/// Holds no contacts of its own. Every operation loads the full list, works
/// on it in memory, and (for mutations) writes the full list back, so the
/// backing store always mirrors the last completed save.
pub struct ContactManager {
    pub storage: Box<dyn ContactStore>,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self { storage }
    }

    pub fn add(&self, name: &str, phone: &str, email: &str) -> Result<Contact, AppError> {
        let mut contacts = self.storage.load()?;

        let contact = Contact::new(name.to_string(), phone.to_string(), email.to_string());
        contacts.push(contact.clone());

        self.storage.save(&contacts)?;
        info!(
            medium = self.storage.get_medium(),
            total = contacts.len(),
            "added contact"
        );

        Ok(contact)
    }

    /// Removes every contact named exactly `name` and returns how many went.
    pub fn delete(&self, name: &str) -> Result<usize, AppError> {
        let mut contacts = self.storage.load()?;

        let before = contacts.len();
        contacts.retain(|contact| contact.name != name);
        let removed = before - contacts.len();

        self.storage.save(&contacts)?;
        info!(
            medium = self.storage.get_medium(),
            removed, "deleted contacts"
        );

        Ok(removed)
    }

    pub fn search(&self, name: &str) -> Result<Option<Contact>, AppError> {
        let contacts = self.storage.load()?;

        Ok(contacts
            .into_iter()
            .find(|contact| contact.name_matches(name)))
    }

    pub fn list(&self) -> Result<Vec<Contact>, AppError> {
        self.storage.load()
    }
}
