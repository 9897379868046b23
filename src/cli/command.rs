use crate::errors::AppError;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

pub const STORAGE_PATH: &str = "contacts.json";

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// JSON file the contacts are kept in
    #[arg(long, env = "CONTACTS_FILE", default_value = STORAGE_PATH)]
    pub file: PathBuf,
}

/// Entries of the numbered menu
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    AddContact,
    DeleteContact,
    SearchContact,
    ListContacts,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(action: &str) -> Result<Self, Self::Err> {
        match action {
            "1" => Ok(MenuChoice::AddContact),
            "2" => Ok(MenuChoice::DeleteContact),
            "3" => Ok(MenuChoice::SearchContact),
            "4" => Ok(MenuChoice::ListContacts),
            "5" => Ok(MenuChoice::Exit),
            _ => Err(AppError::ParseCommand(action.to_string())),
        }
    }
}
