use crate::{
    cli::command::{Cli, MenuChoice},
    domain::ContactManager,
    errors::AppError,
    store::JsonStore,
};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let storage = JsonStore::new(&cli.file)?;
    info!(path = %cli.file.display(), "using contact file");

    let manager = ContactManager::new(Box::new(storage));

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&manager, &mut stdin.lock(), &mut stdout.lock())
}

/// Drives the numbered menu until the user exits or input runs out.
///
/// Store failures end the session and are returned to the caller.
pub fn run_session<R, W>(
    manager: &ContactManager,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    loop {
        show_menu(output)?;

        let Some(action) = prompt(input, output, "Enter your choice: ")? else {
            return exit(output);
        };

        let command = match action.parse::<MenuChoice>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{e}");
                writeln!(output, "Invalid choice. Please try again.")?;
                continue;
            }
        };

        match command {
            MenuChoice::AddContact => {
                let Some(name) = prompt(input, output, "Enter name: ")? else {
                    return exit(output);
                };
                let Some(phone) = prompt(input, output, "Enter phone: ")? else {
                    return exit(output);
                };
                let Some(email) = prompt(input, output, "Enter email: ")? else {
                    return exit(output);
                };

                manager.add(&name, &phone, &email)?;
                writeln!(output, "Contact '{name}' added successfully.")?;
            }
            MenuChoice::DeleteContact => {
                let Some(name) = prompt(input, output, "Enter name to delete: ")? else {
                    return exit(output);
                };

                manager.delete(&name)?;
                writeln!(output, "Contact '{name}' deleted successfully.")?;
            }
            MenuChoice::SearchContact => {
                let Some(name) = prompt(input, output, "Enter name to search: ")? else {
                    return exit(output);
                };

                match manager.search(&name)? {
                    Some(contact) => {
                        writeln!(output, "Contact found:")?;
                        writeln!(output, "{contact}")?;
                    }
                    None => writeln!(output, "Contact '{name}' not found.")?,
                }
            }
            MenuChoice::ListContacts => {
                let contacts = manager.list()?;

                if contacts.is_empty() {
                    writeln!(output, "No contacts found.")?;
                    continue;
                }

                for contact in contacts.iter() {
                    writeln!(output, "{contact}")?;
                    writeln!(output, "{}", "-".repeat(20))?;
                }
            }
            MenuChoice::Exit => return exit(output),
        }
    }
}

fn show_menu<W: Write>(output: &mut W) -> Result<(), AppError> {
    writeln!(output, "\nContact Manager")?;
    writeln!(output, "1. Add Contact")?;
    writeln!(output, "2. Delete Contact")?;
    writeln!(output, "3. Search Contact")?;
    writeln!(output, "4. List Contacts")?;
    writeln!(output, "5. Exit")?;
    Ok(())
}

fn exit<W: Write>(output: &mut W) -> Result<(), AppError> {
    writeln!(output, "Exiting Contact Manager.")?;
    output.flush()?;
    Ok(())
}

fn prompt<R, W>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>, AppError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{message}")?;
    output.flush()?;
    get_input(input)
}

/// Reads one line without its line terminator. `None` once input is exhausted.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = line.strip_suffix('\n').unwrap_or(&line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    Ok(Some(line.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ContactStore, MemStore};
    use std::io::Cursor;

    fn session(manager: &ContactManager, script: &str) -> Result<String, AppError> {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_session(manager, &mut input, &mut output)?;
        Ok(String::from_utf8(output).expect("shell writes utf-8"))
    }

    fn mem_manager() -> ContactManager {
        ContactManager::new(Box::new(MemStore::new()))
    }

    #[test]
    fn exit_prints_goodbye() -> Result<(), AppError> {
        let transcript = session(&mem_manager(), "5\n")?;

        assert_eq!(
            transcript,
            "\nContact Manager\n1. Add Contact\n2. Delete Contact\n3. Search Contact\n\
             4. List Contacts\n5. Exit\nEnter your choice: Exiting Contact Manager.\n"
        );
        Ok(())
    }

    #[test]
    fn add_search_list_delete() -> Result<(), AppError> {
        let manager = mem_manager();
        let transcript = session(
            &manager,
            "1\nBob\n555-1234\nbob@x.com\n3\nbOB\n4\n2\nBob\n3\nBob\n4\n5\n",
        )?;

        assert!(transcript.contains("Enter name: Enter phone: Enter email: "));
        assert!(transcript.contains("Contact 'Bob' added successfully."));
        assert!(transcript.contains(
            "Contact found:\nName: Bob\nPhone: 555-1234\nEmail: bob@x.com\n"
        ));
        assert!(transcript.contains(
            "Name: Bob\nPhone: 555-1234\nEmail: bob@x.com\n--------------------\n"
        ));
        assert!(transcript.contains("Contact 'Bob' deleted successfully."));
        assert!(transcript.contains("Contact 'Bob' not found."));
        assert!(transcript.contains("No contacts found."));
        assert!(manager.storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn invalid_choice_loops() -> Result<(), AppError> {
        let transcript = session(&mem_manager(), "9\nabc\n5\n")?;

        assert_eq!(
            transcript
                .matches("Invalid choice. Please try again.")
                .count(),
            2
        );
        assert_eq!(transcript.matches("Enter your choice: ").count(), 3);
        Ok(())
    }

    #[test]
    fn padded_choice_is_invalid() -> Result<(), AppError> {
        let manager = mem_manager();
        let transcript = session(&manager, " 1\n1 \n5\n")?;

        assert_eq!(
            transcript
                .matches("Invalid choice. Please try again.")
                .count(),
            2
        );
        assert!(!transcript.contains("Enter name: "));
        assert!(manager.list()?.is_empty());
        Ok(())
    }

    #[test]
    fn end_of_input_exits_cleanly() -> Result<(), AppError> {
        let manager = mem_manager();
        let transcript = session(&manager, "1\nHalf\n")?;

        assert!(transcript.ends_with("Exiting Contact Manager.\n"));
        assert!(manager.list()?.is_empty());
        Ok(())
    }

    #[test]
    fn field_whitespace_is_kept() -> Result<(), AppError> {
        let manager = mem_manager();
        session(&manager, "1\r\n  Ann Lee \r\n\r\n\r\n5\n")?;

        let contacts = manager.list()?;
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "  Ann Lee ");
        assert_eq!(contacts[0].phone, "");
        Ok(())
    }

    #[test]
    fn store_errors_end_the_session() {
        struct BrokenStore;

        impl ContactStore for BrokenStore {
            fn load_outcome(&self) -> Result<crate::store::LoadOutcome, AppError> {
                Err(serde_json::from_str::<Vec<String>>("{").unwrap_err().into())
            }

            fn save(&self, _contacts: &[crate::domain::contact::Contact]) -> Result<(), AppError> {
                Ok(())
            }

            fn get_medium(&self) -> &str {
                "broken"
            }
        }

        let manager = ContactManager::new(Box::new(BrokenStore));
        assert!(matches!(
            session(&manager, "4\n5\n"),
            Err(AppError::Json(_))
        ));
    }
}
