use super::*;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

pub struct JsonStore {
    pub path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        create_file_parent(path)?;

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Sibling file that `save` writes before renaming over `path`.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

pub fn to_pretty_json(contacts: &[Contact]) -> Result<Vec<u8>, AppError> {
    let mut data = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(b"    "));
    contacts.serialize(&mut serializer)?;
    Ok(data)
}

fn write_then_rename(temp_path: &Path, path: &Path, data: &[u8]) -> Result<(), AppError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)?;

    file.write_all(data)?;
    file.sync_all()?;
    drop(file);

    fs::rename(temp_path, path)?;
    Ok(())
}

impl ContactStore for JsonStore {
    fn load_outcome(&self) -> Result<LoadOutcome, AppError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no contact file yet");
                return Ok(LoadOutcome::NotFound);
            }
            Err(e) => return Err(e.into()),
        };

        let contacts: Vec<Contact> = serde_json::from_str(&data)?;
        debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");

        Ok(LoadOutcome::Parsed(contacts))
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let data = to_pretty_json(contacts)?;

        let temp_path = self.temp_path();
        if let Err(e) = write_then_rename(&temp_path, &self.path, &data) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
        debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");

        Ok(())
    }

    fn get_medium(&self) -> &str {
        "json"
    }
}
