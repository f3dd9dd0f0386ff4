//! Saved pool field persistence.

mod file;

use crate::pool::PoolInput;

#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub fields: PoolInput,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }
}
