use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use tracing::info;

use crate::storage::traits::Connection;

/// Name of the single JSON document holding the month mapping.
const MONTHS_FILE_NAME: &str = "months.json";

/// JsonConnection manages the data directory and the mapping file within it.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new JSON connection rooted at a base directory, creating
    /// the directory if it doesn't exist.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new JSON connection in the default data directory,
    /// ~/Documents/Budget Tracker.
    pub fn new_default() -> Result<Self> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
        let data_dir = home_dir.join("Documents").join("Budget Tracker");

        info!("Using data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Get the path of the month mapping file.
    pub fn months_file_path(&self) -> PathBuf {
        self.base_directory.join(MONTHS_FILE_NAME)
    }

    /// Ensure the mapping file exists, seeding it with an empty mapping.
    pub fn ensure_months_file_exists(&self) -> Result<()> {
        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
        }

        let file_path = self.months_file_path();
        if !file_path.exists() {
            fs::write(&file_path, "{}\n")?;
        }

        Ok(())
    }

    /// Get the directory holding the budget data.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}

impl Connection for JsonConnection {
    type MonthRepository = super::month_repository::MonthRepository;

    fn create_month_repository(&self) -> Self::MonthRepository {
        super::month_repository::MonthRepository::new(self.clone())
    }
}
