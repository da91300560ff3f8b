pub mod deadline_file;
pub mod registrant_log;

pub use deadline_file::DeadlineFile;
pub use registrant_log::RegistrantLog;

use crate::config::RaffleConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Owns the data directory the two flat-file records live in.
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    pub async fn new(data_dir: &Path) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn deadline_file(&self, config: &RaffleConfig) -> DeadlineFile {
        DeadlineFile::new(self.data_dir.join(&config.deadline_file))
    }

    pub fn registrant_log(&self, config: &RaffleConfig) -> RegistrantLog {
        RegistrantLog::new(self.data_dir.join(&config.log_file))
    }
}
