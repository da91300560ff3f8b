use crate::error::Result;
use chrono::{DateTime, Duration, Utc};
use std::path::PathBuf;

/// Single-line RFC 3339 timestamp marking when registration closes.
pub struct DeadlineFile {
    path: PathBuf,
}

impl DeadlineFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Stored deadline, or `now + registration_duration` when the file is
    /// missing or unreadable. Malformed state is replaced, not surfaced.
    pub async fn load_or_default(
        &self,
        now: DateTime<Utc>,
        registration_duration: Duration,
    ) -> DateTime<Utc> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => match contents.trim().parse::<DateTime<Utc>>() {
                Ok(deadline) => deadline,
                Err(e) => {
                    tracing::debug!("Replacing malformed deadline file: {}", e);
                    now + registration_duration
                }
            },
            Err(_) => now + registration_duration,
        }
    }

    pub async fn save(&self, deadline: DateTime<Utc>) -> Result<()> {
        tokio::fs::write(&self.path, deadline.to_rfc3339()).await?;
        Ok(())
    }

    /// Remove the file; a missing file is not an error.
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let temp_dir = tempdir().unwrap();
        let file = DeadlineFile::new(temp_dir.path().join("timer_state.txt"));

        let deadline = Utc::now() + Duration::seconds(3600);
        file.save(deadline).await.unwrap();

        let loaded = file
            .load_or_default(Utc::now(), Duration::seconds(3600))
            .await;
        assert_eq!(loaded, deadline);
    }

    #[tokio::test]
    async fn test_missing_file_yields_fresh_deadline() {
        let temp_dir = tempdir().unwrap();
        let file = DeadlineFile::new(temp_dir.path().join("timer_state.txt"));

        let now = Utc::now();
        let loaded = file.load_or_default(now, Duration::seconds(3600)).await;
        assert_eq!(loaded, now + Duration::seconds(3600));
    }

    #[tokio::test]
    async fn test_malformed_contents_are_replaced() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("timer_state.txt");
        std::fs::write(&path, "not a timestamp").unwrap();

        let file = DeadlineFile::new(path);
        let now = Utc::now();
        let loaded = file.load_or_default(now, Duration::seconds(60)).await;
        assert_eq!(loaded, now + Duration::seconds(60));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let temp_dir = tempdir().unwrap();
        let file = DeadlineFile::new(temp_dir.path().join("timer_state.txt"));

        file.save(Utc::now()).await.unwrap();
        file.clear().await.unwrap();
        file.clear().await.unwrap();
    }
}
