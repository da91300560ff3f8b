use crate::error::Result;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

pub const WINNER_PREFIX: &str = "Winner: ";
pub const NO_WINNER_LINE: &str = "No winner selected due to insufficient participants.";

/// Newline-delimited registrant names, optionally terminated by a single
/// winner record (`Winner: <name>` or the no-winner sentinel).
pub struct RegistrantLog {
    path: PathBuf,
}

impl RegistrantLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// All non-empty lines that are not winner records. Missing file
    /// yields an empty set.
    pub async fn load(&self) -> Result<BTreeSet<String>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| {
                !line.is_empty() && !line.starts_with(WINNER_PREFIX) && *line != NO_WINNER_LINE
            })
            .map(str::to_string)
            .collect())
    }

    /// Full overwrite, one name per line. Drops any winner record written
    /// earlier; the session never rewrites after a draw is finalized.
    pub async fn rewrite(&self, registrants: &BTreeSet<String>) -> Result<()> {
        let mut contents = String::new();
        for name in registrants {
            contents.push_str(name);
            contents.push('\n');
        }
        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }

    pub async fn append_winner(&self, name: &str) -> Result<()> {
        self.append_line(&format!("{}{}", WINNER_PREFIX, name)).await
    }

    pub async fn append_no_winner(&self) -> Result<()> {
        self.append_line(NO_WINNER_LINE).await
    }

    async fn append_line(&self, line: &str) -> Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(format!("{}\n", line).as_bytes()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn names(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_rewrite_and_load_round_trip() {
        let temp_dir = tempdir().unwrap();
        let log = RegistrantLog::new(temp_dir.path().join("lottery_log.txt"));

        let registrants = names(&["Alice Smith", "Bob Jones", "Carol White"]);
        log.rewrite(&registrants).await.unwrap();

        assert_eq!(log.load().await.unwrap(), registrants);
    }

    #[tokio::test]
    async fn test_missing_file_yields_empty_set() {
        let temp_dir = tempdir().unwrap();
        let log = RegistrantLog::new(temp_dir.path().join("lottery_log.txt"));
        assert!(log.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_skips_winner_records() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("lottery_log.txt");
        std::fs::write(&path, "Alice Smith\nBob Jones\nWinner: Alice Smith\n").unwrap();

        let log = RegistrantLog::new(path);
        assert_eq!(
            log.load().await.unwrap(),
            names(&["Alice Smith", "Bob Jones"])
        );
    }

    #[tokio::test]
    async fn test_load_skips_no_winner_sentinel() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("lottery_log.txt");
        std::fs::write(&path, format!("Alice Smith\n{}\n", NO_WINNER_LINE)).unwrap();

        let log = RegistrantLog::new(path);
        assert_eq!(log.load().await.unwrap(), names(&["Alice Smith"]));
    }

    #[tokio::test]
    async fn test_append_winner_keeps_registrant_lines() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("lottery_log.txt");
        let log = RegistrantLog::new(path.clone());

        log.rewrite(&names(&["Alice Smith", "Bob Jones"])).await.unwrap();
        log.append_winner("Bob Jones").await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Alice Smith\nBob Jones\nWinner: Bob Jones\n");
    }
}
