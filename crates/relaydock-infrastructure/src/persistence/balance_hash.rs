use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

/// Read the previously stored balance fingerprint. A missing file means no
/// prior run, which is not an error.
pub fn load_balance_hash(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(raw) => Some(raw.trim().to_string()),
        Err(e) => {
            debug!("No stored balance hash at {}: {e}", path.display());
            None
        }
    }
}

/// Persist the balance fingerprint for the next run's comparison.
pub fn save_balance_hash(path: &Path, hash: &str) -> io::Result<()> {
    fs::write(path, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_hash() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("balance_hash.txt");
        save_balance_hash(&path, "abc123").unwrap();
        assert_eq!(load_balance_hash(&path), Some("abc123".to_string()));
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_balance_hash(&dir.path().join("absent.txt")), None);
    }

    #[test]
    fn stored_value_is_trimmed_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("balance_hash.txt");
        std::fs::write(&path, "  abc123\n").unwrap();
        assert_eq!(load_balance_hash(&path), Some("abc123".to_string()));
    }

    #[test]
    fn empty_file_is_some_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("balance_hash.txt");
        std::fs::write(&path, "").unwrap();
        assert_eq!(load_balance_hash(&path), Some(String::new()));
    }
}
