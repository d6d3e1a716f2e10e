use crate::constants::SAVE_VERSION_MAGIC;
use crate::store::GameState;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Manages saving and loading the state document with checksum verification.
///
/// The payload is JSON so that documents written by older versions restore
/// cleanly: missing fields take their serde defaults and unknown fields are
/// ignored. The frame around it catches byte corruption, which callers treat
/// as "no usable save" and fall back to the seeded default state.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a new SaveManager instance
    ///
    /// Sets up the save directory at the appropriate location for the
    /// platform using the `directories` crate.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "habit-hero").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        let save_path = config_dir.join("save.dat");

        Ok(Self { save_path })
    }

    /// Creates a SaveManager for testing with a unique temporary directory
    #[cfg(test)]
    fn new_for_test() -> io::Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!("habit-hero-test-{}", test_id));
        fs::create_dir_all(&temp_dir)?;

        let save_path = temp_dir.join("save.dat");
        Ok(Self { save_path })
    }

    /// Saves the state document to disk with checksum verification
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Payload length (4 bytes)
    /// - JSON state document (variable length)
    /// - SHA256 checksum (32 bytes)
    pub fn save(&self, state: &GameState) -> io::Result<()> {
        let data = serde_json::to_vec_pretty(state)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let data_len = data.len() as u32;

        // Compute checksum over version + length + payload
        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        // Write to file
        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        Ok(())
    }

    /// Loads the state document from disk with checksum verification
    ///
    /// Returns an error if:
    /// - The file doesn't exist
    /// - The version magic is incorrect
    /// - The checksum verification fails
    /// - The payload cannot be deserialized
    ///
    /// Callers respond to any error by starting from the default state.
    pub fn load(&self) -> io::Result<GameState> {
        let mut file = fs::File::open(&self.save_path)?;

        // Read and verify version magic
        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);

        if version != SAVE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid save version: expected 0x{:016X}, got 0x{:016X}",
                    SAVE_VERSION_MAGIC, version
                ),
            ));
        }

        // Read payload length
        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        // Read payload
        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        // Read checksum
        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        // Verify checksum
        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed_checksum = hasher.finalize();

        if stored_checksum != computed_checksum.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }

        // Deserialize the state document
        let state = serde_json::from_slice(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(state)
    }

    /// Checks if a save file exists
    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::GameStore;
    use std::fs;

    #[test]
    fn test_save_and_load() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");

        // Build a state with some non-default values
        let mut store = GameStore::new();
        store.add_attacks(12);
        store.add_diamonds(7);
        store.apply_damage(4);
        let task_id = store.add_task("Water the plants".to_string(), 25);
        store.approve_task(&task_id);
        let original = store.state().clone();

        manager.save(&original).expect("Failed to save state");
        assert!(manager.save_exists());

        let loaded = manager.load().expect("Failed to load state");
        assert_eq!(loaded, original);

        fs::remove_file(&manager.save_path).expect("Failed to remove save file");
    }

    #[test]
    fn test_load_nonexistent() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");

        let result = manager.load();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_load_rejects_bad_magic() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");
        let store = GameStore::new();
        manager.save(store.state()).expect("Failed to save state");

        let mut bytes = fs::read(&manager.save_path).unwrap();
        bytes[0] ^= 0xFF;
        fs::write(&manager.save_path, &bytes).unwrap();

        let result = manager.load();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_load_rejects_corrupted_payload() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");
        let store = GameStore::new();
        manager.save(store.state()).expect("Failed to save state");

        // Flip a byte inside the JSON payload; the checksum no longer matches
        let mut bytes = fs::read(&manager.save_path).unwrap();
        let payload_start = 8 + 4;
        bytes[payload_start + 2] ^= 0xFF;
        fs::write(&manager.save_path, &bytes).unwrap();

        let result = manager.load();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_load_rejects_truncated_file() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");
        let store = GameStore::new();
        manager.save(store.state()).expect("Failed to save state");

        let bytes = fs::read(&manager.save_path).unwrap();
        fs::write(&manager.save_path, &bytes[..bytes.len() - 10]).unwrap();

        assert!(manager.load().is_err());
    }
}
