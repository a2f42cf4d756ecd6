//! Application path resolution.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Resolves the directories AIVA persists into.
pub struct AivaPaths;

impl AivaPaths {
    /// The default data directory (~/.aiva).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn data_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".aiva"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_ends_with_dot_aiva() {
        let dir = AivaPaths::data_dir().unwrap();
        assert!(dir.ends_with(".aiva"));
    }
}
