// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed credential store for the OAuth token record.
//!
//! A single JSON file, owned by one process at a time. Writes go through
//! a sibling temp file and a rename so the store is never left partially
//! written.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::TokenRecord;

/// Credential store backed by a local JSON file.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token record.
    ///
    /// An absent or unparseable file both surface as
    /// [`AppError::CredentialsMissing`]: either way the user has to run
    /// the authorize flow again.
    pub fn load(&self) -> Result<TokenRecord> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            tracing::debug!(path = %self.path.display(), error = %e, "Credential store not readable");
            AppError::CredentialsMissing
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Credential store is malformed");
            AppError::CredentialsMissing
        })
    }

    /// Overwrite the store with a new token record.
    ///
    /// Serializes to `<path>.tmp` and renames into place; rename is atomic
    /// on the same filesystem, so an interrupted write leaves the previous
    /// record intact.
    pub fn save(&self, record: &TokenRecord) -> Result<()> {
        let json = serde_json::to_string(record)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Token serialization failed: {}", e)))?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), "Credential store updated");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
