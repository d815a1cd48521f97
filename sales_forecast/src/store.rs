//! In-memory and on-disk record of the most recently trained model per product
//!
//! The store owns a keyed map guarded by a mutex and mirrors every write to
//! a flat JSON file per product. Writes are unconditional overwrites with no
//! versioning; nothing in the exposed operations reads the files back
//! (prediction always refits from submitted history).

use crate::error::Result;
use crate::model::TrendModel;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Keyed store of trained trend models
#[derive(Debug)]
pub struct ModelStore {
    dir: PathBuf,
    models: Mutex<HashMap<String, TrendModel>>,
}

impl ModelStore {
    /// Open a store backed by the given models directory, creating it if
    /// necessary
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        Ok(Self {
            dir,
            models: Mutex::new(HashMap::new()),
        })
    }

    /// Overwrite the stored model for a product, in memory and on disk
    pub fn put(&self, product: &str, model: TrendModel) -> Result<()> {
        {
            let mut models = self.lock();
            models.insert(product.to_string(), model);
        }

        let json = serde_json::to_string_pretty(&model)?;
        fs::write(self.model_path(product), json)?;

        Ok(())
    }

    /// The in-memory model for a product, if one was trained this process
    pub fn get(&self, product: &str) -> Option<TrendModel> {
        self.lock().get(product).copied()
    }

    /// Number of products with an in-memory model
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check whether any model has been trained
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Deterministic file path for a product's durable model
    pub fn model_path(&self, product: &str) -> PathBuf {
        self.dir.join(format!("model_{}.json", sanitize(product)))
    }

    /// Read a product's durable model back from disk.
    ///
    /// The serialized form is implementation-internal; this read-back exists
    /// for inspection and tests, not for the exposed operations.
    pub fn load(&self, product: &str) -> Result<TrendModel> {
        let json = fs::read_to_string(self.model_path(product))?;
        Ok(serde_json::from_str(&json)?)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, TrendModel>> {
        // A poisoned lock only means a writer panicked mid-insert; the map
        // itself is still a usable HashMap.
        self.models
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Map a product identifier to a filename-safe form.
///
/// Keeps ASCII alphanumerics plus `.`, `_` and `-`; everything else becomes
/// `_` so an identifier cannot escape the models directory.
fn sanitize(product: &str) -> String {
    product
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_safe_chars() {
        assert_eq!(sanitize("Soap-2.0_x"), "Soap-2.0_x");
    }

    #[test]
    fn sanitize_replaces_path_separators() {
        assert_eq!(sanitize("../etc/passwd"), ".._etc_passwd");
        assert_eq!(sanitize("a b/c"), "a_b_c");
    }
}
