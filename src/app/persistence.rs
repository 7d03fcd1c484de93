// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.

use crate::config::{self, Config};
use std::path::Path;

/// Records `path` as the last opened catalog and writes the settings file.
///
/// Returns whether the settings file should be written. Nothing is written
/// while `config_warning` is set: the in-memory config then holds defaults,
/// and saving it would replace the user's unreadable file. Unit tests never
/// touch the user's settings; the in-memory config is still updated.
pub fn remember_catalog(cfg: &mut Config, path: &Path, config_warning: Option<&str>) -> bool {
    if cfg.gallery.last_catalog.as_deref() == Some(path) {
        return false;
    }
    cfg.gallery.last_catalog = Some(path.to_path_buf());

    if let Some(warning) = config_warning {
        tracing::debug!(warning, "settings were not loaded, keeping file untouched");
        return false;
    }

    if cfg!(test) {
        return true;
    }

    if let Err(error) = config::save(cfg) {
        tracing::warn!(%error, "failed to save config");
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn remember_catalog_updates_in_memory_config() {
        let mut cfg = Config::default();
        assert!(remember_catalog(&mut cfg, Path::new("/tmp/pots.toml"), None));
        assert_eq!(
            cfg.gallery.last_catalog,
            Some(PathBuf::from("/tmp/pots.toml"))
        );
    }

    #[test]
    fn same_catalog_is_not_written_again() {
        let mut cfg = Config::default();
        remember_catalog(&mut cfg, Path::new("/tmp/pots.toml"), None);
        assert!(!remember_catalog(&mut cfg, Path::new("/tmp/pots.toml"), None));
    }

    #[test]
    fn unreadable_settings_are_never_overwritten() {
        let mut cfg = Config::default();
        let written = remember_catalog(
            &mut cfg,
            Path::new("/tmp/pots.toml"),
            Some("warning-config-load-error"),
        );
        assert!(!written);
        assert_eq!(
            cfg.gallery.last_catalog,
            Some(PathBuf::from("/tmp/pots.toml"))
        );
    }
}
