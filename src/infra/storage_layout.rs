use std::{env, fs, path::PathBuf};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "pomodoro";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub config_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        let config_base = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve config base directory (XDG_CONFIG_HOME/HOME)".into(),
            })?;

        let config_dir = config_base.join(APP_DIR_NAME);
        let log_dir = config_dir.join("logs");

        Ok(Self {
            config_dir,
            log_dir,
        })
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.config_dir, &self.log_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::env_lock;

    #[test]
    fn log_dir_is_under_config_dir() {
        let _guard = env_lock();
        let layout = StorageLayout::resolve().expect("layout should resolve");

        assert!(layout.log_dir.starts_with(&layout.config_dir));
        assert!(layout.config_dir.ends_with(APP_DIR_NAME));
    }

    #[test]
    fn honours_xdg_config_home_and_creates_dirs() {
        let _guard = env_lock();
        let root = tempfile::tempdir().expect("temp dir should be creatable");

        let old_xdg = env::var_os("XDG_CONFIG_HOME");
        // SAFETY: env is guarded by process-wide test mutex.
        unsafe { env::set_var("XDG_CONFIG_HOME", root.path()) };

        let layout = StorageLayout::resolve().expect("layout should resolve");
        layout.ensure_dirs().expect("layout dirs should be created");

        match old_xdg {
            Some(value) => {
                // SAFETY: restoring env while guard is held.
                unsafe { env::set_var("XDG_CONFIG_HOME", value) }
            }
            None => {
                // SAFETY: restoring env while guard is held.
                unsafe { env::remove_var("XDG_CONFIG_HOME") }
            }
        }

        assert_eq!(layout.config_dir, root.path().join(APP_DIR_NAME));
        assert!(layout.log_dir.is_dir());
    }
}
