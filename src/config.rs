//! Project-root configuration for asset and output paths.

use std::path::{Path, PathBuf};

/// Environment variable overriding the bundled fonts directory.
pub const FONTS_DIR_ENV: &str = "OPNSENSE_GUIDE_FONTS_DIR";

/// Resolved locations for the guide's inputs and output.
///
/// All paths derive from a single project root, fixed at startup, so the
/// generator behaves the same regardless of the working directory it is
/// launched from.
#[derive(Clone, Debug)]
pub struct GuideConfig {
    project_root: PathBuf,
}

impl GuideConfig {
    /// Uses the crate's own source tree as the project root.
    pub fn from_manifest_dir() -> Self {
        Self::with_root(PathBuf::from(env!("CARGO_MANIFEST_DIR")))
    }

    /// Uses an explicit project root.
    pub fn with_root(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.project_root.join("assets")
    }

    /// The optional logo asset; a missing file triggers the text fallback.
    pub fn logo_path(&self) -> PathBuf {
        self.assets_dir().join("opnsense-logo.png")
    }

    /// The bundled fonts directory, unless overridden via
    /// [`FONTS_DIR_ENV`].
    pub fn fonts_dir(&self) -> PathBuf {
        match std::env::var_os(FONTS_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => self.assets_dir().join("fonts"),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.project_root.join("docs").join("OPNsense_User_Guide.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_anchored_at_the_project_root() {
        let config = GuideConfig::with_root("/srv/guide");
        assert_eq!(
            config.logo_path(),
            PathBuf::from("/srv/guide/assets/opnsense-logo.png")
        );
        assert_eq!(
            config.output_path(),
            PathBuf::from("/srv/guide/docs/OPNsense_User_Guide.pdf")
        );
    }

    #[test]
    fn manifest_root_contains_the_crate_manifest() {
        let config = GuideConfig::from_manifest_dir();
        assert!(config.project_root().join("Cargo.toml").exists());
    }
}
