use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "frames";
pub const DEFAULT_PREFIX: &str = "frame";

/// Deterministic file location for each frame index:
/// `<output_dir>/<prefix><index:04>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePath {
    output_dir: PathBuf,
    prefix: String,
}

impl Default for FramePath {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR, DEFAULT_PREFIX)
    }
}

impl FramePath {
    pub fn new(output_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: prefix.into(),
        }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn for_frame(&self, frame_index: u32, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}{:04}.{}", self.prefix, frame_index, extension))
    }
}
