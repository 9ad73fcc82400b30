use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

///
/// Reject sample names that can't be used as a single path component.
///
pub fn validate_sample(sample: &str) -> Result<()> {
    if sample.trim().is_empty() {
        bail!("Sample name must not be empty");
    }
    if sample.contains('/') || sample.contains('\\') || sample == "." || sample == ".." {
        bail!("Sample name must not contain path separators: {}", sample);
    }
    Ok(())
}

///
/// Create the output directory (and its parents) if it doesn't exist yet.
///
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    #[case("NA06994", true)]
    #[case("HG00096_rep2", true)]
    #[case("", false)]
    #[case("  ", false)]
    #[case("../NA06994", false)]
    #[case("a\\b", false)]
    #[case("..", false)]
    fn test_validate_sample(#[case] sample: &str, #[case] ok: bool) {
        assert_eq!(validate_sample(sample).is_ok(), ok);
    }

    #[rstest]
    fn test_prepare_output_dir_is_idempotent() {
        let tempdir = tempfile::tempdir().unwrap();
        let dir = tempdir.path().join("results").join("coverage");

        prepare_output_dir(&dir).unwrap();
        prepare_output_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }
}
