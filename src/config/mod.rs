//! Configuration loading and validation

mod schema;

pub use schema::*;

use anyhow::Result;
use std::path::Path;

/// Load a spec library from a YAML file
pub fn load_config(path: &Path) -> Result<WarpConfig> {
    log::debug!("loading spec library from {:?}", path);
    let contents = std::fs::read_to_string(path)?;
    let config: WarpConfig = serde_yaml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Example configuration written by `warpspec init`
pub const EXAMPLE_CONFIG: &str = r#"# Custom warp specs. Names must not shadow built-in defaults.
specs:
  cutoff:
    min: 40
    max: 12000
    curve: exp
  resonance:
    min: 0
    max: 1
    curve: 4
  drive:
    min: 0
    max: 24
    curve: lin
    step: 0.5
  fader:
    min: -60
    max: 6
    curve: db
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::CurveKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_example_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(EXAMPLE_CONFIG.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.specs.len(), 4);

        let cutoff = config.resolve("cutoff").unwrap();
        assert_eq!(cutoff.curve(), CurveKind::Exponential);
        assert_eq!(cutoff.minval(), 40.0);

        let drive = config.resolve("drive").unwrap();
        assert_eq!(drive.step(), 0.5);
    }

    #[test]
    fn test_load_invalid_config() {
        let yaml = r#"
specs:
  freq:
    min: 1
    max: 2
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_config(Path::new("/nonexistent/warpspec.yaml")).is_err());
    }
}
