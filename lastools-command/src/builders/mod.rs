use std::path::{Path, PathBuf};

use crate::{command::CommandLine, error::CommandError, tool::Toolkit};

mod blast2dem;
mod lasground;
mod lasview;

pub use blast2dem::Blast2DemCommand;
pub use lasground::LasGroundCommand;
pub use lasview::LasViewCommand;

pub trait CommandBuilder {
    fn build(&self, toolkit: &Toolkit) -> Result<CommandLine, CommandError>;
}

/// Where a processing step writes its result. Either part falls back to a
/// name derived from the input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTarget {
    pub dir: Option<PathBuf>,
    pub file: Option<String>,
}

impl OutputTarget {
    /// Resolves the output path for `input`: the input's directory and
    /// `<prefix><input file name>`, with the extension swapped when given.
    pub fn resolve(&self, input: &Path, prefix: &str, extension: Option<&str>) -> PathBuf {
        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        let file = match &self.file {
            Some(file) => PathBuf::from(file),
            None => {
                let name = input
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let mut file = PathBuf::from(format!("{}{}", prefix, name));
                if let Some(ext) = extension {
                    file.set_extension(ext);
                }
                file
            }
        };
        dir.join(file)
    }
}

pub(crate) fn check_input(input: &Path) -> Result<(), CommandError> {
    if input.as_os_str().is_empty() || !input.exists() {
        return Err(CommandError::MissingInput(input.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_input() {
        let target = OutputTarget::default();
        let path = target.resolve(Path::new("/data/lidar/tile_01.las"), "grd_", None);
        assert_eq!(path, PathBuf::from("/data/lidar/grd_tile_01.las"));
    }

    #[test]
    fn extension_is_replaced_when_requested() {
        let target = OutputTarget::default();
        let path = target.resolve(Path::new("/data/tile.laz"), "dem_", Some("tif"));
        assert_eq!(path, PathBuf::from("/data/dem_tile.tif"));
    }

    #[test]
    fn dir_and_file_override_independently() {
        let input = Path::new("/data/tile.las");
        let only_dir = OutputTarget {
            dir: Some(PathBuf::from("/out")),
            file: None,
        };
        assert_eq!(only_dir.resolve(input, "grd_", None), PathBuf::from("/out/grd_tile.las"));

        let only_file = OutputTarget {
            dir: None,
            file: Some("ground.laz".to_string()),
        };
        assert_eq!(only_file.resolve(input, "grd_", None), PathBuf::from("/data/ground.laz"));
    }

    #[test]
    fn missing_input_is_reported() {
        assert!(matches!(
            check_input(Path::new("")),
            Err(CommandError::MissingInput(_))
        ));
        assert!(check_input(Path::new("/definitely/not/here.las")).is_err());

        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(check_input(file.path()).is_ok());
    }
}
