use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::error::CommandError;

/// The LAStools executables this front end knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    LasView,
    LasGround,
    Blast2Dem,
}

impl Tool {
    /// Base executable name without the bitness suffix.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LasView => "lasview",
            Self::LasGround => "lasground",
            Self::Blast2Dem => "blast2dem",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "lasview" => Some(Self::LasView),
            "lasground" => Some(Self::LasGround),
            "blast2dem" => Some(Self::Blast2Dem),
            _ => None,
        }
    }

    pub fn docs_prefix(&self) -> &'static str {
        match self {
            Self::LasView => "view",
            Self::LasGround => "grd",
            Self::Blast2Dem => "dem",
        }
    }

    /// Documentation topic for the tool as a whole, e.g. `grd_lasground`.
    pub fn docs_topic(&self) -> String {
        format!("{}_{}", self.docs_prefix(), self.name())
    }

    /// File name of the 64-bit build, e.g. `lasground64.exe` on Windows.
    pub fn executable_name(&self) -> String {
        format!("{}64{}", self.name(), std::env::consts::EXE_SUFFIX)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Location of an installed LAStools distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolkit {
    bin_dir: PathBuf,
}

impl Toolkit {
    /// Accepts either the LAStools root or its `bin` directory.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let bin_dir = if path.file_name().is_some_and(|name| name == "bin") {
            path
        } else {
            path.join("bin")
        };
        Self { bin_dir }
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    pub fn executable(&self, tool: Tool) -> PathBuf {
        self.bin_dir.join(tool.executable_name())
    }

    pub fn verify(&self) -> Result<(), CommandError> {
        if self.bin_dir.is_dir() {
            Ok(())
        } else {
            Err(CommandError::ToolkitNotFound(self.bin_dir.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for tool in [Tool::LasView, Tool::LasGround, Tool::Blast2Dem] {
            assert_eq!(Tool::from_name(tool.name()), Some(tool));
        }
        assert_eq!(Tool::from_name("lasinfo"), None);
        assert_eq!(Tool::LasGround.docs_topic(), "grd_lasground");
    }

    #[test]
    fn root_and_bin_resolve_to_the_same_directory() {
        let from_root = Toolkit::new("/opt/lastools");
        let from_bin = Toolkit::new("/opt/lastools/bin");
        assert_eq!(from_root, from_bin);
        assert_eq!(from_root.bin_dir(), Path::new("/opt/lastools/bin"));
    }

    #[test]
    fn executable_uses_64bit_name() {
        let toolkit = Toolkit::new("/opt/lastools");
        let exe = toolkit.executable(Tool::LasGround);
        let file_name = exe.file_name().unwrap().to_str().unwrap();
        assert!(file_name.starts_with("lasground64"));
        assert_eq!(exe.parent().unwrap(), Path::new("/opt/lastools/bin"));
    }

    #[test]
    fn verify_fails_without_bin_directory() {
        let dir = tempfile::tempdir().unwrap();
        let toolkit = Toolkit::new(dir.path());
        match toolkit.verify() {
            Err(CommandError::ToolkitNotFound(path)) => assert_eq!(path, dir.path().join("bin")),
            other => panic!("unexpected result: {:?}", other),
        }

        std::fs::create_dir(dir.path().join("bin")).unwrap();
        assert!(toolkit.verify().is_ok());
    }
}
