use std::{
    fmt,
    path,
};

use tracing::debug;

use super::{read_bytes, ReadFile, ResourceError};

impl fmt::Debug for ResourceLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceLoader Path: {:#?}", self.root)
    }
}

impl fmt::Display for ResourceLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceLoader Path: {}", self.root.display())
    }
}

/// Loads text resources relative to a root directory.
pub struct ResourceLoader {
    pub root: path::PathBuf,
}

impl ResourceLoader {
    pub fn new<P: AsRef<path::Path>>(root: P) -> ResourceLoader {
        ResourceLoader {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// resource names are always `/` separated, whatever the platform
    pub fn resolve(&self, file_name: &str) -> path::PathBuf {
        let mut path = self.root.clone();
        for segment in file_name.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path
    }
}

impl ReadFile for ResourceLoader {
    fn load(&self, file_name: &str) -> Result<String, ResourceError> {
        let path = self.resolve(file_name);
        debug!("loading resource {}", path.display());

        let content = read_bytes(&path)?;
        if content.is_empty() {
            return Err(ResourceError::Empty { path });
        }
        String::from_utf8(content).map_err(|_| ResourceError::InvalidUtf8 { path })
    }
}
