use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::warn;

pub mod loader;

pub use self::loader::ResourceLoader;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("resource not found at path: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("cannot read resource {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("resource is not valid UTF-8 text: {}", .path.display())]
    InvalidUtf8 { path: PathBuf },
    #[error("resource is empty: {}", .path.display())]
    Empty { path: PathBuf },
}

pub trait ReadFile {
    fn load(&self, file_name: &str) -> Result<String, ResourceError>;
}

/// Reads every byte of the file at `path`.
///
/// Only a file that cannot be opened is reported as `NotFound`.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, ResourceError> {
    let path = path.as_ref();
    let mut file = fs::File::open(path).map_err(|_| ResourceError::NotFound {
        path: path.to_path_buf(),
    })?;

    // pre-size from the file length, the read itself decides the final size
    let capacity = file
        .metadata()
        .map(|metadata| metadata.len() as usize)
        .unwrap_or(0);
    let mut content = Vec::with_capacity(capacity);
    file.read_to_end(&mut content).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content)
}

/// Reads the whole file at `path` into a freshly allocated string.
///
/// Returns `None` only when the file cannot be opened or read. Bytes that
/// are not valid UTF-8 come back as replacement characters.
pub fn read_whole_file<P: AsRef<Path>>(path: P) -> Option<String> {
    let path = path.as_ref();
    match read_bytes(path) {
        Ok(content) => Some(match String::from_utf8(content) {
            Ok(text) => text,
            Err(e) => {
                warn!("{} is not valid UTF-8 text", path.display());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        }),
        Err(ResourceError::NotFound { .. }) => None,
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Writes `content` to `path`, truncating any previous content.
///
/// Returns `true` only if every byte made it to the file.
pub fn write_whole_file<P: AsRef<Path>>(path: P, content: &str) -> bool {
    let mut file = match fs::File::create(path.as_ref()) {
        Ok(file) => file,
        Err(_) => return false,
    };
    file.write_all(content.as_bytes()).is_ok() && file.flush().is_ok()
}
