//! Opening annotated images in the platform viewer

use std::io;
use std::path::Path;

/// Launch the desktop's default image viewer on `path` without waiting for it
/// to close. Only existing files are handed to the viewer.
pub fn show_image(path: &Path) -> io::Result<()> {
    if !path.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a file", path.display()),
        ));
    }
    opener::open(path).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
