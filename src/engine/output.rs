//! Output path handling.

use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` to the current user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    expand_home_with(path, dirs::home_dir().as_deref())
}

/// Expand a leading `~` to `home`. Paths without one, `~user` forms, and
/// any path when `home` is unknown are returned unchanged.
pub fn expand_home_with(path: &Path, home: Option<&Path>) -> PathBuf {
    let mut components = path.components();

    match (components.next(), home) {
        (Some(Component::Normal(first)), Some(home)) if first == "~" => {
            let rest = components.as_path();
            if rest.as_os_str().is_empty() {
                home.to_path_buf()
            } else {
                home.join(rest)
            }
        }
        _ => path.to_path_buf(),
    }
}

/// Expand `path` and create any missing parent directories.
pub fn prepare_output(path: &Path) -> std::io::Result<PathBuf> {
    let path = expand_home(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    Ok(path)
}
