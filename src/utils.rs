use std::path::{Component, Path, PathBuf};

/// Resolve a user path, expanding ~ to the home directory and making
/// relative paths absolute against the current directory.
pub fn resolve_user_path(input: &str) -> PathBuf {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return PathBuf::new();
    }
    if trimmed == "~" || trimmed.starts_with("~/") {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let rest = trimmed.trim_start_matches('~').trim_start_matches('/');
        if rest.is_empty() {
            return normalize_path(&home);
        }
        return normalize_path(&home.join(rest));
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        normalize_path(path)
    } else {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        normalize_path(&cwd.join(path))
    }
}

/// Lexically normalize a path: drop `.` segments and fold `..` into the
/// preceding segment. Symlinks are not resolved and the filesystem is not
/// touched.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_path_drops_cur_dir() {
        assert_eq!(normalize_path(Path::new("/a/./b/.")), PathBuf::from("/a/b"));
    }

    #[test]
    fn normalize_path_folds_parent_dir() {
        assert_eq!(normalize_path(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize_path(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    fn normalize_path_keeps_leading_parent_of_relative() {
        assert_eq!(normalize_path(Path::new("../a/./b")), PathBuf::from("../a/b"));
        assert_eq!(normalize_path(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    fn normalize_path_strips_trailing_slash() {
        assert_eq!(normalize_path(Path::new("/usr/src/")), PathBuf::from("/usr/src"));
    }

    #[test]
    fn resolve_user_path_blank() {
        assert_eq!(resolve_user_path(""), PathBuf::new());
        assert_eq!(resolve_user_path("   "), PathBuf::new());
    }

    #[test]
    fn resolve_user_path_tilde_subdir() {
        let result = resolve_user_path("~/openaptx");
        assert!(result.to_string_lossy().ends_with("openaptx"));
    }

    #[test]
    fn resolve_user_path_relative() {
        let result = resolve_user_path("src/../build");
        assert!(result.is_absolute());
        assert!(result.ends_with("build"));
        assert!(!result.to_string_lossy().contains(".."));
    }

    #[test]
    fn resolve_user_path_absolute() {
        assert_eq!(resolve_user_path(" /opt/openaptx/./ "), PathBuf::from("/opt/openaptx"));
    }
}
