//! Filesystem-path derivation from request values, with defensive validation.
//!
//! The resolution collaborator is supposed to hand us pre-validated input,
//! but both `package_name` and `base_dir` end up as on-disk paths under the
//! allocated root. Invariant: no value accepted here can escape that root.

use std::path::{Path, PathBuf};

use super::DomainError;

/// Convert a dotted package name into a relative path (`com.example.demo`
/// -> `com/example/demo`), rejecting traversal and separator tricks.
pub fn package_path(package_name: &str) -> Result<PathBuf, DomainError> {
    if package_name.is_empty() {
        return Err(DomainError::EmptyPackageName);
    }

    let mut path = PathBuf::new();
    for segment in package_name.split('.') {
        validate_segment(package_name, segment)?;
        path.push(segment);
    }
    Ok(path)
}

/// Validate a caller-supplied base directory as a safe relative path.
pub fn base_dir_path(base_dir: &str) -> Result<PathBuf, DomainError> {
    let unsafe_dir = || DomainError::UnsafeBaseDir {
        path: base_dir.to_string(),
    };

    if base_dir.is_empty() {
        return Err(unsafe_dir());
    }
    let path = Path::new(base_dir);
    if path.is_absolute() {
        return Err(unsafe_dir());
    }
    for component in path.components() {
        match component {
            std::path::Component::Normal(_) => {}
            _ => return Err(unsafe_dir()),
        }
    }
    Ok(path.to_path_buf())
}

fn validate_segment(package: &str, segment: &str) -> Result<(), DomainError> {
    let bad = segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment.contains('/')
        || segment.contains('\\')
        || segment.contains('\0');
    if bad {
        return Err(DomainError::UnsafePackageSegment {
            package: package.to_string(),
            segment: segment.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_become_separators() {
        assert_eq!(
            package_path("com.example.demo").unwrap(),
            PathBuf::from("com/example/demo")
        );
        assert_eq!(package_path("demo").unwrap(), PathBuf::from("demo"));
    }

    #[test]
    fn rejects_traversal_segments() {
        assert!(package_path("com..example").is_err());
        assert!(package_path("com.example.").is_err());
        assert!(package_path("com.../..example").is_err());
        assert!(package_path("").is_err());
    }

    #[test]
    fn rejects_separators_inside_segments() {
        assert!(package_path("com.exa/mple").is_err());
        assert!(package_path("com.exa\\mple").is_err());
    }

    #[test]
    fn base_dir_must_be_plain_relative() {
        assert_eq!(base_dir_path("demo").unwrap(), PathBuf::from("demo"));
        assert_eq!(
            base_dir_path("nested/demo").unwrap(),
            PathBuf::from("nested/demo")
        );
        assert!(base_dir_path("/abs").is_err());
        assert!(base_dir_path("../escape").is_err());
        assert!(base_dir_path("a/../b").is_err());
        assert!(base_dir_path("").is_err());
    }
}
