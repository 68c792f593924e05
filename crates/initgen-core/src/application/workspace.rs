//! Temporary workspace allocation and bookkeeping.
//!
//! Every generation run gets a private, uniquely named root directory under
//! a configured scratch root. The scratch root is created lazily, at most
//! once per manager, and is safe under concurrent first use. Produced roots
//! are registered for later cleanup before anything is written beneath
//! them, so a failed run always leaves a discoverable artifact.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::application::GenerationError;
use crate::application::ports::Filesystem;

/// How many fresh names to try before declaring allocation exhausted.
const ALLOCATION_ATTEMPTS: u32 = 3;

/// Bookkeeping map of produced paths, keyed by group.
///
/// This is a side-channel: generation correctness never reads it. Each
/// registration also emits a `debug!` event, which is the observable log of
/// everything a run produced.
#[derive(Debug, Default)]
pub struct TemporaryFileRegistry {
    inner: Mutex<HashMap<String, Vec<PathBuf>>>,
}

impl TemporaryFileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a produced path under a group.
    pub fn register(&self, group: &str, path: &Path) {
        debug!(group, path = %path.display(), "registered temporary path");
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner
            .entry(group.to_string())
            .or_default()
            .push(path.to_path_buf());
    }

    /// Paths registered under a group, in registration order.
    pub fn paths(&self, group: &str) -> Vec<PathBuf> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.get(group).cloned().unwrap_or_default()
    }

    /// Remove and return a group's paths.
    pub fn drain(&self, group: &str) -> Vec<PathBuf> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.remove(group).unwrap_or_default()
    }

    /// All known group keys.
    pub fn groups(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.keys().cloned().collect()
    }
}

/// Allocates per-run root directories under a configured scratch root.
pub struct TemporaryWorkspace {
    scratch_root: PathBuf,
    scratch_ready: OnceLock<()>,
    registry: TemporaryFileRegistry,
}

impl TemporaryWorkspace {
    /// Create a manager rooted at `scratch_root`. The directory itself is
    /// not touched until the first allocation.
    pub fn new(scratch_root: impl Into<PathBuf>) -> Self {
        Self {
            scratch_root: scratch_root.into(),
            scratch_ready: OnceLock::new(),
            registry: TemporaryFileRegistry::new(),
        }
    }

    pub fn scratch_root(&self) -> &Path {
        &self.scratch_root
    }

    pub fn registry(&self) -> &TemporaryFileRegistry {
        &self.registry
    }

    /// Allocate a fresh, empty, uniquely named root directory.
    ///
    /// The root is registered (group key = directory name) before this
    /// returns, so even an immediately-failing run can be cleaned up.
    #[instrument(skip_all, fields(scratch_root = %self.scratch_root.display()))]
    pub fn allocate_root(&self, fs: &dyn Filesystem) -> Result<PathBuf, GenerationError> {
        self.ensure_scratch_root(fs)?;

        for _ in 0..ALLOCATION_ATTEMPTS {
            let name = format!("project-{}", Uuid::new_v4().simple());
            let root = self.scratch_root.join(&name);
            if fs.exists(&root) {
                continue;
            }
            fs.create_dir_all(&root)
                .map_err(|e| GenerationError::workspace(e.to_string()))?;
            self.registry.register(&name, &root);
            debug!(root = %root.display(), "allocated run root");
            return Ok(root);
        }

        Err(GenerationError::workspace(format!(
            "could not allocate a unique root under {} after {} attempts",
            self.scratch_root.display(),
            ALLOCATION_ATTEMPTS
        )))
    }

    /// Remove every path registered under a group. Explicit caller-driven
    /// operation; the manager never cleans up on its own.
    pub fn cleanup(&self, fs: &dyn Filesystem, group: &str) -> Result<(), GenerationError> {
        for path in self.registry.drain(group) {
            if fs.exists(&path) {
                fs.remove_dir_all(&path)?;
            }
        }
        Ok(())
    }

    /// Create the scratch root once per manager lifetime.
    ///
    /// `create_dir_all` is idempotent, so the worst a first-use race costs
    /// is a redundant create; the OnceLock keeps the steady state cheap.
    fn ensure_scratch_root(&self, fs: &dyn Filesystem) -> Result<(), GenerationError> {
        if self.scratch_ready.get().is_some() {
            return Ok(());
        }
        fs.create_dir_all(&self.scratch_root)
            .map_err(|e| GenerationError::workspace(e.to_string()))?;
        let _ = self.scratch_ready.set(());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Minimal filesystem double that counts directory creations.
    struct CountingFs {
        created: AtomicUsize,
    }

    impl CountingFs {
        fn new() -> Self {
            Self {
                created: AtomicUsize::new(0),
            }
        }
    }

    impl Filesystem for CountingFs {
        fn create_dir_all(&self, _path: &Path) -> Result<(), GenerationError> {
            self.created.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        fn write_file(&self, _: &Path, _: &str) -> Result<(), GenerationError> {
            Ok(())
        }
        fn write_binary(&self, _: &Path, _: &[u8]) -> Result<(), GenerationError> {
            Ok(())
        }
        fn set_executable(&self, _: &Path) -> Result<(), GenerationError> {
            Ok(())
        }
        fn exists(&self, _: &Path) -> bool {
            false
        }
        fn remove_dir_all(&self, _: &Path) -> Result<(), GenerationError> {
            Ok(())
        }
    }

    #[test]
    fn allocates_unique_registered_roots() {
        let workspace = TemporaryWorkspace::new("/scratch");
        let fs = CountingFs::new();

        let a = workspace.allocate_root(&fs).unwrap();
        let b = workspace.allocate_root(&fs).unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("/scratch"));

        let group = a.file_name().unwrap().to_str().unwrap();
        assert_eq!(workspace.registry().paths(group), vec![a.clone()]);
    }

    #[test]
    fn scratch_root_created_once() {
        let workspace = TemporaryWorkspace::new("/scratch");
        let fs = CountingFs::new();

        workspace.allocate_root(&fs).unwrap();
        workspace.allocate_root(&fs).unwrap();
        workspace.allocate_root(&fs).unwrap();

        // One create per allocated root plus exactly one for the scratch
        // root itself.
        assert_eq!(fs.created.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn scratch_root_init_is_safe_under_concurrent_first_use() {
        let workspace = Arc::new(TemporaryWorkspace::new("/scratch"));
        let fs = Arc::new(CountingFs::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let workspace = Arc::clone(&workspace);
                let fs = Arc::clone(&fs);
                std::thread::spawn(move || workspace.allocate_root(&*fs).unwrap())
            })
            .collect();

        let roots: HashSet<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(roots.len(), 8);

        // Threads racing first use may each create the scratch root once;
        // creation is idempotent, so anywhere from one to one-per-thread
        // scratch creates on top of the eight root creates is acceptable.
        let created = fs.created.load(Ordering::SeqCst);
        assert!((9..=16).contains(&created), "unexpected create count {created}");
    }

    #[test]
    fn cleanup_drains_the_group() {
        let workspace = TemporaryWorkspace::new("/scratch");
        let fs = CountingFs::new();

        let root = workspace.allocate_root(&fs).unwrap();
        let group = root.file_name().unwrap().to_str().unwrap().to_string();

        workspace.cleanup(&fs, &group).unwrap();
        assert!(workspace.registry().paths(&group).is_empty());
    }

    #[test]
    fn registry_keeps_registration_order() {
        let registry = TemporaryFileRegistry::new();
        registry.register("run", Path::new("/a"));
        registry.register("run", Path::new("/b"));
        registry.register("other", Path::new("/c"));
        assert_eq!(
            registry.paths("run"),
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );

        let mut groups = registry.groups();
        groups.sort();
        assert_eq!(groups, vec!["other".to_string(), "run".to_string()]);
    }
}
