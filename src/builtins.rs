//! Command cache consulted by tokenizers, and the guard that scopes it.
//!
//! Shell-aware highlighters need to know whether a bare word names a runnable
//! command (`ls` is a keyword, `non-existance-cmd` is an error) and whether
//! an argument names something on disk. That knowledge lives in a
//! [`CommandCache`]. A cache only becomes visible to tokenizers while a
//! [`BuiltinsGuard`] for it is alive on the current thread:
//!
//! ```
//! use lexcheck::builtins::{self, BuiltinsGuard, CommandCache};
//!
//! assert!(!builtins::is_loaded());
//! {
//!     let _guard = BuiltinsGuard::load(CommandCache::new().with_command("cd"));
//!     assert!(builtins::current().is_some_and(|cache| cache.is_command("cd")));
//! }
//! assert!(!builtins::is_loaded());
//! ```

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::event::{LogLevel, emit_log};

/// Known commands, aliases, and executable search directories.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandCache {
    commands: BTreeSet<String>,
    aliases: BTreeSet<String>,
    path: Vec<PathBuf>,
}

impl CommandCache {
    /// An empty cache: nothing resolves except explicit paths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache searching the directories listed in `PATH`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_path_var(env::var_os("PATH").as_deref())
    }

    /// A cache searching the directories in a `PATH`-style list.
    #[must_use]
    pub fn from_path_var(value: Option<&OsStr>) -> Self {
        let path = value
            .map(|v| env::split_paths(v).filter(|p| !p.as_os_str().is_empty()).collect())
            .unwrap_or_default();
        Self {
            path,
            ..Self::default()
        }
    }

    /// Register a builtin command name (e.g. `cd`, which has no executable).
    #[must_use]
    pub fn with_command(mut self, name: impl Into<String>) -> Self {
        self.commands.insert(name.into());
        self
    }

    /// Register an alias name.
    #[must_use]
    pub fn with_alias(mut self, name: impl Into<String>) -> Self {
        self.aliases.insert(name.into());
        self
    }

    /// Append a directory to search for executables.
    #[must_use]
    pub fn with_path_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.path.push(dir.into());
        self
    }

    #[must_use]
    pub fn path_dirs(&self) -> &[PathBuf] {
        &self.path
    }

    /// True when `word` resolves to something runnable.
    ///
    /// Registered commands and aliases win. A word containing a path
    /// separator must name an executable file; any other word is looked up
    /// in the search directories in order.
    #[must_use]
    pub fn is_command(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        if self.commands.contains(word) || self.aliases.contains(word) {
            return true;
        }
        if word.contains('/') || word.contains(std::path::MAIN_SEPARATOR) {
            return is_executable(Path::new(word));
        }
        self.path.iter().any(|dir| is_executable(&dir.join(word)))
    }

    /// True when `text` names an existing file or directory.
    #[must_use]
    pub fn is_path(&self, text: &str) -> bool {
        !text.is_empty() && fs::metadata(text).is_ok()
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path).is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

thread_local! {
    static ACTIVE: RefCell<Vec<(u64, Arc<CommandCache>)>> = const { RefCell::new(Vec::new()) };
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

/// Keeps a [`CommandCache`] active on the current thread.
///
/// Loading nests: the most recent live guard's cache is the current one.
/// Dropping the guard releases it, including during unwinding. The guard is
/// `!Send` because the activation belongs to the thread that created it.
#[derive(Debug)]
#[must_use = "the cache is released as soon as the guard is dropped"]
pub struct BuiltinsGuard {
    cache: Arc<CommandCache>,
    id: u64,
    _not_send: PhantomData<*const ()>,
}

impl BuiltinsGuard {
    /// Activate `cache` for the current thread.
    pub fn load(cache: impl Into<Arc<CommandCache>>) -> Self {
        let cache = cache.into();
        let id = NEXT_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        let depth = ACTIVE.with(|active| {
            let mut active = active.borrow_mut();
            active.push((id, Arc::clone(&cache)));
            active.len()
        });
        emit_log(
            LogLevel::Debug,
            &format!(
                "builtins {id} loaded (depth {depth}, {} commands, {} aliases, {} path dirs)",
                cache.commands.len(),
                cache.aliases.len(),
                cache.path.len()
            ),
        );
        Self {
            cache,
            id,
            _not_send: PhantomData,
        }
    }

    /// Activate a cache built from the process `PATH`.
    pub fn load_from_env() -> Self {
        Self::load(CommandCache::from_env())
    }

    #[must_use]
    pub fn cache(&self) -> &CommandCache {
        &self.cache
    }
}

impl Drop for BuiltinsGuard {
    fn drop(&mut self) {
        // Releasing an entry also releases everything loaded after it. An
        // entry already released that way is gone, and its guard is a no-op.
        let released = ACTIVE
            .try_with(|active| {
                let mut active = active.borrow_mut();
                let pos = active.iter().position(|(id, _)| *id == self.id)?;
                let count = active.len() - pos;
                active.truncate(pos);
                Some(count)
            })
            .ok()
            .flatten();
        if let Some(count) = released {
            emit_log(
                LogLevel::Debug,
                &format!("builtins {} released ({count} entries)", self.id),
            );
        }
    }
}

/// The cache tokenizers should consult, if any is loaded on this thread.
#[must_use]
pub fn current() -> Option<Arc<CommandCache>> {
    ACTIVE
        .try_with(|active| active.borrow().last().map(|(_, cache)| Arc::clone(cache)))
        .ok()
        .flatten()
}

/// True while any [`BuiltinsGuard`] is alive on this thread.
#[must_use]
pub fn is_loaded() -> bool {
    ACTIVE
        .try_with(|active| !active.borrow().is_empty())
        .unwrap_or(false)
}
