//! String interner for identifiers, string literals and operator spellings.
//!
//! Interned strings are leaked so lookups can hand out `&str` without
//! holding the lock. The interner lives as long as the program it serves,
//! so the leak is bounded by the number of distinct strings in the source.

use std::fmt;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More than `u32::MAX` distinct strings.
    Overflow { count: usize },
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternError::Overflow { count } => {
                write!(f, "interner exceeded capacity: {count} strings")
            }
        }
    }
}

impl std::error::Error for InternError {}

struct Storage {
    map: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

/// Interner mapping strings to [`Name`] handles.
///
/// Safe to share between threads; readers only take a shared lock.
pub struct StringInterner {
    storage: RwLock<Storage>,
}

impl StringInterner {
    /// Create an interner with the empty string pre-interned as [`Name::EMPTY`].
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, Name::EMPTY);
        StringInterner {
            storage: RwLock::new(Storage {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Intern `s`, returning the existing handle if it was seen before.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.storage.read().map.get(s) {
            return Ok(name);
        }

        let mut guard = self.storage.write();
        // Another writer may have raced us between the locks.
        if let Some(&name) = guard.map.get(s) {
            return Ok(name);
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let name = Name::from_index(index);
        guard.strings.push(leaked);
        guard.map.insert(leaked, name);
        Ok(name)
    }

    /// Intern `s`.
    ///
    /// # Panics
    /// Panics past `u32::MAX` distinct strings. Use [`try_intern`](Self::try_intern)
    /// to handle that case.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// The string behind `name`.
    ///
    /// # Panics
    /// Panics if `name` came from a different interner and is out of range.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.storage.read().strings[name.index()]
    }

    /// Number of distinct strings, including the empty string.
    pub fn len(&self) -> usize {
        self.storage.read().strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}
