//! # Output statements
//!
//! Statements that consume an existing relation: `STORE` persists it, and
//! `DUMP`, `DESCRIBE`, `ILLUSTRATE` and `EXPLAIN` inspect it. All of them
//! share [`Output`], which renders the statement verb followed by the
//! relation alias; a statement with clauses appends them to that head.
//!
//! ```
//! use piglet::inout::{Output, Relation, StorageTypes, Store, StoreOptions};
//!
//! let logs = Relation::new("logs").unwrap();
//! let store = Store::new(&logs, "/out/logs", StoreOptions::using("pig_storage")).unwrap();
//!
//! assert_eq!(
//!     store.render(&StorageTypes::default()).unwrap(),
//!     "STORE logs INTO '/out/logs' USING PigStorage()"
//! );
//! ```

mod diagnostics;
mod storage_types;
mod store;

pub use diagnostics::{Describe, Dump, Explain, Illustrate};
pub use storage_types::{BUILTIN_STORAGE, ResolveStorage, StorageTypes};
pub use store::{Store, StoreOptions};

use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::error::{BuildError, ResolveError};

static ALIAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("alias pattern is valid"));

/// Named handle to a relation defined earlier in the script.
///
/// Statements borrow the handle; they never own the relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relation {
    alias: String,
}

impl Relation {
    pub fn new(alias: impl Into<String>) -> Result<Self, BuildError> {
        let alias = alias.into();
        if alias.is_empty() {
            return Err(BuildError::Empty { what: "relation alias" });
        }
        if !ALIAS.is_match(&alias) {
            return Err(BuildError::InvalidAlias(alias));
        }
        Ok(Relation { alias })
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.alias)
    }
}

/// A statement that names a verb and the relation it operates on.
pub trait Output {
    /// Statement keyword, fixed per statement type.
    fn verb(&self) -> &'static str;

    fn relation(&self) -> &Relation;

    /// `<VERB> <alias>`, the text every statement starts with.
    fn head(&self) -> String {
        format!("{} {}", self.verb(), self.relation().alias())
    }

    /// Full statement text, without a trailing `;`.
    ///
    /// The resolver is consulted only by statements that name a storage
    /// function; its errors are returned unchanged.
    fn render(&self, _storage: &dyn ResolveStorage) -> Result<String, ResolveError> {
        Ok(self.head())
    }
}
