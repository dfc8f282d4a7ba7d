use std::fmt::Write;

use tracing::trace;

use crate::error::{BuildError, ResolveError};

use super::{Output, Relation, ResolveStorage};

/// Construction options for [`Store`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Symbolic name of the storage function, resolved at render time
    pub using: Option<String>,
}

impl StoreOptions {
    pub fn using(name: impl Into<String>) -> Self {
        StoreOptions {
            using: Some(name.into()),
        }
    }
}

/// `STORE <alias> INTO '<path>' [USING <function>]`
///
/// The path is written between single quotes exactly as given, surrounding
/// whitespace included; callers must not pass text containing a single quote.
#[derive(Debug, Clone)]
pub struct Store<'a> {
    relation: &'a Relation,
    path: String,
    using: Option<String>,
}

impl<'a> Store<'a> {
    pub fn new(
        relation: &'a Relation,
        path: impl Into<String>,
        options: StoreOptions,
    ) -> Result<Self, BuildError> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(BuildError::Empty { what: "store path" });
        }
        Ok(Store {
            relation,
            path,
            using: options.using,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn using(&self) -> Option<&str> {
        self.using.as_deref()
    }
}

impl Output for Store<'_> {
    fn verb(&self) -> &'static str {
        "STORE"
    }

    fn relation(&self) -> &Relation {
        self.relation
    }

    fn render(&self, storage: &dyn ResolveStorage) -> Result<String, ResolveError> {
        let mut text = self.head();
        let _ = write!(text, " INTO '{}'", self.path);
        if let Some(using) = &self.using {
            let function = storage.resolve(using)?;
            let _ = write!(text, " USING {function}");
        }
        trace!(statement = %text, "rendered store");
        Ok(text)
    }
}
