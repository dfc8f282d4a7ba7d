use std::collections::BTreeMap;

use tracing::debug;

use crate::error::ResolveError;

/// Resolves a symbolic storage function name to the text that invokes it.
pub trait ResolveStorage {
    fn resolve(&self, name: &str) -> Result<String, ResolveError>;
}

impl<F> ResolveStorage for F
where
    F: Fn(&str) -> Result<String, ResolveError>,
{
    fn resolve(&self, name: &str) -> Result<String, ResolveError> {
        self(name)
    }
}

/// Storage functions that ship with Pig.
pub const BUILTIN_STORAGE: [(&str, &str); 7] = [
    ("avro_storage", "AvroStorage()"),
    ("bin_storage", "BinStorage()"),
    ("json_loader", "JsonLoader()"),
    ("json_storage", "JsonStorage()"),
    ("pig_dump", "PigDump()"),
    ("pig_storage", "PigStorage()"),
    ("text_loader", "TextLoader()"),
];

/// Registry of storage functions keyed by symbolic name.
///
/// ```
/// use piglet::inout::{ResolveStorage, StorageTypes};
///
/// let mut storage = StorageTypes::default();
/// storage.register("csv", "org.apache.pig.piggybank.storage.CSVExcelStorage()");
///
/// assert_eq!(storage.resolve("pig_storage").unwrap(), "PigStorage()");
/// assert!(storage.resolve("parquet").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct StorageTypes {
    functions: BTreeMap<String, String>,
}

impl StorageTypes {
    /// Registry with no entries at all.
    pub fn empty() -> Self {
        StorageTypes {
            functions: BTreeMap::new(),
        }
    }

    /// Adds `name`, replacing any earlier entry with the same name.
    pub fn register(&mut self, name: impl Into<String>, invocation: impl Into<String>) -> &mut Self {
        self.functions.insert(name.into(), invocation.into());
        self
    }

    /// Registered names with their invocation text, sorted by name.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.functions
            .iter()
            .map(|(name, invocation)| (name.as_str(), invocation.as_str()))
    }
}

impl Default for StorageTypes {
    fn default() -> Self {
        let mut storage = StorageTypes::empty();
        for (name, invocation) in BUILTIN_STORAGE {
            storage.register(name, invocation);
        }
        storage
    }
}

impl ResolveStorage for StorageTypes {
    fn resolve(&self, name: &str) -> Result<String, ResolveError> {
        match self.functions.get(name) {
            Some(invocation) => {
                debug!(name, invocation = %invocation, "resolved storage function");
                Ok(invocation.clone())
            }
            None => {
                debug!(name, "unresolved storage function");
                Err(ResolveError::Unresolved(name.to_string()))
            }
        }
    }
}
