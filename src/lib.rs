//! # Piglet
//!
//! Builds Pig Latin source text from typed expression trees and output
//! statements.
//!
//! ```
//! use piglet::field::{Field, FieldExt, Reference};
//! use piglet::inout::{Output, Relation, StorageTypes, Store, StoreOptions};
//!
//! let age = Reference::new("age").unwrap();
//! assert_eq!(age.is_null().render(), "age IS NULL");
//!
//! let people = Relation::new("people").unwrap();
//! let store = Store::new(&people, "/out/people", StoreOptions::default()).unwrap();
//! assert_eq!(store.render(&StorageTypes::default()).unwrap(), "STORE people INTO '/out/people'");
//! ```
pub mod cli;
pub mod error;
pub mod field;
pub mod inout;

pub use error::{BuildError, ResolveError};
pub use field::{Field, FieldExt, FieldOptions, FieldType};
pub use inout::{Output, Relation, ResolveStorage, StorageTypes, Store, StoreOptions};
