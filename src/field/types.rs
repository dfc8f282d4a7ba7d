use std::{fmt, str::FromStr};

use crate::error::BuildError;

/// Pig Latin data types a field expression can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `boolean`
    Boolean,
    /// 32-bit signed integer (`int`)
    Int,
    /// 64-bit signed integer (`long`)
    Long,
    /// 32-bit floating point (`float`)
    Float,
    /// 64-bit floating point (`double`)
    Double,
    /// UTF-8 string (`chararray`)
    Chararray,
    /// Untyped blob (`bytearray`), the type of any field with no declared schema
    Bytearray,
    /// Ordered set of fields (`tuple`)
    Tuple,
    /// Collection of tuples (`bag`)
    Bag,
    /// Key/value pairs with chararray keys (`map`)
    Map,
}

impl FieldType {
    pub const ALL: [FieldType; 10] = [
        FieldType::Boolean,
        FieldType::Int,
        FieldType::Long,
        FieldType::Float,
        FieldType::Double,
        FieldType::Chararray,
        FieldType::Bytearray,
        FieldType::Tuple,
        FieldType::Bag,
        FieldType::Map,
    ];

    /// Keyword used for this type in Pig Latin source.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Boolean => "boolean",
            FieldType::Int => "int",
            FieldType::Long => "long",
            FieldType::Float => "float",
            FieldType::Double => "double",
            FieldType::Chararray => "chararray",
            FieldType::Bytearray => "bytearray",
            FieldType::Tuple => "tuple",
            FieldType::Bag => "bag",
            FieldType::Map => "map",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            FieldType::Int | FieldType::Long | FieldType::Float | FieldType::Double
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldType {
    type Err = BuildError;

    /// Type keywords are case-insensitive, as in Pig Latin itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        FieldType::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| BuildError::UnknownType(s.to_string()))
    }
}
