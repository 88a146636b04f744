// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::string::ToString;
use core::fmt;

use utils::{ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable};

// COLUMN TYPE
// ================================================================================================

/// Role of a column in a PLONK execution trace.
///
/// Column indexes are assigned per role: witness column 0 and selector column 0 are different
/// columns. The [ColumnType::Uninitialized] role marks default-constructed variables; such
/// variables are placeholders and must be replaced before a constraint is compiled.
///
/// Column types are ordered in the order of declaration.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnType {
    Witness = 0,
    PublicInput = 1,
    Constant = 2,
    Selector = 3,
    #[default]
    Uninitialized = 4,
}

impl ColumnType {
    /// Returns the short tag used when rendering variables of this column type.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Witness => "w",
            Self::PublicInput => "pub",
            Self::Constant => "c",
            Self::Selector => "sel",
            Self::Uninitialized => "NaN",
        }
    }

    /// Returns true if this is a real column role (i.e., not [ColumnType::Uninitialized]).
    pub const fn is_initialized(&self) -> bool {
        !matches!(self, Self::Uninitialized)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl TryFrom<u8> for ColumnType {
    type Error = DeserializationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Witness),
            1 => Ok(Self::PublicInput),
            2 => Ok(Self::Constant),
            3 => Ok(Self::Selector),
            4 => Ok(Self::Uninitialized),
            _ => Err(DeserializationError::InvalidValue(format!(
                "value {value} cannot be deserialized as a ColumnType enum"
            ))),
        }
    }
}

impl Serializable for ColumnType {
    /// Serializes `self` and writes the resulting bytes into the `target`.
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_u8(*self as u8);
    }
}

impl Deserializable for ColumnType {
    /// Reads a column type enum from the specified `source`.
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        Self::try_from(source.read_u8()?)
    }
}

// ADDRESSING MODE
// ================================================================================================

/// Defines how the row offset of a variable is interpreted.
///
/// Absolute addressing orders before relative addressing.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddressingMode {
    /// The row offset is an absolute row number.
    #[default]
    Absolute = 0,
    /// The row offset is a displacement from the row currently being constrained.
    Relative = 1,
}

impl AddressingMode {
    /// Returns true if the row offset is relative to the current row.
    pub const fn is_relative(&self) -> bool {
        matches!(self, Self::Relative)
    }
}

impl Serializable for AddressingMode {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_u8(*self as u8);
    }
}

impl Deserializable for AddressingMode {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        match source.read_u8()? {
            0 => Ok(Self::Absolute),
            1 => Ok(Self::Relative),
            value => Err(DeserializationError::InvalidValue(format!(
                "value {value} cannot be deserialized as an AddressingMode enum"
            ))),
        }
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Returns an error if `value` does not fit into the platform's `usize`.
pub(crate) fn read_column_index(value: u64) -> Result<usize, DeserializationError> {
    usize::try_from(value).map_err(|_| {
        DeserializationError::InvalidValue(
            "column index does not fit into usize on this platform".to_string(),
        )
    })
}
