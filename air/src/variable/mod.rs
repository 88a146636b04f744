// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use math::FieldElement;
use utils::{ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable};

use crate::{
    column::read_column_index, AddressingMode, ColumnType, Expression, IntoExpression, Term,
};

#[cfg(test)]
mod tests;

// VARIABLE
// ================================================================================================

/// A reference to a single cell of a PLONK execution trace.
///
/// A variable is identified by four values:
/// * `index` - index of the column among the columns of the same type.
/// * `rotation` - row offset of the cell. Depending on the addressing mode, this is either a
///   displacement from the row currently being constrained (e.g., `-1` for the previous row), or
///   an absolute row number.
/// * `mode` - the [AddressingMode] of the rotation.
/// * `column_type` - the [ColumnType] of the referenced column.
///
/// The type parameter `E` only tags the field the variable is meant to be used with; it does not
/// take part in equality, ordering or hashing, and [Variable::convert()] re-tags a variable for a
/// different field without changing its identity.
///
/// Variables are ordered by index first, then by rotation, then by column type, and finally by
/// addressing mode.
pub struct Variable<E> {
    index: usize,
    rotation: i32,
    mode: AddressingMode,
    column_type: ColumnType,
    _field: PhantomData<E>,
}

impl<E> Variable<E> {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns a variable referencing witness column `index` at the specified `rotation` relative
    /// to the current row.
    pub const fn new(index: usize, rotation: i32) -> Self {
        Self::from_parts(index, rotation, AddressingMode::Relative, ColumnType::Witness)
    }

    /// Returns a variable referencing column `index` of the specified type at the specified
    /// `rotation` relative to the current row.
    pub const fn with_column_type(index: usize, rotation: i32, column_type: ColumnType) -> Self {
        Self::from_parts(index, rotation, AddressingMode::Relative, column_type)
    }

    /// Returns a variable instantiated from the provided parts.
    pub const fn from_parts(
        index: usize,
        rotation: i32,
        mode: AddressingMode,
        column_type: ColumnType,
    ) -> Self {
        Self {
            index,
            rotation,
            mode,
            column_type,
            _field: PhantomData,
        }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the index of the referenced column among the columns of the same type.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the row offset of the referenced cell.
    pub const fn rotation(&self) -> i32 {
        self.rotation
    }

    /// Returns the addressing mode of the row offset.
    pub const fn mode(&self) -> AddressingMode {
        self.mode
    }

    /// Returns true if the row offset is relative to the current row.
    pub const fn is_relative(&self) -> bool {
        self.mode.is_relative()
    }

    /// Returns the type of the referenced column.
    pub const fn column_type(&self) -> ColumnType {
        self.column_type
    }

    // TRANSFORMATIONS
    // --------------------------------------------------------------------------------------------

    /// Returns a variable referencing the same column at the specified `rotation`.
    ///
    /// Addressing mode of the returned variable is the same as the addressing mode of this one.
    pub const fn with_rotation(&self, rotation: i32) -> Self {
        Self::from_parts(self.index, rotation, self.mode, self.column_type)
    }

    /// Returns this variable tagged with field `F`.
    pub const fn convert<F>(&self) -> Variable<F> {
        Variable::from_parts(self.index, self.rotation, self.mode, self.column_type)
    }

    /// Returns the column referenced by this variable, dropping row offset and addressing mode.
    pub const fn without_rotation(&self) -> VariableWithoutRotation<E> {
        VariableWithoutRotation::new(self.index, self.column_type)
    }
}

impl<E: FieldElement> Variable<E> {
    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    /// Returns a term `1 * self`.
    pub fn to_term(&self) -> Term<E> {
        Term::from(*self)
    }

    /// Returns an expression `self^power`.
    ///
    /// Raising a variable to power 0 yields the constant ONE.
    pub fn pow(&self, power: u32) -> Expression<E> {
        self.to_term().pow(power)
    }
}

impl<E: FieldElement> IntoExpression<E> for Variable<E> {
    fn into_expression(self) -> Expression<E> {
        Expression::Term(Term::from(self))
    }
}

// TRAIT IMPLEMENTATIONS
// ================================================================================================
// These are implemented by hand because derived implementations would place bounds on `E`.

impl<E> Clone for Variable<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Variable<E> {}

impl<E> Default for Variable<E> {
    /// Returns an uninitialized variable: column 0 at absolute row 0 with
    /// [ColumnType::Uninitialized] type.
    fn default() -> Self {
        Self::from_parts(0, 0, AddressingMode::Absolute, ColumnType::Uninitialized)
    }
}

impl<E> PartialEq for Variable<E> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.rotation == other.rotation
            && self.column_type == other.column_type
            && self.mode == other.mode
    }
}

impl<E> Eq for Variable<E> {}

impl<E> Ord for Variable<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index
            .cmp(&other.index)
            .then(self.rotation.cmp(&other.rotation))
            .then(self.column_type.cmp(&other.column_type))
            .then(self.mode.cmp(&other.mode))
    }
}

impl<E> PartialOrd for Variable<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Hash for Variable<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rotation.hash(state);
        self.column_type.hash(state);
        self.index.hash(state);
        self.mode.hash(state);
    }
}

impl<E> fmt::Debug for Variable<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable")
            .field("index", &self.index)
            .field("rotation", &self.rotation)
            .field("mode", &self.mode)
            .field("column_type", &self.column_type)
            .finish()
    }
}

/// Renders the variable as `<tag>_<index>[_abs][_rot(<rotation>)]`, e.g. `w_3_rot(-1)` for
/// witness column 3 at the previous row, or `pub_2_abs` for public input column 2 at row 0.
impl<E> fmt::Display for Variable<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.column_type.tag(), self.index)?;
        if !self.is_relative() {
            f.write_str("_abs")?;
        }
        if self.rotation != 0 {
            write!(f, "_rot({})", self.rotation)?;
        }
        Ok(())
    }
}

impl<E> Serializable for Variable<E> {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_u64(self.index as u64);
        target.write_u32(self.rotation as u32);
        target.write(self.mode);
        target.write(self.column_type);
    }
}

impl<E> Deserializable for Variable<E> {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let index = read_column_index(source.read_u64()?)?;
        let rotation = source.read_u32()? as i32;
        let mode = source.read()?;
        let column_type = source.read()?;
        Ok(Self::from_parts(index, rotation, mode, column_type))
    }
}

// VARIABLE WITHOUT ROTATION
// ================================================================================================

/// A reference to an entire column of a PLONK execution trace.
///
/// This is a [Variable] with row offset and addressing mode dropped; it is used where only the
/// column matters (e.g., when collecting the set of columns a gate touches). Ordering is by
/// index first, and then by column type.
pub struct VariableWithoutRotation<E> {
    index: usize,
    column_type: ColumnType,
    _field: PhantomData<E>,
}

impl<E> VariableWithoutRotation<E> {
    /// Returns a reference to column `index` of the specified type.
    pub const fn new(index: usize, column_type: ColumnType) -> Self {
        Self { index, column_type, _field: PhantomData }
    }

    /// Returns the index of the referenced column among the columns of the same type.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the type of the referenced column.
    pub const fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// Returns a variable referencing this column at the specified row offset.
    pub const fn at_rotation(&self, rotation: i32, mode: AddressingMode) -> Variable<E> {
        Variable::from_parts(self.index, rotation, mode, self.column_type)
    }

    /// Returns this column reference tagged with field `F`.
    pub const fn convert<F>(&self) -> VariableWithoutRotation<F> {
        VariableWithoutRotation::new(self.index, self.column_type)
    }
}

impl<E> From<Variable<E>> for VariableWithoutRotation<E> {
    fn from(variable: Variable<E>) -> Self {
        variable.without_rotation()
    }
}

impl<E> Clone for VariableWithoutRotation<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for VariableWithoutRotation<E> {}

impl<E> Default for VariableWithoutRotation<E> {
    fn default() -> Self {
        Self::new(0, ColumnType::Uninitialized)
    }
}

impl<E> PartialEq for VariableWithoutRotation<E> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.column_type == other.column_type
    }
}

impl<E> Eq for VariableWithoutRotation<E> {}

impl<E> Ord for VariableWithoutRotation<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index).then(self.column_type.cmp(&other.column_type))
    }
}

impl<E> PartialOrd for VariableWithoutRotation<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Hash for VariableWithoutRotation<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.column_type.hash(state);
    }
}

impl<E> fmt::Debug for VariableWithoutRotation<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableWithoutRotation")
            .field("index", &self.index)
            .field("column_type", &self.column_type)
            .finish()
    }
}

impl<E> fmt::Display for VariableWithoutRotation<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.column_type.tag(), self.index)
    }
}

impl<E> Serializable for VariableWithoutRotation<E> {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_u64(self.index as u64);
        target.write(self.column_type);
    }
}

impl<E> Deserializable for VariableWithoutRotation<E> {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let index = read_column_index(source.read_u64()?)?;
        let column_type = source.read()?;
        Ok(Self::new(index, column_type))
    }
}
