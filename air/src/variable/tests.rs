// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::{collections::BTreeSet, string::ToString, vec::Vec};
use core::hash::{Hash, Hasher};
use std::collections::{hash_map::DefaultHasher, HashSet};

use math::fields::{f128, f64::BaseElement};
use proptest::prelude::*;
use utils::{Deserializable, DeserializationError, Serializable};

use super::{Variable, VariableWithoutRotation};
use crate::{AddressingMode, ColumnType};

type Var = Variable<BaseElement>;

// COLUMN TYPES
// ================================================================================================

#[test]
fn column_type_tags() {
    let expected = [
        (ColumnType::Witness, "w"),
        (ColumnType::PublicInput, "pub"),
        (ColumnType::Constant, "c"),
        (ColumnType::Selector, "sel"),
        (ColumnType::Uninitialized, "NaN"),
    ];
    for (tag, (column_type, name)) in expected.into_iter().enumerate() {
        assert_eq!(name, column_type.tag());
        assert_eq!(name, column_type.to_string());
        assert_eq!(column_type, ColumnType::try_from(tag as u8).unwrap());
        assert_eq!(column_type != ColumnType::Uninitialized, column_type.is_initialized());
    }
    assert!(ColumnType::try_from(5u8).is_err());
    assert_eq!(ColumnType::Uninitialized, ColumnType::default());
}

#[test]
fn column_type_ordering() {
    assert!(ColumnType::Witness < ColumnType::PublicInput);
    assert!(ColumnType::PublicInput < ColumnType::Constant);
    assert!(ColumnType::Constant < ColumnType::Selector);
    assert!(ColumnType::Selector < ColumnType::Uninitialized);
    assert!(AddressingMode::Absolute < AddressingMode::Relative);
    assert_eq!(AddressingMode::Absolute, AddressingMode::default());
}

// CONSTRUCTION
// ================================================================================================

#[test]
fn new_variable_defaults() {
    let v = Var::new(3, -1);
    assert_eq!(3, v.index());
    assert_eq!(-1, v.rotation());
    assert_eq!(AddressingMode::Relative, v.mode());
    assert!(v.is_relative());
    assert_eq!(ColumnType::Witness, v.column_type());

    let s = Var::with_column_type(2, 1, ColumnType::Selector);
    assert!(s.is_relative());
    assert_eq!(ColumnType::Selector, s.column_type());
}

#[test]
fn default_variable_is_uninitialized() {
    let v = Var::default();
    assert_eq!(0, v.index());
    assert_eq!(0, v.rotation());
    assert!(!v.is_relative());
    assert_eq!(ColumnType::Uninitialized, v.column_type());
    assert!(!v.column_type().is_initialized());

    let c = VariableWithoutRotation::<BaseElement>::default();
    assert_eq!(v.without_rotation(), c);
}

#[test]
fn with_rotation_keeps_column() {
    let v = Var::from_parts(4, 0, AddressingMode::Absolute, ColumnType::Constant);
    let r = v.with_rotation(5);
    assert_eq!(5, r.rotation());
    assert_eq!(v.index(), r.index());
    assert_eq!(v.mode(), r.mode());
    assert_eq!(v.column_type(), r.column_type());
    assert_ne!(v, r);
    assert_eq!(v, r.with_rotation(0));
}

// RENDERING
// ================================================================================================

#[test]
fn variable_display() {
    assert_eq!("w_3_rot(-1)", Var::new(3, -1).to_string());
    assert_eq!("w_0", Var::new(0, 0).to_string());

    let v = Var::from_parts(2, 0, AddressingMode::Absolute, ColumnType::PublicInput);
    assert_eq!("pub_2_abs", v.to_string());

    let v = Var::from_parts(5, 7, AddressingMode::Absolute, ColumnType::Selector);
    assert_eq!("sel_5_abs_rot(7)", v.to_string());

    let v = Var::with_column_type(1, 2, ColumnType::Constant);
    assert_eq!("c_1_rot(2)", v.to_string());

    // the default variable is absolutely addressed
    assert_eq!("NaN_0_abs", Var::default().to_string());
}

#[test]
fn variable_without_rotation_display() {
    let v = Var::from_parts(5, 7, AddressingMode::Absolute, ColumnType::Selector);
    assert_eq!("sel_5", v.without_rotation().to_string());
    assert_eq!("w_3", Var::new(3, -1).without_rotation().to_string());
    assert_eq!("NaN_0", VariableWithoutRotation::<BaseElement>::default().to_string());
}

// ORDERING AND HASHING
// ================================================================================================

#[test]
fn variable_ordering() {
    // index takes priority over rotation
    assert!(Var::new(0, 5) < Var::new(1, -5));
    // rotation takes priority over column type
    let a = Var::with_column_type(1, -1, ColumnType::Selector);
    assert!(a < Var::new(1, 0));
    // column type takes priority over addressing mode
    let a = Var::from_parts(1, 0, AddressingMode::Relative, ColumnType::Witness);
    let b = Var::from_parts(1, 0, AddressingMode::Absolute, ColumnType::Selector);
    assert!(a < b);
    // absolute addressing orders before relative
    let a = Var::from_parts(1, 0, AddressingMode::Absolute, ColumnType::Witness);
    assert!(a < Var::new(1, 0));
}

#[test]
fn variables_as_set_keys() {
    let variables = [
        Var::new(2, 0),
        Var::new(0, 1),
        Var::new(2, 1).with_rotation(0),
        Var::new(0, -1),
        Var::with_column_type(0, 1, ColumnType::Selector),
    ];

    let sorted = variables.iter().copied().collect::<BTreeSet<_>>();
    assert_eq!(4, sorted.len());
    let expected = vec![
        Var::new(0, -1),
        Var::new(0, 1),
        Var::with_column_type(0, 1, ColumnType::Selector),
        Var::new(2, 0),
    ];
    assert_eq!(expected, sorted.into_iter().collect::<Vec<_>>());

    let hashed = variables.iter().copied().collect::<HashSet<_>>();
    assert_eq!(4, hashed.len());
    assert!(hashed.contains(&Var::new(2, 0)));
}

#[test]
fn variable_hash_mixes_all_fields() {
    let base = Var::new(1, 1);
    let variants = [
        Var::new(2, 1),
        Var::new(1, 2),
        Var::with_column_type(1, 1, ColumnType::Constant),
        Var::from_parts(1, 1, AddressingMode::Absolute, ColumnType::Witness),
    ];
    for variant in variants {
        assert_ne!(hash_of(&base), hash_of(&variant), "hash collision with {variant}");
    }
}

#[test]
fn variable_without_rotation_ordering() {
    let a = VariableWithoutRotation::<BaseElement>::new(0, ColumnType::Selector);
    let b = VariableWithoutRotation::<BaseElement>::new(1, ColumnType::Witness);
    let c = VariableWithoutRotation::<BaseElement>::new(1, ColumnType::PublicInput);
    assert!(a < b);
    assert!(b < c);

    // rotation and addressing mode do not affect the projection
    let v1 = Var::new(1, -1);
    let v2 = Var::from_parts(1, 4, AddressingMode::Absolute, ColumnType::Witness);
    assert_eq!(v1.without_rotation(), v2.without_rotation());
    assert_eq!(hash_of(&v1.without_rotation()), hash_of(&v2.without_rotation()));
}

// CONVERSIONS
// ================================================================================================

#[test]
fn conversion_between_fields() {
    let v = Var::from_parts(9, -2, AddressingMode::Absolute, ColumnType::Constant);
    let w: Variable<f128::BaseElement> = v.convert();
    assert_eq!(v.index(), w.index());
    assert_eq!(v.rotation(), w.rotation());
    assert_eq!(v.mode(), w.mode());
    assert_eq!(v.column_type(), w.column_type());
    assert_eq!(v.to_string(), w.to_string());
    assert_eq!(v, w.convert::<BaseElement>());

    let c: VariableWithoutRotation<f128::BaseElement> = v.without_rotation().convert();
    assert_eq!(w.without_rotation(), c);
}

// SERIALIZATION
// ================================================================================================

#[test]
fn variable_serialization() {
    let v = Var::from_parts(7, -3, AddressingMode::Relative, ColumnType::Selector);
    let bytes = v.to_bytes();
    assert_eq!(14, bytes.len());
    assert_eq!(v, Var::read_from_bytes(&bytes).unwrap());

    let c = v.without_rotation();
    assert_eq!(c, VariableWithoutRotation::<BaseElement>::read_from_bytes(&c.to_bytes()).unwrap());
}

#[test]
fn variable_deserialization_invalid_tags() {
    let v = Var::new(1, 0);
    let mut bytes = v.to_bytes();

    let last = bytes.len() - 1;
    bytes[last] = 9;
    let result = Var::read_from_bytes(&bytes);
    assert!(matches!(result, Err(DeserializationError::InvalidValue(_))));

    bytes[last] = ColumnType::Witness as u8;
    bytes[last - 1] = 2;
    let result = Var::read_from_bytes(&bytes);
    assert!(matches!(result, Err(DeserializationError::InvalidValue(_))));
}

// PROPERTIES
// ================================================================================================

proptest! {
    #[test]
    fn equality_is_field_equality(a in variable(), b in variable()) {
        let same_fields = a.index() == b.index()
            && a.rotation() == b.rotation()
            && a.mode() == b.mode()
            && a.column_type() == b.column_type();
        prop_assert_eq!(same_fields, a == b);
        let converted = b.convert::<f128::BaseElement>();
        prop_assert_eq!(same_fields, a == converted.convert::<BaseElement>());
    }

    #[test]
    fn ordering_is_strict_total_order(a in variable(), b in variable(), c in variable()) {
        let relations = [a < b, a == b, b < a].into_iter().filter(|&r| r).count();
        prop_assert_eq!(1, relations);
        prop_assert!(!(a < a));
        if a < b && b < c {
            prop_assert!(a < c);
        }

        let key = |v: &Variable<BaseElement>| (v.index(), v.rotation(), v.column_type(), v.mode());
        prop_assert_eq!(key(&a).cmp(&key(&b)), a.cmp(&b));
    }

    #[test]
    fn equal_variables_hash_equally(a in variable(), b in variable()) {
        let copy = Var::from_parts(a.index(), a.rotation(), a.mode(), a.column_type());
        prop_assert_eq!(hash_of(&a), hash_of(&copy));
        prop_assert_eq!(hash_of(&a), hash_of(&a.convert::<f128::BaseElement>()));
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn conversion_round_trip(a in variable()) {
        let converted: Variable<f128::BaseElement> = a.convert();
        prop_assert_eq!(a, converted.convert::<BaseElement>());
    }

    #[test]
    fn projection_is_idempotent(a in variable()) {
        let column = a.without_rotation();
        prop_assert_eq!(column, VariableWithoutRotation::from(a));
        prop_assert_eq!(column, column.at_rotation(5, AddressingMode::Absolute).without_rotation());
        prop_assert_eq!(a, column.at_rotation(a.rotation(), a.mode()));
    }
}

// HELPER FUNCTIONS
// ================================================================================================

fn variable() -> impl Strategy<Value = Variable<BaseElement>> {
    (0usize..4, -2i32..3, any::<bool>(), 0u8..5).prop_map(|(index, rotation, relative, tag)| {
        let mode = if relative {
            AddressingMode::Relative
        } else {
            AddressingMode::Absolute
        };
        let column_type = ColumnType::try_from(tag).unwrap();
        Var::from_parts(index, rotation, mode, column_type)
    })
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
