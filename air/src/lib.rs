// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains the symbolic building blocks used to describe polynomial constraints of a
//! PLONK-style arithmetization.
//!
//! A PLONK execution trace is a table of columns. Every column has a role: it may hold witness
//! values, public inputs, fixed constants or selectors. Constraints are polynomials over cells
//! of this table, and a cell is named by a [Variable]: a column index, a column role and a row
//! offset (a *rotation*) which is interpreted either relative to the row currently being
//! constrained or as an absolute row number.
//!
//! Variables are combined into polynomials in two steps:
//!
//! * A [Term] is a monomial `c * v^p` over a single variable `v`.
//! * An [Expression] is a tree of terms and constants combined via addition, subtraction,
//!   multiplication and negation.
//!
//! All of these are immutable values: every operator returns a new value and never mutates its
//! operands. Operators accept any mix of variables, terms and expressions, behaving as if the
//! narrower operand was first promoted to the wider type. For example:
//!
//! ```
//! use math::{fields::f64::BaseElement, FieldElement};
//! use plonk_air::{ColumnType, Expression, Variable};
//!
//! let a = Variable::<BaseElement>::new(0, 0);
//! let b = Variable::<BaseElement>::new(1, 0);
//! let s = Variable::<BaseElement>::with_column_type(2, 0, ColumnType::Selector);
//!
//! let constraint: Expression<BaseElement> = a * b + s;
//! let result = constraint.evaluate(|v| match v.index() {
//!     0 => BaseElement::from(2u32),
//!     1 => BaseElement::from(3u32),
//!     _ => BaseElement::ONE,
//! });
//! assert_eq!(BaseElement::from(7u32), result);
//! ```
//!
//! Evaluating constraints against an actual execution trace, compiling them into gates, and
//! committing to the resulting polynomials are left to the constraint system which consumes
//! these expressions.

#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod column;
pub use column::{AddressingMode, ColumnType};

mod variable;
pub use variable::{Variable, VariableWithoutRotation};

mod term;
pub use term::Term;

mod expression;
pub use expression::{Expression, IntoExpression};
