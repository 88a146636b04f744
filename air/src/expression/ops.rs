// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Operator overloads for variables, terms and expressions.
//!
//! Every operator delegates to one of the named combinators of [Expression]. Binary operators
//! accept any combination of [Variable], [Term] and [Expression] operands, as well as a scalar
//! on the right-hand side. Scalars on the left-hand side are supported for the base fields of
//! `winter-math` and for unsigned integers (`u8`, `u16`, `u32`, `u64`), which are lifted into
//! the field via `E::from()`. For field elements of other fields, promote the scalar first via
//! [Expression::constant()].

use core::ops::{Add, Mul, Neg, Sub};

use math::{
    fields::{f128, f62, f64},
    FieldElement,
};

use super::Expression;
use crate::{Term, Variable};

// BINARY OPERATIONS
// ================================================================================================

macro_rules! impl_binary_ops {
    ($lhs:ident, $rhs:ident) => {
        impl<E: FieldElement> Add<$rhs<E>> for $lhs<E> {
            type Output = Expression<E>;

            fn add(self, rhs: $rhs<E>) -> Expression<E> {
                Expression::sum(self, rhs)
            }
        }

        impl<E: FieldElement> Sub<$rhs<E>> for $lhs<E> {
            type Output = Expression<E>;

            fn sub(self, rhs: $rhs<E>) -> Expression<E> {
                Expression::difference(self, rhs)
            }
        }

        impl<E: FieldElement> Mul<$rhs<E>> for $lhs<E> {
            type Output = Expression<E>;

            fn mul(self, rhs: $rhs<E>) -> Expression<E> {
                Expression::product(self, rhs)
            }
        }
    };
}

impl_binary_ops!(Variable, Variable);
impl_binary_ops!(Variable, Term);
impl_binary_ops!(Variable, Expression);
impl_binary_ops!(Term, Variable);
impl_binary_ops!(Term, Term);
impl_binary_ops!(Term, Expression);
impl_binary_ops!(Expression, Variable);
impl_binary_ops!(Expression, Term);
impl_binary_ops!(Expression, Expression);

// SCALAR OPERATIONS
// ================================================================================================

macro_rules! impl_scalar_add_sub {
    ($lhs:ident) => {
        impl<E: FieldElement> Add<E> for $lhs<E> {
            type Output = Expression<E>;

            fn add(self, rhs: E) -> Expression<E> {
                Expression::sum(self, Expression::constant(rhs))
            }
        }

        impl<E: FieldElement> Sub<E> for $lhs<E> {
            type Output = Expression<E>;

            fn sub(self, rhs: E) -> Expression<E> {
                Expression::difference(self, Expression::constant(rhs))
            }
        }
    };
}

impl_scalar_add_sub!(Variable);
impl_scalar_add_sub!(Term);
impl_scalar_add_sub!(Expression);

impl<E: FieldElement> Mul<E> for Variable<E> {
    type Output = Term<E>;

    fn mul(self, rhs: E) -> Term<E> {
        self.to_term().scale(rhs)
    }
}

impl<E: FieldElement> Mul<E> for Term<E> {
    type Output = Term<E>;

    fn mul(self, rhs: E) -> Term<E> {
        self.scale(rhs)
    }
}

impl<E: FieldElement> Mul<E> for Expression<E> {
    type Output = Expression<E>;

    fn mul(self, rhs: E) -> Expression<E> {
        Expression::product(self, Expression::constant(rhs))
    }
}

// LEFT-HAND SCALAR OPERATIONS
// ================================================================================================

macro_rules! impl_left_scalar_ops {
    ($field:ty) => {
        impl Add<Variable<$field>> for $field {
            type Output = Expression<$field>;

            fn add(self, rhs: Variable<$field>) -> Expression<$field> {
                Expression::sum(Expression::constant(self), rhs)
            }
        }

        impl Sub<Variable<$field>> for $field {
            type Output = Expression<$field>;

            fn sub(self, rhs: Variable<$field>) -> Expression<$field> {
                Expression::difference(Expression::constant(self), rhs)
            }
        }

        impl Mul<Variable<$field>> for $field {
            type Output = Term<$field>;

            fn mul(self, rhs: Variable<$field>) -> Term<$field> {
                rhs * self
            }
        }

        impl Add<Term<$field>> for $field {
            type Output = Expression<$field>;

            fn add(self, rhs: Term<$field>) -> Expression<$field> {
                Expression::sum(Expression::constant(self), rhs)
            }
        }

        impl Sub<Term<$field>> for $field {
            type Output = Expression<$field>;

            fn sub(self, rhs: Term<$field>) -> Expression<$field> {
                Expression::difference(Expression::constant(self), rhs)
            }
        }

        impl Mul<Term<$field>> for $field {
            type Output = Term<$field>;

            fn mul(self, rhs: Term<$field>) -> Term<$field> {
                rhs.scale(self)
            }
        }

        impl Add<Expression<$field>> for $field {
            type Output = Expression<$field>;

            fn add(self, rhs: Expression<$field>) -> Expression<$field> {
                Expression::sum(Expression::constant(self), rhs)
            }
        }

        impl Sub<Expression<$field>> for $field {
            type Output = Expression<$field>;

            fn sub(self, rhs: Expression<$field>) -> Expression<$field> {
                Expression::difference(Expression::constant(self), rhs)
            }
        }

        impl Mul<Expression<$field>> for $field {
            type Output = Expression<$field>;

            fn mul(self, rhs: Expression<$field>) -> Expression<$field> {
                Expression::product(Expression::constant(self), rhs)
            }
        }
    };
}

impl_left_scalar_ops!(f62::BaseElement);
impl_left_scalar_ops!(f64::BaseElement);
impl_left_scalar_ops!(f128::BaseElement);

// LEFT-HAND INTEGER OPERATIONS
// ================================================================================================

macro_rules! impl_left_integer_ops {
    ($int:ty) => {
        impl<E: FieldElement + From<$int>> Add<Variable<E>> for $int {
            type Output = Expression<E>;

            fn add(self, rhs: Variable<E>) -> Expression<E> {
                Expression::sum(Expression::constant(E::from(self)), rhs)
            }
        }

        impl<E: FieldElement + From<$int>> Sub<Variable<E>> for $int {
            type Output = Expression<E>;

            fn sub(self, rhs: Variable<E>) -> Expression<E> {
                Expression::difference(Expression::constant(E::from(self)), rhs)
            }
        }

        impl<E: FieldElement + From<$int>> Mul<Variable<E>> for $int {
            type Output = Term<E>;

            fn mul(self, rhs: Variable<E>) -> Term<E> {
                rhs * E::from(self)
            }
        }

        impl<E: FieldElement + From<$int>> Add<Term<E>> for $int {
            type Output = Expression<E>;

            fn add(self, rhs: Term<E>) -> Expression<E> {
                Expression::sum(Expression::constant(E::from(self)), rhs)
            }
        }

        impl<E: FieldElement + From<$int>> Sub<Term<E>> for $int {
            type Output = Expression<E>;

            fn sub(self, rhs: Term<E>) -> Expression<E> {
                Expression::difference(Expression::constant(E::from(self)), rhs)
            }
        }

        impl<E: FieldElement + From<$int>> Mul<Term<E>> for $int {
            type Output = Term<E>;

            fn mul(self, rhs: Term<E>) -> Term<E> {
                rhs.scale(E::from(self))
            }
        }

        impl<E: FieldElement + From<$int>> Add<Expression<E>> for $int {
            type Output = Expression<E>;

            fn add(self, rhs: Expression<E>) -> Expression<E> {
                Expression::sum(Expression::constant(E::from(self)), rhs)
            }
        }

        impl<E: FieldElement + From<$int>> Sub<Expression<E>> for $int {
            type Output = Expression<E>;

            fn sub(self, rhs: Expression<E>) -> Expression<E> {
                Expression::difference(Expression::constant(E::from(self)), rhs)
            }
        }

        impl<E: FieldElement + From<$int>> Mul<Expression<E>> for $int {
            type Output = Expression<E>;

            fn mul(self, rhs: Expression<E>) -> Expression<E> {
                Expression::product(Expression::constant(E::from(self)), rhs)
            }
        }
    };
}

impl_left_integer_ops!(u8);
impl_left_integer_ops!(u16);
impl_left_integer_ops!(u32);
impl_left_integer_ops!(u64);

// NEGATION
// ================================================================================================

impl<E: FieldElement> Neg for Variable<E> {
    type Output = Term<E>;

    fn neg(self) -> Term<E> {
        self.to_term().negate()
    }
}

impl<E: FieldElement> Neg for Term<E> {
    type Output = Term<E>;

    fn neg(self) -> Term<E> {
        self.negate()
    }
}

impl<E: FieldElement> Neg for Expression<E> {
    type Output = Expression<E>;

    fn neg(self) -> Expression<E> {
        Expression::negation(self)
    }
}
