// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt;

use math::FieldElement;

use crate::{Expression, IntoExpression, Variable};


// TERM
// ================================================================================================

/// A monomial over a single variable: `coefficient * variable^power`.
///
/// A term always has a power of at least one. Products of distinct variables cannot be
/// described by a single term; multiplying terms over different variables produces an
/// [Expression] with a product node instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term<E: FieldElement> {
    variable: Variable<E>,
    power: u32,
    coefficient: E,
}

impl<E: FieldElement> Term<E> {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns a term `coefficient * variable^power`.
    ///
    /// # Panics
    /// Panics if `power` is zero.
    pub fn new(variable: Variable<E>, power: u32, coefficient: E) -> Self {
        assert!(power > 0, "term power must be at least one, but was zero");
        Term { variable, power, coefficient }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the variable of this term.
    pub fn variable(&self) -> Variable<E> {
        self.variable
    }

    /// Returns the power to which the variable is raised.
    pub fn power(&self) -> u32 {
        self.power
    }

    /// Returns the coefficient of this term.
    pub fn coefficient(&self) -> E {
        self.coefficient
    }

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    /// Returns this term with its coefficient multiplied by `scalar`.
    pub fn scale(&self, scalar: E) -> Self {
        Term {
            coefficient: self.coefficient * scalar,
            ..*self
        }
    }

    /// Returns this term with its coefficient negated.
    pub fn negate(&self) -> Self {
        Term {
            coefficient: -self.coefficient,
            ..*self
        }
    }

    /// Returns a product of this term and `other` if both are defined over the same variable.
    ///
    /// Powers of the two terms are added and coefficients are multiplied. If the terms are
    /// defined over different variables, None is returned.
    ///
    /// # Panics
    /// Panics if the sum of the two powers does not fit into a `u32`.
    pub fn merge(&self, other: &Self) -> Option<Self> {
        if self.variable != other.variable {
            return None;
        }
        let Some(power) = self.power.checked_add(other.power) else {
            panic!("term power overflow: {} + {} exceeds u32::MAX", self.power, other.power);
        };
        Some(Term {
            variable: self.variable,
            power,
            coefficient: self.coefficient * other.coefficient,
        })
    }

    /// Returns an expression `self^power`.
    ///
    /// Raising a term to power 0 yields the constant ONE; for other powers the power of the
    /// variable is multiplied by `power`, and the coefficient is raised to `power`.
    ///
    /// # Panics
    /// Panics if the resulting power of the variable does not fit into a `u32`.
    pub fn pow(&self, power: u32) -> Expression<E> {
        match power {
            0 => Expression::one(),
            1 => Expression::Term(*self),
            _ => {
                let Some(new_power) = self.power.checked_mul(power) else {
                    panic!("term power overflow: {} * {power} exceeds u32::MAX", self.power);
                };
                let coefficient = self.coefficient.exp(E::PositiveInteger::from(power));
                Expression::Term(Term {
                    variable: self.variable,
                    power: new_power,
                    coefficient,
                })
            },
        }
    }

    /// Evaluates this term using `value` as the value of its variable.
    pub fn evaluate_at(&self, value: E) -> E {
        self.coefficient * value.exp(E::PositiveInteger::from(self.power))
    }
}

impl<E: FieldElement> From<Variable<E>> for Term<E> {
    fn from(variable: Variable<E>) -> Self {
        Term { variable, power: 1, coefficient: E::ONE }
    }
}

impl<E: FieldElement> IntoExpression<E> for Term<E> {
    fn into_expression(self) -> Expression<E> {
        Expression::Term(self)
    }
}

/// Renders the term as `coefficient * variable^power`; the coefficient is omitted when it is
/// ONE, and the power is omitted when it is one.
impl<E: FieldElement> fmt::Display for Term<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficient != E::ONE {
            write!(f, "{} * ", self.coefficient)?;
        }
        write!(f, "{}", self.variable)?;
        if self.power != 1 {
            write!(f, "^{}", self.power)?;
        }
        Ok(())
    }
}
