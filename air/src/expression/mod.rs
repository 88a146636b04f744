// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::{boxed::Box, collections::BTreeSet};
use core::{cmp, fmt};

use math::FieldElement;
use tracing::{debug, warn};

use crate::{Term, Variable};

mod ops;


// INTO EXPRESSION
// ================================================================================================

/// Promotion of variables and terms into expressions.
///
/// All combinators of [Expression] accept any value implementing this trait, and behave as if
/// the value was promoted before being combined: a [Variable] becomes a term `1 * v^1`, and a
/// [Term] becomes a single-leaf expression. Scalars are promoted via
/// [Expression::constant()] (or `Expression::from()`).
pub trait IntoExpression<E: FieldElement> {
    /// Returns `self` as an expression.
    fn into_expression(self) -> Expression<E>;
}

// EXPRESSION
// ================================================================================================

/// A polynomial over [Variable]s, described as a tree of terms and constants.
///
/// Each node owns its children. Expressions are never modified once built; all combinators
/// return new expressions. Two expressions are equal if their trees are structurally equal;
/// expressions which describe the same polynomial via differently shaped trees are not equal,
/// but always evaluate to the same value.
///
/// A few rules are applied when nodes are combined:
/// * multiplying a term by a constant scales the coefficient of the term;
/// * multiplying two terms over the same variable adds up their powers;
/// * negating a term or a constant negates its value.
///
/// Everything else is kept as an explicit node of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression<E: FieldElement> {
    /// A scalar constant.
    Constant(E),
    /// A single-variable monomial.
    Term(Term<E>),
    /// Sum of two expressions.
    Add(Box<Expression<E>>, Box<Expression<E>>),
    /// Difference of two expressions.
    Sub(Box<Expression<E>>, Box<Expression<E>>),
    /// Product of two expressions.
    Mul(Box<Expression<E>>, Box<Expression<E>>),
    /// Additive inverse of an expression.
    Neg(Box<Expression<E>>),
}

impl<E: FieldElement> Expression<E> {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns an expression consisting of a single constant.
    pub fn constant(value: E) -> Self {
        Self::Constant(value)
    }

    /// Returns the constant ZERO.
    pub fn zero() -> Self {
        Self::Constant(E::ZERO)
    }

    /// Returns the constant ONE.
    pub fn one() -> Self {
        Self::Constant(E::ONE)
    }

    /// Returns an expression `lhs + rhs`.
    pub fn sum(lhs: impl IntoExpression<E>, rhs: impl IntoExpression<E>) -> Self {
        Self::Add(Box::new(lhs.into_expression()), Box::new(rhs.into_expression()))
    }

    /// Returns an expression `lhs - rhs`.
    pub fn difference(lhs: impl IntoExpression<E>, rhs: impl IntoExpression<E>) -> Self {
        Self::Sub(Box::new(lhs.into_expression()), Box::new(rhs.into_expression()))
    }

    /// Returns an expression `lhs * rhs`.
    ///
    /// Products of constants are folded into a single constant, a product of a term and a
    /// constant is folded into the term's coefficient, and a product of two terms over the same
    /// variable is folded into a single term.
    pub fn product(lhs: impl IntoExpression<E>, rhs: impl IntoExpression<E>) -> Self {
        match (lhs.into_expression(), rhs.into_expression()) {
            (Self::Constant(a), Self::Constant(b)) => Self::Constant(a * b),
            (Self::Constant(c), Self::Term(t)) | (Self::Term(t), Self::Constant(c)) => {
                Self::Term(t.scale(c))
            },
            (Self::Term(a), Self::Term(b)) => match a.merge(&b) {
                Some(term) => Self::Term(term),
                None => Self::Mul(Box::new(Self::Term(a)), Box::new(Self::Term(b))),
            },
            (lhs, rhs) => Self::Mul(Box::new(lhs), Box::new(rhs)),
        }
    }

    /// Returns an expression `-operand`.
    pub fn negation(operand: impl IntoExpression<E>) -> Self {
        match operand.into_expression() {
            Self::Constant(value) => Self::Constant(-value),
            Self::Term(term) => Self::Term(term.negate()),
            Self::Neg(inner) => *inner,
            other => Self::Neg(Box::new(other)),
        }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns true if this expression is a constant.
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Returns the term of this expression if this expression is a single term.
    pub fn as_term(&self) -> Option<&Term<E>> {
        match self {
            Self::Term(term) => Some(term),
            _ => None,
        }
    }

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    /// Returns an expression `self^power`.
    ///
    /// Raising any expression to power 0 yields the constant ONE, and raising it to power 1
    /// returns an unchanged copy. Constants and terms are raised directly; other expressions are
    /// expanded into a chain of products via square-and-multiply.
    pub fn pow(&self, power: u32) -> Self {
        match (self, power) {
            (_, 0) => Self::one(),
            (_, 1) => self.clone(),
            (Self::Constant(value), _) => {
                Self::Constant(value.exp(E::PositiveInteger::from(power)))
            },
            (Self::Term(term), _) => term.pow(power),
            _ => {
                debug!(power, "expanding power of a compound expression into products");
                let mut result: Option<Self> = None;
                let mut base = self.clone();
                let mut p = power;
                loop {
                    if p & 1 == 1 {
                        result = Some(match result {
                            Some(acc) => Self::product(acc, base.clone()),
                            None => base.clone(),
                        });
                    }
                    p >>= 1;
                    if p == 0 {
                        break;
                    }
                    base = Self::product(base.clone(), base);
                }
                // power >= 2 here, so the loop always sets the result at least once
                result.unwrap_or_else(Self::one)
            },
        }
    }

    // TRAVERSAL
    // --------------------------------------------------------------------------------------------

    /// Evaluates this expression using `assignment` to look up values of variables.
    ///
    /// The assignment is queried once per term leaf. Uninitialized variables are passed to the
    /// assignment like any other variable; detecting them is the responsibility of the caller.
    pub fn evaluate<F>(&self, mut assignment: F) -> E
    where
        F: FnMut(&Variable<E>) -> E,
    {
        self.evaluate_with(&mut assignment)
    }

    /// Returns the total degree of the polynomial described by this expression.
    ///
    /// The degree is computed from the shape of the tree: constants have degree 0, terms have
    /// the degree of their power, products add up the degrees of their factors, and sums take
    /// the maximum. Cancellations (e.g., `x^2 - x^2`) are not detected.
    pub fn degree(&self) -> usize {
        match self {
            Self::Constant(_) => 0,
            Self::Term(term) => term.power() as usize,
            Self::Add(lhs, rhs) | Self::Sub(lhs, rhs) => cmp::max(lhs.degree(), rhs.degree()),
            Self::Mul(lhs, rhs) => lhs.degree() + rhs.degree(),
            Self::Neg(inner) => inner.degree(),
        }
    }

    /// Returns the set of variables referenced by this expression.
    pub fn variables(&self) -> BTreeSet<Variable<E>> {
        let mut result = BTreeSet::new();
        self.for_each_variable(|v| {
            result.insert(*v);
        });
        result
    }

    /// Calls `f` for every term leaf of this expression, in left-to-right order.
    pub fn for_each_variable<F>(&self, mut f: F)
    where
        F: FnMut(&Variable<E>),
    {
        self.visit_variables(&mut f);
    }

    // HELPER METHODS
    // --------------------------------------------------------------------------------------------

    fn evaluate_with<F>(&self, assignment: &mut F) -> E
    where
        F: FnMut(&Variable<E>) -> E,
    {
        match self {
            Self::Constant(value) => *value,
            Self::Term(term) => {
                let variable = term.variable();
                if !variable.column_type().is_initialized() {
                    warn!(%variable, "evaluating an expression with an uninitialized variable");
                }
                term.evaluate_at(assignment(&variable))
            },
            Self::Add(lhs, rhs) => lhs.evaluate_with(assignment) + rhs.evaluate_with(assignment),
            Self::Sub(lhs, rhs) => lhs.evaluate_with(assignment) - rhs.evaluate_with(assignment),
            Self::Mul(lhs, rhs) => lhs.evaluate_with(assignment) * rhs.evaluate_with(assignment),
            Self::Neg(inner) => -inner.evaluate_with(assignment),
        }
    }

    fn visit_variables<F>(&self, f: &mut F)
    where
        F: FnMut(&Variable<E>),
    {
        match self {
            Self::Constant(_) => {},
            Self::Term(term) => f(&term.variable()),
            Self::Add(lhs, rhs) | Self::Sub(lhs, rhs) | Self::Mul(lhs, rhs) => {
                lhs.visit_variables(f);
                rhs.visit_variables(f);
            },
            Self::Neg(inner) => inner.visit_variables(f),
        }
    }
}

impl<E: FieldElement> IntoExpression<E> for Expression<E> {
    fn into_expression(self) -> Expression<E> {
        self
    }
}

impl<E: FieldElement> From<E> for Expression<E> {
    fn from(value: E) -> Self {
        Self::Constant(value)
    }
}

impl<E: FieldElement> From<Variable<E>> for Expression<E> {
    fn from(variable: Variable<E>) -> Self {
        variable.into_expression()
    }
}

impl<E: FieldElement> From<Term<E>> for Expression<E> {
    fn from(term: Term<E>) -> Self {
        Self::Term(term)
    }
}

/// Renders the expression in infix notation with every compound node parenthesized.
impl<E: FieldElement> fmt::Display for Expression<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Term(term) => write!(f, "{term}"),
            Self::Add(lhs, rhs) => write!(f, "({lhs} + {rhs})"),
            Self::Sub(lhs, rhs) => write!(f, "({lhs} - {rhs})"),
            Self::Mul(lhs, rhs) => write!(f, "({lhs} * {rhs})"),
            Self::Neg(inner) => write!(f, "-{inner}"),
        }
    }
}
