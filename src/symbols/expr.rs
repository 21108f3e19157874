/*!
Expressions, built from symbols and integer constants.

An expression is a closed tree:
- A [symbol](Symbol), boolean or integer.
- An integer constant.
- The negation of a boolean expression.
- The sum of two integer expressions.
- The comparison of two integer expressions, which is boolean.

Expressions are built by `!`, `+`, and the named comparisons [equals](Expr::equals), [lt](Expr::lt), etc.
Building an expression checks nothing, so a malformed expression (e.g. the negation of an integer) is only noticed when the expression is given to a knowledge base, or by a call to [sort](Expr::sort).

Subexpressions are shared, so cloning an expression is cheap.
*/

use std::sync::Arc;

use crate::types::err::TypeMismatch;

use super::{Symbol, SymbolKind};

/// The sort of an expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sort {
    Boolean,
    Integer,
}

/// Comparisons between integer expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
}

impl Comparison {
    /// Whether the comparison holds between `left` and `right`.
    pub fn holds(&self, left: i64, right: i64) -> bool {
        match self {
            Self::Equal => left == right,
            Self::NotEqual => left != right,
            Self::Less => left < right,
            Self::Greater => left > right,
            Self::LessOrEqual => left <= right,
            Self::GreaterOrEqual => left >= right,
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equal => write!(f, "=="),
            Self::NotEqual => write!(f, "!="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::LessOrEqual => write!(f, "<="),
            Self::GreaterOrEqual => write!(f, ">="),
        }
    }
}

/// An expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    Symbol(Symbol),
    Constant(i64),
    Not(Arc<Expr>),
    Sum(Arc<Expr>, Arc<Expr>),
    Compare(Comparison, Arc<Expr>, Arc<Expr>),
}

impl Expr {
    /// The sort of the expression, or the first mismatch found.
    pub fn sort(&self) -> Result<Sort, TypeMismatch> {
        match self {
            Self::Symbol(symbol) => match symbol.kind() {
                SymbolKind::Boolean => Ok(Sort::Boolean),
                SymbolKind::Integer(_) => Ok(Sort::Integer),
            },

            Self::Constant(_) => Ok(Sort::Integer),

            Self::Not(inner) => match inner.sort()? {
                Sort::Boolean => Ok(Sort::Boolean),
                Sort::Integer => Err(TypeMismatch::ExpectedBoolean),
            },

            Self::Sum(left, right) => {
                Self::require_integer(left)?;
                Self::require_integer(right)?;
                Ok(Sort::Integer)
            }

            Self::Compare(_, left, right) => {
                Self::require_integer(left)?;
                Self::require_integer(right)?;
                Ok(Sort::Boolean)
            }
        }
    }

    fn require_integer(expr: &Expr) -> Result<(), TypeMismatch> {
        match expr.sort()? {
            Sort::Integer => Ok(()),
            Sort::Boolean => Err(TypeMismatch::ExpectedInteger),
        }
    }

    fn compare(&self, comparison: Comparison, other: impl Into<Expr>) -> Expr {
        Expr::Compare(comparison, Arc::new(self.clone()), Arc::new(other.into()))
    }

    /// The comparison `self == other`.
    pub fn equals(&self, other: impl Into<Expr>) -> Expr {
        self.compare(Comparison::Equal, other)
    }

    /// The comparison `self != other`.
    pub fn not_equals(&self, other: impl Into<Expr>) -> Expr {
        self.compare(Comparison::NotEqual, other)
    }

    /// The comparison `self < other`.
    pub fn lt(&self, other: impl Into<Expr>) -> Expr {
        self.compare(Comparison::Less, other)
    }

    /// The comparison `self > other`.
    pub fn gt(&self, other: impl Into<Expr>) -> Expr {
        self.compare(Comparison::Greater, other)
    }

    /// The comparison `self <= other`.
    pub fn le(&self, other: impl Into<Expr>) -> Expr {
        self.compare(Comparison::LessOrEqual, other)
    }

    /// The comparison `self >= other`.
    pub fn ge(&self, other: impl Into<Expr>) -> Expr {
        self.compare(Comparison::GreaterOrEqual, other)
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symbol(symbol) => write!(f, "{symbol}"),
            Self::Constant(value) => write!(f, "{value}"),
            Self::Not(inner) => match inner.as_ref() {
                Expr::Symbol(_) | Expr::Not(_) => write!(f, "~{inner}"),
                _ => write!(f, "~({inner})"),
            },
            Self::Sum(left, right) => write!(f, "{left} + {right}"),
            Self::Compare(comparison, left, right) => write!(f, "{left} {comparison} {right}"),
        }
    }
}

// From

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Expr::Symbol(symbol)
    }
}

impl From<&Symbol> for Expr {
    fn from(symbol: &Symbol) -> Self {
        Expr::Symbol(symbol.clone())
    }
}

impl From<&Expr> for Expr {
    fn from(expr: &Expr) -> Self {
        expr.clone()
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Constant(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Constant(value.into())
    }
}

// Operators

macro_rules! impl_operators {
    ($($target:ty),*) => {
        $(
            impl std::ops::Not for $target {
                type Output = Expr;

                fn not(self) -> Self::Output {
                    Expr::Not(Arc::new(Expr::from(self)))
                }
            }

            impl<T: Into<Expr>> std::ops::Add<T> for $target {
                type Output = Expr;

                fn add(self, other: T) -> Self::Output {
                    Expr::Sum(Arc::new(Expr::from(self)), Arc::new(other.into()))
                }
            }
        )*
    };
}

impl_operators!(Expr, &Expr, Symbol, &Symbol);

#[cfg(test)]
mod expr_tests {
    use super::*;
    use crate::symbols::{Domain, Session};

    #[test]
    fn sorts() {
        let session = Session::default();
        let p = session.boolean("p").unwrap();
        let x = session.integer("x", Some(Domain::new(0, 1))).unwrap();

        assert_eq!((!&p).sort(), Ok(Sort::Boolean));
        assert_eq!((&x + 1).sort(), Ok(Sort::Integer));
        assert_eq!((&x + &x).equals(&x).sort(), Ok(Sort::Boolean));

        assert_eq!((!&x).sort(), Err(TypeMismatch::ExpectedBoolean));
        assert_eq!((&p + &x).sort(), Err(TypeMismatch::ExpectedInteger));
        assert_eq!(p.lt(&x).sort(), Err(TypeMismatch::ExpectedInteger));
    }

    #[test]
    fn structural_identity() {
        let session = Session::default();
        let x = session.integer("x", None).unwrap();
        let y = session.integer("y", None).unwrap();

        assert_eq!(&x + &y, x.expr() + y.expr());
        assert_ne!(&x + &y, &y + &x);
    }

    #[test]
    fn display() {
        let session = Session::default();
        let x = session.integer("x", None).unwrap();
        let y = session.integer("y", None).unwrap();

        assert_eq!((&x + &y).lt(-2).to_string(), "x + y < -2");
        assert_eq!((!x.equals(&y)).to_string(), "~(x == y)");
    }
}
