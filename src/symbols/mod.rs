/*!
The symbol algebra.

Symbols are of two kinds:
- Boolean symbols, e.g. `c7`, standing for some proposition.
- Integer symbols, e.g. `x`, standing for some value in a bounded [Domain].

Symbols are [interned](Session) by name, and combined into [expressions](Expr) by negation, addition, and comparison.
Nothing is evaluated when an expression is built.
Instead, an expression is [compiled](crate::compile) to clauses when given to a [knowledge base](crate::kb).

```rust
# use propkb::symbols::{Domain, Expr, Session};
let session = Session::default();
let x = session.integer("x", Some(Domain::new(0, 3))).unwrap();
let y = session.integer("y", Some(Domain::new(0, 3))).unwrap();
let c2 = session.boolean("c2").unwrap();

let sum_large = (&x + &y).gt(2);
let not_c2 = !&c2;

assert_eq!(sum_large.to_string(), "x + y > 2");
assert_eq!(not_c2.to_string(), "~c2");
```
*/

mod domain;
pub use domain::Domain;

mod expr;
pub use expr::{Comparison, Expr, Sort};

mod session;
pub use session::Session;

use std::sync::Arc;

/// The kind of a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// A boolean symbol.
    Boolean,

    /// An integer symbol, with a domain if one was declared.
    Integer(Option<Domain>),
}

/// Data shared by every handle to a symbol.
#[derive(Debug)]
struct SymbolData {
    /// The session the symbol was interned in.
    session: u64,

    /// The index of the symbol within the session.
    id: u32,

    name: String,

    kind: SymbolKind,
}

/// An interned symbol.
///
/// Cheap to clone, as clones are handles to the same symbol.
/// Two symbols are equal exactly when they were interned by the same session under the same name.
#[derive(Clone)]
pub struct Symbol(Arc<SymbolData>);

impl Symbol {
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn kind(&self) -> SymbolKind {
        self.0.kind
    }

    /// The declared domain of an integer symbol, if any.
    pub fn domain(&self) -> Option<Domain> {
        match self.0.kind {
            SymbolKind::Boolean => None,
            SymbolKind::Integer(domain) => domain,
        }
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self.0.kind, SymbolKind::Boolean)
    }

    /// A key for the symbol, unique within the process.
    pub fn key(&self) -> (u64, u32) {
        (self.0.session, self.0.id)
    }

    /// The symbol as an expression.
    pub fn expr(&self) -> Expr {
        Expr::Symbol(self.clone())
    }

    /// The comparison `self == other`.
    pub fn equals(&self, other: impl Into<Expr>) -> Expr {
        self.expr().equals(other)
    }

    /// The comparison `self != other`.
    pub fn not_equals(&self, other: impl Into<Expr>) -> Expr {
        self.expr().not_equals(other)
    }

    /// The comparison `self < other`.
    pub fn lt(&self, other: impl Into<Expr>) -> Expr {
        self.expr().lt(other)
    }

    /// The comparison `self > other`.
    pub fn gt(&self, other: impl Into<Expr>) -> Expr {
        self.expr().gt(other)
    }

    /// The comparison `self <= other`.
    pub fn le(&self, other: impl Into<Expr>) -> Expr {
        self.expr().le(other)
    }

    /// The comparison `self >= other`.
    pub fn ge(&self, other: impl Into<Expr>) -> Expr {
        self.expr().ge(other)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Symbol {}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.kind {
            SymbolKind::Boolean => write!(f, "Boolean({})", self.0.name),
            SymbolKind::Integer(Some(domain)) => write!(f, "Integer({}, {domain})", self.0.name),
            SymbolKind::Integer(None) => write!(f, "Integer({})", self.0.name),
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.name)
    }
}
