//! Error types used in the library.
//!
//! - Symbol, type, and domain errors are input validation errors and surface as soon as they are noticed.
//!   They are never retried, and never replaced by some fallback formula.
//! - Capacity errors are reported whenever a configured limit would be exceeded.
//!   No attempt is made to continue with a smaller encoding.
//! - Searches themselves have no recoverable failure: a well-formed clause set always yields a definite answer.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The top-level error of the library, wrapping errors specific to some part.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    /// A name was reused with an incompatible kind (or domain), with the name.
    SymbolKindConflict(String),

    /// An expression of one sort was used where another sort was required.
    TypeMismatch(TypeMismatch),

    /// An integer symbol without a declared domain was compiled, and no default domain is configured, with the name.
    UnboundDomain(String),

    /// Some configured limit would be exceeded.
    CapacityExceeded(Capacity),

    /// Issues when reading a DIMACS formula.
    Parse(ParseError),

    /// Issues with configuration.
    Config(ConfigError),

    /// Issues with fuzzy symbols.
    Fuzzy(FuzzyError),

    /// Issues with strategies.
    Strategy(StrategyError),
}

/// An expression had the wrong sort for its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeMismatch {
    /// A boolean was required, but an integer was found (e.g. a bare integer symbol as a disjunct).
    ExpectedBoolean,

    /// An integer was required, but a boolean was found (e.g. a boolean symbol inside a sum).
    ExpectedInteger,
}

impl From<TypeMismatch> for ErrorKind {
    fn from(e: TypeMismatch) -> Self {
        ErrorKind::TypeMismatch(e)
    }
}

/// The limit which would have been exceeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capacity {
    /// The count of atoms in a knowledge base.
    Atoms(usize),

    /// The size of the domain of some integer expression.
    Domain(usize),

    /// The count of clauses retained during resolution.
    Resolution(usize),

    /// The values of some integer expression, outside the range of i64.
    Range,
}

impl From<Capacity> for ErrorKind {
    fn from(e: Capacity) -> Self {
        ErrorKind::CapacityExceeded(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A token which is not an integer literal, at a specific line.
    Literal(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when configuring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A value outside the permitted range of the option, with the name of the option.
    OutOfRange(&'static str),

    /// An unrecognised value for the option, with the name of the option.
    Unrecognised(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors with fuzzy symbols.
#[derive(Clone, Debug, PartialEq)]
pub enum FuzzyError {
    /// A value outside [0, 1].
    OutOfRange(f64),
}

impl From<FuzzyError> for ErrorKind {
    fn from(e: FuzzyError) -> Self {
        ErrorKind::Fuzzy(e)
    }
}

/// Errors with strategies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StrategyError {
    /// No strategy is registered under the name.
    Missing(String),
}

impl From<StrategyError> for ErrorKind {
    fn from(e: StrategyError) -> Self {
        ErrorKind::Strategy(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SymbolKindConflict(name) => {
                write!(f, "The symbol '{name}' was declared with a different kind")
            }
            Self::TypeMismatch(TypeMismatch::ExpectedBoolean) => {
                write!(f, "A boolean expression was required")
            }
            Self::TypeMismatch(TypeMismatch::ExpectedInteger) => {
                write!(f, "An integer expression was required")
            }
            Self::UnboundDomain(name) => write!(f, "The integer '{name}' has no domain"),
            Self::CapacityExceeded(Capacity::Atoms(limit)) => {
                write!(f, "More than {limit} atoms required")
            }
            Self::CapacityExceeded(Capacity::Domain(limit)) => {
                write!(f, "A domain of more than {limit} values required")
            }
            Self::CapacityExceeded(Capacity::Resolution(limit)) => {
                write!(f, "More than {limit} clauses retained during resolution")
            }
            Self::CapacityExceeded(Capacity::Range) => {
                write!(f, "Integer values outside the range of i64 required")
            }
            Self::Parse(ParseError::ProblemSpecification) => {
                write!(f, "Malformed problem specification")
            }
            Self::Parse(ParseError::Line(line)) => write!(f, "Failed to read line {line}"),
            Self::Parse(ParseError::Literal(line)) => write!(f, "Malformed literal on line {line}"),
            Self::Config(ConfigError::OutOfRange(name)) => {
                write!(f, "Value out of range for {name}")
            }
            Self::Config(ConfigError::Unrecognised(name)) => {
                write!(f, "Unrecognised value for {name}")
            }
            Self::Fuzzy(FuzzyError::OutOfRange(value)) => {
                write!(f, "Fuzzy value {value} is outside [0, 1]")
            }
            Self::Strategy(StrategyError::Missing(name)) => {
                write!(f, "No strategy named '{name}'")
            }
        }
    }
}

impl std::error::Error for ErrorKind {}
