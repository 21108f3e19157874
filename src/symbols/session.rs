/*!
Sessions, within which symbols are interned.

A [Session] owns a table from names to [Symbol]s.
Asking a session for a symbol by name returns the symbol already made for that name, if one exists, and otherwise makes (and records) a fresh symbol.
So, within a session, identical names denote the identical symbol.

Symbols from different sessions are always distinct, even if their names agree.
This scopes identity, e.g. to a single reasoning task.

A session may also be shared between threads, as the table is guarded by a mutex.

```rust
# use propkb::symbols::{Domain, Session};
# use propkb::types::err::ErrorKind;
let session = Session::default();

let c7 = session.boolean("c7").unwrap();
assert_eq!(c7, session.boolean("c7").unwrap());

assert_eq!(
    session.integer("c7", None),
    Err(ErrorKind::SymbolKindConflict("c7".to_string()))
);

let other_session = Session::default();
assert_ne!(c7, other_session.boolean("c7").unwrap());
```
*/

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
};

use crate::{misc::log::targets, types::err::ErrorKind};

use super::{Domain, Symbol, SymbolKind};

/// A source of distinct identifiers for sessions.
static SESSION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A table of interned symbols.
pub struct Session {
    id: u64,
    table: Mutex<HashMap<String, Symbol>>,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            id: SESSION_COUNTER.fetch_add(1, Ordering::Relaxed),
            table: Mutex::new(HashMap::default()),
        }
    }
}

impl Session {
    /// The canonical boolean symbol named `name`.
    ///
    /// Fails if `name` is already an integer symbol.
    pub fn boolean(&self, name: &str) -> Result<Symbol, ErrorKind> {
        self.intern(name, SymbolKind::Boolean)
    }

    /// The canonical integer symbol named `name`.
    ///
    /// Fails if `name` is already a boolean symbol, or if `name` is already an integer symbol and `domain` is some domain other than the domain of the symbol.
    /// If `domain` is none, any integer symbol named `name` is returned.
    pub fn integer(&self, name: &str, domain: Option<Domain>) -> Result<Symbol, ErrorKind> {
        self.intern(name, SymbolKind::Integer(domain))
    }

    /// The symbol named `name`, if some symbol has been made.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.lock().get(name).cloned()
    }

    /// A count of symbols in the session.
    pub fn symbol_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Symbol>> {
        // The table is only written by a single insert, so is consistent even if some holder panicked.
        self.table
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn intern(&self, name: &str, kind: SymbolKind) -> Result<Symbol, ErrorKind> {
        let mut table = self.lock();

        if let Some(existing) = table.get(name) {
            let compatible = match (existing.kind(), &kind) {
                (SymbolKind::Boolean, SymbolKind::Boolean) => true,
                (SymbolKind::Integer(_), SymbolKind::Integer(None)) => true,
                (SymbolKind::Integer(declared), SymbolKind::Integer(requested)) => {
                    declared == *requested
                }
                _ => false,
            };
            return match compatible {
                true => Ok(existing.clone()),
                false => {
                    log::error!(target: targets::SYMBOLS, "Conflicting declaration of {name}");
                    Err(ErrorKind::SymbolKindConflict(name.to_string()))
                }
            };
        }

        let id = table.len() as u32;
        let symbol = Symbol(Arc::new(super::SymbolData {
            session: self.id,
            id,
            name: name.to_string(),
            kind,
        }));
        log::trace!(target: targets::SYMBOLS, "Interned {name} as {id} in session {}", self.id);
        table.insert(name.to_string(), symbol.clone());
        Ok(symbol)
    }
}

#[cfg(test)]
mod session_tests {
    use super::*;

    #[test]
    fn integer_domains() {
        let session = Session::default();
        let x = session.integer("x", Some(Domain::new(0, 3))).unwrap();

        assert_eq!(session.integer("x", None), Ok(x.clone()));
        assert_eq!(session.integer("x", Some(Domain::new(0, 3))), Ok(x));
        assert_eq!(
            session.integer("x", Some(Domain::new(0, 4))),
            Err(ErrorKind::SymbolKindConflict("x".to_string()))
        );
        assert_eq!(
            session.boolean("x"),
            Err(ErrorKind::SymbolKindConflict("x".to_string()))
        );
    }

    #[test]
    fn undeclared_domain_is_fixed() {
        let session = Session::default();
        let y = session.integer("y", None).unwrap();

        assert_eq!(session.integer("y", None), Ok(y));
        assert!(session.integer("y", Some(Domain::new(0, 1))).is_err());
    }

    #[test]
    fn shared_between_threads() {
        let session = Session::default();

        let symbols = std::thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| scope.spawn(|| session.boolean("pc7").unwrap()))
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect::<Vec<_>>()
        });

        assert!(symbols.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(session.symbol_count(), 1);
    }
}
