/*!
Strategies, as named bundles of facts and rules, and checks for moves forced by a strategy.

A [Strategy] adds two kinds of clause to a knowledge base:
- General information, e.g. which cards are kings.
- Strategy knowledge, e.g. when playing a card is part of the strategy.

Cards are identified by an index, and for each index two boolean symbols are used:
- `c<index>`, for facts about the card.
- `pc<index>`, for playing the card being part of the strategy.

Whether playing a card is forced by a strategy is checked by refutation: the negation of `pc<index>` is added to a knowledge base holding only the strategy, and the play is forced exactly when the result is unsatisfiable.

```rust
# use propkb::{config::Config, strategy::{MissingStrategy, StrategyRegistry, Verdict}, symbols::Session};
let session = Session::default();
let registry = StrategyRegistry::with_builtins(Config::default());

// The queen of clubs completes a marriage.
assert_eq!(registry.is_forced(&session, "marriage", 3, MissingStrategy::Abort), Ok(Verdict::Forced));
assert_eq!(registry.is_forced(&session, "marriage", 5, MissingStrategy::Abort), Ok(Verdict::NotForced));

assert!(registry.is_forced(&session, "bluff", 3, MissingStrategy::Abort).is_err());
assert_eq!(registry.is_forced(&session, "bluff", 3, MissingStrategy::FallThrough), Ok(Verdict::Unavailable));
```
*/

mod marriage;
pub use marriage::Marriage;

mod trump_exchange;
pub use trump_exchange::TrumpExchange;

use crate::{
    config::Config,
    kb::KnowledgeBase,
    misc::log::targets,
    symbols::{Session, Symbol},
    types::err::{ErrorKind, StrategyError},
};

/// A named bundle of facts and rules.
pub trait Strategy: Send + Sync {
    /// The name the strategy is registered under.
    fn name(&self) -> &'static str;

    /// Adds facts about cards relevant to the strategy.
    fn general_information(&self, session: &Session, kb: &mut KnowledgeBase) -> Result<(), ErrorKind>;

    /// Adds rules defining when playing a card is part of the strategy.
    fn strategy_knowledge(&self, session: &Session, kb: &mut KnowledgeBase) -> Result<(), ErrorKind>;
}

/// The symbol for facts about the card at `index`.
pub fn card(session: &Session, index: usize) -> Result<Symbol, ErrorKind> {
    session.boolean(&format!("c{index}"))
}

/// The symbol for playing the card at `index` being part of a strategy.
pub fn played_card(session: &Session, index: usize) -> Result<Symbol, ErrorKind> {
    session.boolean(&format!("pc{index}"))
}

/// Whether a play is forced by a strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Every model of the strategy plays the card.
    Forced,

    /// Some model of the strategy does not play the card.
    NotForced,

    /// The strategy could not be found.
    Unavailable,
}

/// What to do if a strategy is not registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingStrategy {
    /// Return an error.
    Abort,

    /// Log a warning, and return [Verdict::Unavailable].
    FallThrough,
}

/// A collection of strategies, by name.
pub struct StrategyRegistry {
    /// The configuration given to each knowledge base built from a strategy.
    pub config: Config,

    strategies: Vec<Box<dyn Strategy>>,
}

impl StrategyRegistry {
    /// A registry without any strategy.
    pub fn empty(config: Config) -> Self {
        StrategyRegistry {
            config,
            strategies: Vec::default(),
        }
    }

    /// A registry of the built-in strategies, [Marriage] and [TrumpExchange].
    pub fn with_builtins(config: Config) -> Self {
        let mut registry = Self::empty(config);
        registry.register(Box::new(Marriage));
        registry.register(Box::new(TrumpExchange));
        registry
    }

    /// Registers a strategy, replacing any strategy with the same name.
    pub fn register(&mut self, strategy: Box<dyn Strategy>) {
        self.strategies.retain(|existing| existing.name() != strategy.name());
        log::trace!(target: targets::STRATEGY, "Registered {}", strategy.name());
        self.strategies.push(strategy);
    }

    /// The names of every registered strategy.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.strategies.iter().map(|strategy| strategy.name())
    }

    /// The strategy registered under `name`.
    pub fn get(&self, name: &str) -> Option<&dyn Strategy> {
        self.strategies
            .iter()
            .find(|strategy| strategy.name() == name)
            .map(|strategy| &**strategy)
    }

    /// A fresh knowledge base holding the strategy registered under `name`.
    pub fn load(&self, session: &Session, name: &str) -> Result<KnowledgeBase, ErrorKind> {
        let Some(strategy) = self.get(name) else {
            return Err(ErrorKind::from(StrategyError::Missing(name.to_string())));
        };

        let mut kb = KnowledgeBase::from_config(self.config.clone());
        strategy.general_information(session, &mut kb)?;
        strategy.strategy_knowledge(session, &mut kb)?;
        log::debug!(target: targets::STRATEGY, "Loaded {name} with {} clauses", kb.clause_count());
        Ok(kb)
    }

    /// Whether playing the card at `index` is forced by the strategy registered under `name`.
    pub fn is_forced(
        &self,
        session: &Session,
        name: &str,
        index: usize,
        mode: MissingStrategy,
    ) -> Result<Verdict, ErrorKind> {
        let mut kb = match self.load(session, name) {
            Ok(kb) => kb,
            Err(ErrorKind::Strategy(StrategyError::Missing(missing))) => match mode {
                MissingStrategy::Abort => {
                    log::error!(target: targets::STRATEGY, "No strategy named {missing}");
                    return Err(ErrorKind::from(StrategyError::Missing(missing)));
                }
                MissingStrategy::FallThrough => {
                    log::warn!(target: targets::STRATEGY, "No strategy named {missing}, continuing");
                    return Ok(Verdict::Unavailable);
                }
            },
            Err(e) => return Err(e),
        };

        let play = played_card(session, index)?;
        kb.add_clause([!&play])?;

        let verdict = match kb.satisfiable()? {
            true => Verdict::NotForced,
            false => Verdict::Forced,
        };
        log::info!(target: targets::STRATEGY, "{play} under {name}: {verdict:?}");
        Ok(verdict)
    }
}
