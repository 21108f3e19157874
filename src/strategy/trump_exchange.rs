use crate::{kb::KnowledgeBase, symbols::Session, types::err::ErrorKind};

use super::{card, played_card, Strategy};

/// The jack of each suit, by card index.
const JACKS: [usize; 4] = [4, 9, 14, 19];

/// Exchange the jack of trumps.
///
/// Playing a jack is part of the strategy exactly when the jack is held: `c<jack> ↔ pc<jack>`.
pub struct TrumpExchange;

impl Strategy for TrumpExchange {
    fn name(&self) -> &'static str {
        "trumpex"
    }

    fn general_information(&self, session: &Session, kb: &mut KnowledgeBase) -> Result<(), ErrorKind> {
        for jack in JACKS {
            kb.add_clause([card(session, jack)?])?;
        }
        Ok(())
    }

    fn strategy_knowledge(&self, session: &Session, kb: &mut KnowledgeBase) -> Result<(), ErrorKind> {
        for jack in JACKS {
            let held = card(session, jack)?;
            let play = played_card(session, jack)?;

            kb.add_clause([!&held, play.expr()])?;
            kb.add_clause([!&play, held.expr()])?;
        }
        Ok(())
    }
}
