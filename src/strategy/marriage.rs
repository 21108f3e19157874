use crate::{kb::KnowledgeBase, symbols::Session, types::err::ErrorKind};

use super::{card, played_card, Strategy};

/// The king and queen of each suit, by card index.
const MARRIAGES: [(usize, usize); 4] = [(2, 3), (7, 8), (12, 13), (17, 18)];

/// Play the queen of a marriage.
///
/// For each suit, playing the queen is part of the strategy exactly when both the king and queen are held:
/// `pc<queen> ↔ c<king> ∧ c<queen>`.
pub struct Marriage;

impl Strategy for Marriage {
    fn name(&self) -> &'static str {
        "marriage"
    }

    fn general_information(&self, session: &Session, kb: &mut KnowledgeBase) -> Result<(), ErrorKind> {
        for (king, queen) in MARRIAGES {
            kb.add_clause([card(session, king)?])?;
            kb.add_clause([card(session, queen)?])?;
        }
        Ok(())
    }

    fn strategy_knowledge(&self, session: &Session, kb: &mut KnowledgeBase) -> Result<(), ErrorKind> {
        for (king, queen) in MARRIAGES {
            let king = card(session, king)?;
            let play = played_card(session, queen)?;
            let queen = card(session, queen)?;

            kb.add_clause([!&play, king.expr()])?;
            kb.add_clause([!&play, queen.expr()])?;
            kb.add_clause([!&king, !&queen, play.expr()])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod marriage_tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn queens_are_played() {
        let session = Session::default();
        let mut kb = KnowledgeBase::from_config(Config::default());
        Marriage.general_information(&session, &mut kb).unwrap();
        Marriage.strategy_knowledge(&session, &mut kb).unwrap();

        for (king, queen) in MARRIAGES {
            assert_eq!(kb.entails(played_card(&session, queen).unwrap()), Ok(true));
            assert_eq!(kb.entails(played_card(&session, king).unwrap()), Ok(false));
        }
    }
}
