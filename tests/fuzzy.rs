use propkb::{
    config::{Aggregation, Config},
    fuzzy::{FuzzyKB, FuzzySymbol},
    types::err::{ErrorKind, FuzzyError},
};

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

mod values {
    use super::*;

    #[test]
    fn empty() {
        for aggregation in [Aggregation::Product, Aggregation::Minimum, Aggregation::Mean] {
            let mut config = Config::default();
            config.fuzzy_aggregation.set(aggregation).unwrap();
            assert_eq!(FuzzyKB::from_config(&config).fuzzy_value(), 0.0);
        }
    }

    #[test]
    fn default_is_product() {
        let mut fuzzy_kb = FuzzyKB::from_config(&Config::default());
        fuzzy_kb.add_clause(FuzzySymbol::new("a", 0.8).unwrap());
        fuzzy_kb.add_clause(FuzzySymbol::new("b", 0.5).unwrap());
        assert!(close(fuzzy_kb.fuzzy_value(), 0.4));
    }

    #[test]
    fn within_bounds() {
        for aggregation in [Aggregation::Product, Aggregation::Minimum, Aggregation::Mean] {
            let mut config = Config::default();
            config.fuzzy_aggregation.set(aggregation).unwrap();
            let mut fuzzy_kb = FuzzyKB::from_config(&config);

            for (index, value) in [0.0, 0.1, 0.9, 1.0, 0.33].into_iter().enumerate() {
                fuzzy_kb.add_clause(FuzzySymbol::new(&format!("f{index}"), value).unwrap());
                let aggregate = fuzzy_kb.fuzzy_value();
                assert!((0.0..=1.0).contains(&aggregate));
            }
        }
    }

    #[test]
    fn replacement() {
        let mut fuzzy_kb = FuzzyKB::from_config(&Config::default());
        fuzzy_kb.add_clause(FuzzySymbol::new("a", 0.2).unwrap());
        fuzzy_kb.add_clause(FuzzySymbol::new("a", 0.6).unwrap());

        assert_eq!(fuzzy_kb.symbols().len(), 1);
        assert_eq!(fuzzy_kb.value_of("a"), Some(0.6));
        assert_eq!(fuzzy_kb.value_of("b"), None);
    }
}

mod errors {
    use super::*;

    #[test]
    fn out_of_range() {
        assert_eq!(
            FuzzySymbol::new("a", -0.1),
            Err(ErrorKind::Fuzzy(FuzzyError::OutOfRange(-0.1)))
        );
        assert!(FuzzySymbol::new("a", 1.0 + 1e-9).is_err());
        assert!(FuzzySymbol::new("a", f64::NAN).is_err());
    }

    #[test]
    fn rejected_nan_is_not_equal_to_itself() {
        let rejected = FuzzySymbol::new("a", f64::NAN).unwrap_err();
        assert!(matches!(rejected, ErrorKind::Fuzzy(FuzzyError::OutOfRange(value)) if value.is_nan()));
        assert_ne!(rejected, rejected.clone());
    }
}
