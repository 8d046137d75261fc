/////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
/////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Reactions::classifier::{
        Classifier, ReactionKind, ReactionRule, Rule, RuleThresholds, classify,
    };
    use crate::Substances::catalog::{CATALOG, CatalogError, Substance, Tag, find_substance};
    use crate::Substances::color::Rgb;

    const HCL: &str = "Asam Klorida (HCl)";
    const NAOH: &str = "Natrium Hidroksida (NaOH)";
    const FE: &str = "Besi (Fe)";
    const NACL: &str = "Natrium Klorida (NaCl)";
    const KNO3: &str = "Kalium Nitrat (KNO₃)";
    const WATER: &str = "Air (H₂O)";
    const GOLD: &str = "Emas (Au)";
    const CHLORINE: &str = "Klorin (Cl₂)";
    const OXYGEN: &str = "Oksigen (O₂)";
    const PHENOLPHTHALEIN: &str = "Fenolftalein";
    const COPPER: &str = "Tembaga (Cu)";
    const SULFUR: &str = "Belerang (S)";
    const PHOSPHORUS: &str = "Fosfor (P)";

    fn kind(a: &str, b: &str, t: i32) -> ReactionKind {
        Classifier::default().classify(a, b, t).unwrap().kind
    }

    #[test]
    fn test_neutralization_names_both_substances() {
        let label = classify(HCL, NAOH, 25).unwrap();
        assert!(label.starts_with("Neutralization"));
        assert!(label.contains(HCL));
        assert!(label.contains(NAOH));
        // and in the other order
        assert_eq!(kind(NAOH, HCL, 25), ReactionKind::Neutralization);
    }

    #[test]
    fn test_metal_acid() {
        assert_eq!(find_substance(FE).unwrap().reactivity, 6);
        let label = classify(FE, HCL, 25).unwrap();
        assert!(label.contains("Hydrogen gas"));
        assert_eq!(kind(HCL, FE, 25), ReactionKind::MetalAcid);
        // copper is not reactive enough
        assert_eq!(kind(COPPER, HCL, 25), ReactionKind::NoReaction);
    }

    #[test]
    fn test_non_metals_react_like_metals() {
        let outcome = Classifier::default().classify(SULFUR, HCL, 25).unwrap();
        assert_eq!(outcome.kind, ReactionKind::MetalAcid);
        assert_eq!(kind(HCL, PHOSPHORUS, 25), ReactionKind::MetalAcid);
        // carbon reactivity 4 is not above the gate
        assert_eq!(kind("Karbon (C)", HCL, 25), ReactionKind::NoReaction);
        assert_eq!(kind(CHLORINE, PHOSPHORUS, 150), ReactionKind::Oxidation);
        assert_eq!(kind(SULFUR, "Fluorin (F₂)", 150), ReactionKind::Oxidation);
    }

    #[test]
    fn test_precipitation() {
        let outcome = Classifier::default().classify(NACL, KNO3, 25).unwrap();
        assert_eq!(outcome.kind, ReactionKind::Precipitation);
        assert!(outcome.label.contains("Precipitate"));
    }

    #[test]
    fn test_oxidation_needs_heat_and_a_reactive_gas() {
        assert_eq!(kind(CHLORINE, FE, 150), ReactionKind::Oxidation);
        assert_eq!(kind(FE, CHLORINE, 150), ReactionKind::Oxidation);
        assert_eq!(kind(CHLORINE, FE, 100), ReactionKind::NoReaction);
        // oxygen reactivity 6 is below the gate; at 150 °C nothing else fires
        assert_eq!(kind(OXYGEN, FE, 150), ReactionKind::NoReaction);
    }

    #[test]
    fn test_indicator_both_orders() {
        let outcome = Classifier::default()
            .classify(HCL, PHENOLPHTHALEIN, 25)
            .unwrap();
        assert_eq!(outcome.kind, ReactionKind::IndicatorAcid);
        assert!(outcome.label.contains(PHENOLPHTHALEIN));
        assert_eq!(kind(PHENOLPHTHALEIN, NAOH, 25), ReactionKind::IndicatorBase);
        assert_eq!(kind(NAOH, PHENOLPHTHALEIN, 25), ReactionKind::IndicatorBase);
    }

    #[test]
    fn test_thermal_decomposition() {
        assert_eq!(kind(GOLD, WATER, 201), ReactionKind::ThermalDecomposition);
        assert_eq!(kind(GOLD, WATER, 200), ReactionKind::NoReaction);
    }

    #[test]
    fn test_thermal_decomposition_gate_is_configurable() {
        let classifier = Classifier::new(RuleThresholds {
            decomposition_min_reactivity: 5,
            ..Default::default()
        });
        // gold 1, water 0
        let outcome = classifier.classify(GOLD, WATER, 300).unwrap();
        assert_eq!(outcome.kind, ReactionKind::NoReaction);
        // iron 6 passes the gate
        let outcome = classifier.classify(FE, WATER, 300).unwrap();
        assert_eq!(outcome.kind, ReactionKind::ThermalDecomposition);
    }

    #[test]
    fn test_default_label_embeds_names_and_temperature() {
        let label = classify(GOLD, WATER, 25).unwrap();
        assert_eq!(
            label,
            "No observed reaction between Emas (Au) and Air (H₂O) at 25°C"
        );
        assert!(label.contains("25"));
        let label = classify(WATER, GOLD, -20).unwrap();
        assert!(label.contains("-20"));
    }

    #[test]
    fn test_rule_priority() {
        // neutralization is checked before the heat rule
        assert_eq!(kind(HCL, NAOH, 400), ReactionKind::Neutralization);
        // metal-acid before decomposition
        assert_eq!(kind(FE, HCL, 400), ReactionKind::MetalAcid);
        // precipitation before decomposition
        assert_eq!(kind(NACL, KNO3, 400), ReactionKind::Precipitation);
        // oxidation before decomposition
        assert_eq!(kind(CHLORINE, FE, 400), ReactionKind::Oxidation);
    }

    #[test]
    fn test_neutralization_beats_indicator() {
        // an indicator that is itself a base meets the acid rule first
        let basic_indicator = Substance {
            name: "Indikator Basa",
            color: Rgb::new(200, 0, 200),
            category: "indikator basa",
            tags: &[Tag::Indicator, Tag::Base],
            density: 1.0,
            reactivity: 1,
            ph: Some(9.0),
            formula: None,
        };
        let hcl = find_substance(HCL).unwrap();
        let classifier = Classifier::default();
        let outcome = classifier.classify_substances(hcl, &basic_indicator, 25);
        assert_eq!(outcome.kind, ReactionKind::Neutralization);
        let outcome = classifier.classify_substances(&basic_indicator, hcl, 25);
        assert_eq!(outcome.kind, ReactionKind::Neutralization);
        // without the acid the indicator rule is still reachable
        let naoh = find_substance(NAOH).unwrap();
        let water = find_substance(WATER).unwrap();
        assert_eq!(
            classifier.classify_substances(&basic_indicator, water, 25).kind,
            ReactionKind::NoReaction
        );
        assert_eq!(
            classifier.classify_substances(&basic_indicator, naoh, 25).kind,
            ReactionKind::IndicatorBase
        );
    }

    #[test]
    fn test_indicator_beats_thermal_decomposition() {
        assert_eq!(kind(PHENOLPHTHALEIN, HCL, 300), ReactionKind::IndicatorAcid);
        assert_eq!(kind(NAOH, PHENOLPHTHALEIN, 450), ReactionKind::IndicatorBase);
        assert_eq!(
            kind(PHENOLPHTHALEIN, WATER, 300),
            ReactionKind::ThermalDecomposition
        );
    }

    #[test]
    fn test_rule_table_order() {
        let classifier = Classifier::default();
        let names: Vec<&str> = classifier.rules().iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), 6);
        assert!(matches!(classifier.rules()[0], Rule::Neutralization(_)));
        assert!(matches!(
            classifier.rules()[5],
            Rule::ThermalDecomposition(_)
        ));
    }

    #[test]
    fn test_unknown_substance() {
        assert_eq!(
            classify("Adamantium", HCL, 25),
            Err(CatalogError::UnknownSubstance("Adamantium".to_string()))
        );
        assert!(classify(HCL, "Mithril", 25).is_err());
    }

    #[test]
    fn test_classifier_is_total_and_pure() {
        let classifier = Classifier::default();
        for t in [-20, 25, 150, 250, 500] {
            for a in CATALOG.iter().take(20) {
                for b in CATALOG.iter().skip(20) {
                    let first = classifier.classify_substances(a, b, t);
                    let second = classifier.classify_substances(a, b, t);
                    assert_eq!(first, second);
                    assert!(!first.label.is_empty());
                    assert_eq!(first.substances.0, a.name);
                    assert_eq!(first.temperature_c, t);
                }
            }
        }
    }

    #[test]
    fn test_explanations() {
        assert!(ReactionKind::Neutralization.explanation().unwrap().contains("NaCl"));
        assert!(ReactionKind::MetalAcid.explanation().unwrap().contains("H₂"));
        assert!(ReactionKind::NoReaction.explanation().is_none());
        assert!(ReactionKind::NoReaction.observation().is_none());
    }
}
