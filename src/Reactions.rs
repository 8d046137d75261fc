/// eng
/// Rule-based classification of what happens when two substances meet in the flask.
/// The module takes two catalog substances and the temperature and walks an ordered table of
/// rules over category tags and reactivity; the first rule that fires gives the outcome:
/// neutralization, metal + acid, oxidation, precipitation, indicator color change, thermal
/// decomposition, or no observed reaction.
///
///  # Examples
/// ```
/// use ChemFlask::Reactions::classifier::{classify, Classifier, RuleThresholds, ReactionKind};
/// let label = classify("Besi (Fe)", "Asam Klorida (HCl)", 25).unwrap();
/// assert!(label.starts_with("Metal-acid reaction"));
/// // decomposition only for reactive mixtures
/// let thresholds = RuleThresholds { decomposition_min_reactivity: 5, ..Default::default() };
/// let classifier = Classifier::new(thresholds);
/// let outcome = classifier.classify("Emas (Au)", "Air (H₂O)", 300).unwrap();
/// assert_eq!(outcome.kind, ReactionKind::NoReaction);
/// ```
pub mod classifier;
/// Reference book of well-known reactions: balanced equation, heat effect, hazards and
/// protective equipment, looked up by an unordered pair of reagent names.
pub mod fixed_reactions;

mod classifier_tests;
