//! # Reaction Classifier Module
//!
//! ## Aim
//! Decides what happens in the flask when the first two poured substances meet at a given
//! temperature. The decision is made by an ordered table of rules over category tags,
//! reactivity scores and temperature; the first rule that fires wins.
//!
//! ## Main Data Structures and Logic
//! - `ReactionRule` trait: one rule of the table; every rule is a small struct holding its
//!   thresholds
//! - `Rule` enum: static dispatch over all rule structs (`enum_dispatch`)
//! - `RuleThresholds`: every numeric threshold of the table, loaded from the lab config
//! - `Classifier`: the ordered table, `classify_substances()` walks it and falls back to
//!   the "no observed reaction" outcome
//! - `ReactionKind` / `ReactionOutcome`: result of classification with explanation texts
//!
//! ## Rule order
//! 1. acid + base → neutralization
//! 2. metal (reactivity > 4) + acid → salt + hydrogen gas
//! 3. gas (reactivity > 7) + metal above 100 °C → metal oxide
//! 4. salt + salt → precipitate
//! 5. indicator + acid or base → indicator color change
//! 6. above 200 °C → thermal decomposition
//! 7. otherwise no observed reaction
//!
//! Each pairwise rule is symmetric in the two substances.
//!
//! ## Usage
//! ```rust
//! use ChemFlask::Reactions::classifier::{Classifier, ReactionKind};
//! let classifier = Classifier::default();
//! let outcome = classifier
//!     .classify("Asam Klorida (HCl)", "Natrium Hidroksida (NaOH)", 25)
//!     .unwrap();
//! assert_eq!(outcome.kind, ReactionKind::Neutralization);
//! ```

use crate::Substances::catalog::{CatalogError, Substance, Tag, find_substance};
use enum_dispatch::enum_dispatch;
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReactionKind {
    Neutralization,
    MetalAcid,
    Oxidation,
    Precipitation,
    IndicatorAcid,
    IndicatorBase,
    ThermalDecomposition,
    NoReaction,
}

impl ReactionKind {
    pub fn title(&self) -> &'static str {
        match self {
            ReactionKind::Neutralization => "Neutralization",
            ReactionKind::MetalAcid => "Metal-acid reaction",
            ReactionKind::Oxidation => "Metal oxidation",
            ReactionKind::Precipitation => "Precipitation",
            ReactionKind::IndicatorAcid => "Indicator color change (acid)",
            ReactionKind::IndicatorBase => "Indicator color change (base)",
            ReactionKind::ThermalDecomposition => "Thermal decomposition",
            ReactionKind::NoReaction => "No reaction",
        }
    }

    /// short scientific background shown after a reaction
    pub fn explanation(&self) -> Option<&'static str> {
        match self {
            ReactionKind::Neutralization => Some(
                "- Occurs between an acid and a base\n\
                 - Produces a salt and water\n\
                 - General equation: Acid + Base → Salt + Water\n\
                 - Example: HCl + NaOH → NaCl + H₂O",
            ),
            ReactionKind::MetalAcid => Some(
                "- A metal reacts with an acid producing a salt and hydrogen gas\n\
                 - General equation: Metal + Acid → Salt + H₂(g)\n\
                 - Hydrogen gas is flammable\n\
                 - Example: Zn + 2HCl → ZnCl₂ + H₂",
            ),
            ReactionKind::Oxidation => Some(
                "- A metal reacts with an oxidizing gas forming a metal oxide\n\
                 - Usually happens at high temperature\n\
                 - Example: 2Mg + O₂ → 2MgO",
            ),
            ReactionKind::Precipitation => Some(
                "- Two dissolved salts form an insoluble solid\n\
                 - The precipitate is often colored and can be filtered off\n\
                 - Example: AgNO₃ + NaCl → AgCl(s) + NaNO₃",
            ),
            ReactionKind::IndicatorAcid | ReactionKind::IndicatorBase => Some(
                "- An indicator is a weak acid or base whose two forms differ in color\n\
                 - The color shows on which side of its transition range the pH lies\n\
                 - Example: phenolphthalein is colorless in acid and pink in base",
            ),
            ReactionKind::ThermalDecomposition => Some(
                "- Strong heating breaks compounds into simpler substances\n\
                 - Usually endothermic and needs a continuous heat supply\n\
                 - Example: CaCO₃ → CaO + CO₂",
            ),
            ReactionKind::NoReaction => None,
        }
    }

    /// what would be seen in the flask
    pub fn observation(&self) -> Option<&'static str> {
        match self {
            ReactionKind::MetalAcid => Some("bubbles of H₂ rise from the metal"),
            ReactionKind::Precipitation => Some("a solid precipitate settles at the bottom"),
            ReactionKind::Oxidation => Some("the metal surface turns into a dull oxide"),
            ReactionKind::Neutralization => Some("the flask gets warm"),
            ReactionKind::IndicatorAcid | ReactionKind::IndicatorBase => {
                Some("the liquid changes color")
            }
            ReactionKind::ThermalDecomposition => Some("fumes are released"),
            ReactionKind::NoReaction => None,
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// result of one classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionOutcome {
    pub kind: ReactionKind,
    pub label: String,
    pub substances: (String, String),
    pub temperature_c: i32,
}

impl fmt::Display for ReactionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// numeric thresholds of the rule table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleThresholds {
    /// metal must be strictly more reactive than this to displace hydrogen
    pub metal_acid_min_reactivity: u8,
    /// gas must be strictly more reactive than this to oxidize a metal
    pub oxidation_min_gas_reactivity: u8,
    /// oxidation needs a temperature strictly above this, °C
    pub oxidation_min_temperature_c: i32,
    /// decomposition needs a temperature strictly above this, °C
    pub decomposition_temperature_c: i32,
    /// at least one substance must have this reactivity for decomposition; 0 disables the gate
    pub decomposition_min_reactivity: u8,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            metal_acid_min_reactivity: 4,
            oxidation_min_gas_reactivity: 7,
            oxidation_min_temperature_c: 100,
            decomposition_temperature_c: 200,
            decomposition_min_reactivity: 0,
        }
    }
}

/// two substances meeting at a temperature
#[derive(Debug, Clone, Copy)]
pub struct ReactionContext<'a> {
    pub first: &'a Substance,
    pub second: &'a Substance,
    pub temperature_c: i32,
}

impl<'a> ReactionContext<'a> {
    /// Returns the pair ordered as (x, y) so that `predicate(x, y)` holds, trying the
    /// given order first.
    fn either_way<F>(&self, predicate: F) -> Option<(&'a Substance, &'a Substance)>
    where
        F: Fn(&Substance, &Substance) -> bool,
    {
        if predicate(self.first, self.second) {
            Some((self.first, self.second))
        } else if predicate(self.second, self.first) {
            Some((self.second, self.first))
        } else {
            None
        }
    }
}

#[enum_dispatch]
pub trait ReactionRule {
    fn name(&self) -> &'static str;
    /// Some((kind, label)) when the rule fires
    fn apply(&self, ctx: &ReactionContext) -> Option<(ReactionKind, String)>;
}

#[derive(Debug, Clone, Default)]
pub struct NeutralizationRule;

impl ReactionRule for NeutralizationRule {
    fn name(&self) -> &'static str {
        "acid + base"
    }
    fn apply(&self, ctx: &ReactionContext) -> Option<(ReactionKind, String)> {
        ctx.either_way(|x, y| x.has_tag(Tag::Acid) && y.has_tag(Tag::Base))?;
        Some((
            ReactionKind::Neutralization,
            format!(
                "Neutralization: {} + {} → Salt + Water",
                ctx.first.name, ctx.second.name
            ),
        ))
    }
}

#[derive(Debug, Clone)]
pub struct MetalAcidRule {
    pub min_metal_reactivity: u8,
}

impl ReactionRule for MetalAcidRule {
    fn name(&self) -> &'static str {
        "reactive metal + acid"
    }
    fn apply(&self, ctx: &ReactionContext) -> Option<(ReactionKind, String)> {
        ctx.either_way(|metal, acid| {
            metal.has_tag(Tag::Metal)
                && acid.has_tag(Tag::Acid)
                && metal.reactivity > self.min_metal_reactivity
        })?;
        Some((
            ReactionKind::MetalAcid,
            format!(
                "Metal-acid reaction: {} + {} → Salt + Hydrogen gas",
                ctx.first.name, ctx.second.name
            ),
        ))
    }
}

#[derive(Debug, Clone)]
pub struct OxidationRule {
    pub min_gas_reactivity: u8,
    pub min_temperature_c: i32,
}

impl ReactionRule for OxidationRule {
    fn name(&self) -> &'static str {
        "reactive gas + metal, hot"
    }
    fn apply(&self, ctx: &ReactionContext) -> Option<(ReactionKind, String)> {
        if ctx.temperature_c <= self.min_temperature_c {
            return None;
        }
        ctx.either_way(|gas, metal| {
            gas.has_tag(Tag::Gas)
                && metal.has_tag(Tag::Metal)
                && gas.reactivity > self.min_gas_reactivity
        })?;
        Some((
            ReactionKind::Oxidation,
            format!(
                "Oxidation: {} + {} → Metal oxide",
                ctx.first.name, ctx.second.name
            ),
        ))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PrecipitationRule;

impl ReactionRule for PrecipitationRule {
    fn name(&self) -> &'static str {
        "salt + salt"
    }
    fn apply(&self, ctx: &ReactionContext) -> Option<(ReactionKind, String)> {
        if !(ctx.first.has_tag(Tag::Salt) && ctx.second.has_tag(Tag::Salt)) {
            return None;
        }
        Some((
            ReactionKind::Precipitation,
            format!(
                "Precipitation: {} + {} → Precipitate",
                ctx.first.name, ctx.second.name
            ),
        ))
    }
}

#[derive(Debug, Clone, Default)]
pub struct IndicatorRule;

impl ReactionRule for IndicatorRule {
    fn name(&self) -> &'static str {
        "indicator + acid or base"
    }
    fn apply(&self, ctx: &ReactionContext) -> Option<(ReactionKind, String)> {
        if let Some((indicator, _)) =
            ctx.either_way(|x, y| x.has_tag(Tag::Indicator) && y.has_tag(Tag::Acid))
        {
            return Some((
                ReactionKind::IndicatorAcid,
                format!(
                    "Indicator color change: {} shows acidic properties",
                    indicator.name
                ),
            ));
        }
        let (indicator, _) =
            ctx.either_way(|x, y| x.has_tag(Tag::Indicator) && y.has_tag(Tag::Base))?;
        Some((
            ReactionKind::IndicatorBase,
            format!(
                "Indicator color change: {} shows basic properties",
                indicator.name
            ),
        ))
    }
}

#[derive(Debug, Clone)]
pub struct ThermalDecompositionRule {
    pub min_temperature_c: i32,
    pub min_reactivity: u8,
}

impl ReactionRule for ThermalDecompositionRule {
    fn name(&self) -> &'static str {
        "high temperature"
    }
    fn apply(&self, ctx: &ReactionContext) -> Option<(ReactionKind, String)> {
        if ctx.temperature_c <= self.min_temperature_c {
            return None;
        }
        if ctx.first.reactivity.max(ctx.second.reactivity) < self.min_reactivity {
            return None;
        }
        Some((
            ReactionKind::ThermalDecomposition,
            format!(
                "Thermal decomposition: {} + {} → Decomposed compounds",
                ctx.first.name, ctx.second.name
            ),
        ))
    }
}

#[derive(Debug, Clone)]
#[enum_dispatch(ReactionRule)]
pub enum Rule {
    Neutralization(NeutralizationRule),
    MetalAcid(MetalAcidRule),
    Oxidation(OxidationRule),
    Precipitation(PrecipitationRule),
    Indicator(IndicatorRule),
    ThermalDecomposition(ThermalDecompositionRule),
}

/// label used when no rule fires
pub fn no_reaction_label(first: &str, second: &str, temperature_c: i32) -> String {
    format!(
        "No observed reaction between {} and {} at {}°C",
        first, second, temperature_c
    )
}

/// ordered rule table; first match wins
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
    thresholds: RuleThresholds,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(RuleThresholds::default())
    }
}

impl Classifier {
    pub fn new(thresholds: RuleThresholds) -> Self {
        let rules = vec![
            Rule::from(NeutralizationRule),
            Rule::from(MetalAcidRule {
                min_metal_reactivity: thresholds.metal_acid_min_reactivity,
            }),
            Rule::from(OxidationRule {
                min_gas_reactivity: thresholds.oxidation_min_gas_reactivity,
                min_temperature_c: thresholds.oxidation_min_temperature_c,
            }),
            Rule::from(PrecipitationRule),
            Rule::from(IndicatorRule),
            Rule::from(ThermalDecompositionRule {
                min_temperature_c: thresholds.decomposition_temperature_c,
                min_reactivity: thresholds.decomposition_min_reactivity,
            }),
        ];
        Self { rules, thresholds }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn thresholds(&self) -> &RuleThresholds {
        &self.thresholds
    }

    /// walks the rule table for two catalog records
    pub fn classify_substances(
        &self,
        first: &Substance,
        second: &Substance,
        temperature_c: i32,
    ) -> ReactionOutcome {
        let ctx = ReactionContext {
            first,
            second,
            temperature_c,
        };
        let (kind, label) = self
            .rules
            .iter()
            .find_map(|rule| {
                rule.apply(&ctx).inspect(|_| {
                    info!(
                        "rule '{}' fired for {} + {} at {}°C",
                        rule.name(),
                        first.name,
                        second.name,
                        temperature_c
                    )
                })
            })
            .unwrap_or_else(|| {
                (
                    ReactionKind::NoReaction,
                    no_reaction_label(first.name, second.name, temperature_c),
                )
            });
        ReactionOutcome {
            kind,
            label,
            substances: (first.name.to_string(), second.name.to_string()),
            temperature_c,
        }
    }

    /// classification by catalog names; unknown names are rejected
    pub fn classify(
        &self,
        first: &str,
        second: &str,
        temperature_c: i32,
    ) -> Result<ReactionOutcome, CatalogError> {
        let first = find_substance(first)?;
        let second = find_substance(second)?;
        Ok(self.classify_substances(first, second, temperature_c))
    }
}

/// label of the reaction between two catalog substances with the default thresholds
pub fn classify(first: &str, second: &str, temperature_c: i32) -> Result<String, CatalogError> {
    Classifier::default()
        .classify(first, second, temperature_c)
        .map(|outcome| outcome.label)
}
