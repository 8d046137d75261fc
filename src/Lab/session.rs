//! # Lab Session Module
//!
//! ## Aim
//! Keeps everything one experimenter does at the bench: the flask with its portions, the
//! temperature of the hot plate, the result of the last reaction and the experiment log.
//!
//! ## Main Data Structures and Logic
//! - `LabSession`: explicit state object handed to every front-end action
//! - `LogEntry`: reactions and flask cleanings, ordered and append-only until the user
//!   clears the log
//!
//! Cleaning the flask empties the vessel but keeps the log; the log has its own clear action.
//!
//! ## Usage
//! ```rust
//! use ChemFlask::Lab::session::LabSession;
//! use ChemFlask::Reactions::classifier::ReactionKind;
//! let mut session = LabSession::default();
//! session.add_substance("Asam Klorida (HCl)", 50.0).unwrap();
//! session.add_substance("Natrium Hidroksida (NaOH)", 50.0).unwrap();
//! let outcome = session.react().unwrap();
//! assert_eq!(outcome.kind, ReactionKind::Neutralization);
//! session.reset();
//! assert_eq!(session.total_volume(), 0.0);
//! assert_eq!(session.log().len(), 2);
//! ```

use crate::Lab::LabError;
use crate::Lab::flask::FlaskView;
use crate::Lab::vessel::{Vessel, VesselEntry};
use crate::Reactions::classifier::{Classifier, ReactionOutcome};
use crate::Substances::color::Rgb;
use crate::config_manager::{LabConfig, with_config};
use log::{info, warn};
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum LogEntry {
    Reaction(ReactionOutcome),
    VesselCleaned,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::Reaction(outcome) => write!(
                f,
                "Reaction: {} + {} → {}",
                outcome.substances.0, outcome.substances.1, outcome.label
            ),
            LogEntry::VesselCleaned => write!(f, "Flask cleaned"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LabSession {
    vessel: Vessel,
    temperature_c: i32,
    min_temperature_c: i32,
    max_temperature_c: i32,
    max_addition_ml: f64,
    flask_capacity_ml: f64,
    classifier: Classifier,
    last_outcome: Option<ReactionOutcome>,
    log: Vec<LogEntry>,
}

impl Default for LabSession {
    fn default() -> Self {
        Self::new(&LabConfig::default())
    }
}

impl LabSession {
    pub fn new(config: &LabConfig) -> Self {
        Self {
            vessel: Vessel::new(),
            temperature_c: config.default_temperature_c,
            min_temperature_c: config.min_temperature_c,
            max_temperature_c: config.max_temperature_c,
            max_addition_ml: config.max_addition_ml,
            flask_capacity_ml: config.flask_capacity_ml,
            classifier: Classifier::new(config.thresholds.clone()),
            last_outcome: None,
            log: Vec::new(),
        }
    }

    /// session configured from the global lab config
    pub fn from_global_config() -> Self {
        with_config(|manager| Self::new(manager.get_config()))
    }

    /// Takes new limits and rule thresholds; the flask and the log stay.
    /// The temperature is clamped into the new range. An invalid config is rejected
    /// and the session is left as it was.
    pub fn apply_config(&mut self, config: &LabConfig) -> Result<(), LabError> {
        config.validate()?;
        self.min_temperature_c = config.min_temperature_c;
        self.max_temperature_c = config.max_temperature_c;
        self.max_addition_ml = config.max_addition_ml;
        self.flask_capacity_ml = config.flask_capacity_ml;
        self.classifier = Classifier::new(config.thresholds.clone());
        self.temperature_c = self
            .temperature_c
            .clamp(config.min_temperature_c, config.max_temperature_c);
        Ok(())
    }

    ///////////////////////////////////ACTIONS/////////////////////////////////////////////
    pub fn add_substance(&mut self, name: &str, volume: f64) -> Result<&VesselEntry, LabError> {
        if volume > self.max_addition_ml {
            return Err(LabError::VolumeTooLarge {
                volume,
                max: self.max_addition_ml,
            });
        }
        let entry = self.vessel.add_by_name(name, volume)?;
        info!("{} mL of {} added to the flask", volume, name);
        Ok(entry)
    }

    pub fn set_temperature(&mut self, temperature_c: i32) -> Result<(), LabError> {
        if temperature_c < self.min_temperature_c || temperature_c > self.max_temperature_c {
            return Err(LabError::TemperatureOutOfRange {
                value: temperature_c,
                min: self.min_temperature_c,
                max: self.max_temperature_c,
            });
        }
        self.temperature_c = temperature_c;
        Ok(())
    }

    /// classifies the first two portions of the flask at the current temperature
    pub fn react(&mut self) -> Result<&ReactionOutcome, LabError> {
        let (first, second) = self
            .vessel
            .first_pair()
            .ok_or(LabError::NotEnoughSubstances(self.vessel.len()))?;
        let outcome = self.classifier.classify(first, second, self.temperature_c)?;
        info!("reaction triggered: {}", outcome.label);
        self.log.push(LogEntry::Reaction(outcome.clone()));
        Ok(self.last_outcome.insert(outcome))
    }

    /// empties the flask; the log is kept
    pub fn reset(&mut self) {
        self.vessel.clear();
        self.last_outcome = None;
        self.log.push(LogEntry::VesselCleaned);
        info!("flask cleaned");
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    ///////////////////////////////////STATE/////////////////////////////////////////////
    pub fn vessel(&self) -> &Vessel {
        &self.vessel
    }

    pub fn temperature(&self) -> i32 {
        self.temperature_c
    }

    pub fn temperature_range(&self) -> (i32, i32) {
        (self.min_temperature_c, self.max_temperature_c)
    }

    pub fn max_addition(&self) -> f64 {
        self.max_addition_ml
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn last_outcome(&self) -> Option<&ReactionOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn total_volume(&self) -> f64 {
        self.vessel.total_volume()
    }

    pub fn mixed_color(&self) -> Result<Rgb, LabError> {
        self.vessel.mixed_color()
    }

    pub fn flask_view(&self) -> Result<FlaskView, LabError> {
        let view = FlaskView::new(
            self.mixed_color()?,
            self.total_volume(),
            self.flask_capacity_ml,
        );
        if view.is_overflowing() {
            warn!(
                "flask holds {} mL, more than its {} mL scale",
                view.total_volume, view.capacity
            );
        }
        Ok(view)
    }

    ///////////////////////////INPUT/OUTPUT/////////////////////////////////////////////////
    /// writes the log as a JSON array
    pub fn export_log(&self, path: &Path) -> Result<(), LabError> {
        let content = serde_json::to_string_pretty(&self.log)?;
        fs::write(path, content)?;
        info!("experiment log written to {}", path.display());
        Ok(())
    }

    pub fn load_log(path: &Path) -> Result<Vec<LogEntry>, LabError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn print_log(&self) {
        let mut table = Table::new();
        table.add_row(row!["#", "Entry"]);
        for (i, entry) in self.log.iter().enumerate() {
            table.add_row(row![i + 1, entry]);
        }
        table.printstd();
    }
}
