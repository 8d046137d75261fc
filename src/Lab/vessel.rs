//! Contents of the flask: ordered portions of catalog substances.

use crate::Lab::LabError;
use crate::Substances::catalog::{Substance, find_substance};
use crate::Substances::color::{Rgb, mix_sequence};
use prettytable::{Table, row};

/// one portion poured into the flask
#[derive(Debug, Clone, PartialEq)]
pub struct VesselEntry {
    pub substance: String,
    /// mL, always positive
    pub volume: f64,
    pub color: Rgb,
    pub density: f64,
}

impl VesselEntry {
    pub fn new(substance: &Substance, volume: f64) -> Result<Self, LabError> {
        if volume.is_nan() || volume <= 0.0 {
            return Err(LabError::NonPositiveVolume(volume));
        }
        Ok(Self {
            substance: substance.name.to_string(),
            volume,
            color: substance.color,
            density: substance.density,
        })
    }
    /// g
    pub fn mass(&self) -> f64 {
        self.volume * self.density
    }
}

/// The total volume is always derived from the entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vessel {
    entries: Vec<VesselEntry>,
}

impl Vessel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, substance: &Substance, volume: f64) -> Result<&VesselEntry, LabError> {
        let entry = VesselEntry::new(substance, volume)?;
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// adds by catalog name
    pub fn add_by_name(&mut self, name: &str, volume: f64) -> Result<&VesselEntry, LabError> {
        let substance = find_substance(name)?;
        self.add(substance, volume)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[VesselEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// mL
    pub fn total_volume(&self) -> f64 {
        self.entries.iter().map(|e| e.volume).sum()
    }

    /// g
    pub fn total_mass(&self) -> f64 {
        self.entries.iter().map(|e| e.mass()).sum()
    }

    /// g/cm³, None for an empty flask
    pub fn mean_density(&self) -> Option<f64> {
        let total_volume = self.total_volume();
        if total_volume > 0.0 {
            Some(self.total_mass() / total_volume)
        } else {
            None
        }
    }

    /// color of the mixture, fallback white for an empty flask
    pub fn mixed_color(&self) -> Result<Rgb, LabError> {
        let portions: Vec<(Rgb, f64)> = self.entries.iter().map(|e| (e.color, e.volume)).collect();
        Ok(mix_sequence(&portions)?)
    }

    /// names of the first two portions, the pair that reacts
    pub fn first_pair(&self) -> Option<(&str, &str)> {
        match self.entries.as_slice() {
            [first, second, ..] => Some((first.substance.as_str(), second.substance.as_str())),
            _ => None,
        }
    }

    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(row!["#", "Substance", "Volume, mL", "Color"]);
        for (i, e) in self.entries.iter().enumerate() {
            table.add_row(row![i + 1, e.substance, e.volume, e.color]);
        }
        table.add_row(row!["", "Total", self.total_volume(), ""]);
        table.printstd();
    }
}
