use crate::Substances::catalog::CatalogError;
use crate::Substances::color::ColorError;
use crate::config_manager::ConfigError;
use thiserror::Error;

/// contents of the flask: portions, total volume, mixture color
pub mod vessel;
/// fill level and a text picture of the flask
pub mod flask;
/// the bench: flask, temperature, last reaction and experiment log
///
///  # Examples
/// ```
/// use ChemFlask::Lab::session::LabSession;
/// let mut session = LabSession::default();
/// session.set_temperature(250).unwrap();
/// session.add_substance("Emas (Au)", 10.0).unwrap();
/// session.add_substance("Air (H₂O)", 90.0).unwrap();
/// let outcome = session.react().unwrap();
/// assert!(outcome.label.starts_with("Thermal decomposition"));
/// let view = session.flask_view().unwrap();
/// assert_eq!(view.total_volume, 100.0);
/// ```
pub mod session;


/// error types of the lab bench
#[derive(Debug, Error)]
pub enum LabError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Volume must be positive, got {0}")]
    NonPositiveVolume(f64),
    #[error("At most {max} mL can be added at once, got {volume} mL")]
    VolumeTooLarge { volume: f64, max: f64 },
    #[error("Temperature {value}°C is outside the range {min}..={max}°C")]
    TemperatureOutOfRange { value: i32, min: i32, max: i32 },
    #[error("At least two substances are needed for a reaction, the flask holds {0}")]
    NotEnoughSubstances(usize),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
