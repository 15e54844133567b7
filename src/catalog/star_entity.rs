use super::spectral::{SpectralClass, classify};
use nalgebra::Vector3;

/// A validated star of the catalog.
///
/// Immutable once loaded. Navigation holds it through an `Arc` and never
/// mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct StarEntity {
    /// Display name, unique within a catalog.
    name: String,
    /// Position in scene units.
    position: Vector3<f64>,
    /// Raw spectral type as found in the catalog, if it was a string.
    spectral_type: Option<String>,
    /// Distance from Sol in light years.
    distance_ly: f64,
    /// Effective temperature in Kelvin.
    temperature: f64,
    /// Radius in solar radii.
    radius: f64,
    /// Luminosity in solar luminosities.
    luminosity: f64,
    /// Mass in solar masses.
    mass: f64,
    /// Names of known exoplanets, empty if none are known.
    exoplanets: Vec<String>,
    description: Option<String>,
}

impl StarEntity {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        position: Vector3<f64>,
        spectral_type: Option<String>,
        distance_ly: f64,
        temperature: f64,
        radius: f64,
        luminosity: f64,
        mass: f64,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            spectral_type,
            distance_ly,
            temperature,
            radius,
            luminosity,
            mass,
            exoplanets: Vec::new(),
            description: None,
        }
    }

    pub fn with_exoplanets(mut self, exoplanets: Vec<String>) -> Self {
        self.exoplanets = exoplanets;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn position(&self) -> Vector3<f64> { self.position }
    pub fn spectral_type(&self) -> Option<&str> { self.spectral_type.as_deref() }
    pub fn spectral_class(&self) -> SpectralClass { classify(self.spectral_type()) }
    pub fn distance_ly(&self) -> f64 { self.distance_ly }
    pub fn temperature(&self) -> f64 { self.temperature }
    pub fn radius(&self) -> f64 { self.radius }
    pub fn luminosity(&self) -> f64 { self.luminosity }
    pub fn mass(&self) -> f64 { self.mass }
    pub fn exoplanets(&self) -> &[String] { &self.exoplanets }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }

    /// Radius of the sphere the star is drawn and picked with.
    pub fn display_radius(&self) -> f64 { self.spectral_class().style().radius() }
}
