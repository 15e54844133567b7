use crate::catalog::{SpectralClass, StarEntity};

/// Attributes of an arrived-at star, as shown on the info card.
#[derive(Debug, Clone, PartialEq)]
pub struct StarReport {
    pub name: String,
    /// Raw spectral type, `None` if the catalog had none.
    pub spectral_type: Option<String>,
    pub spectral_class: SpectralClass,
    /// Distance from Sol in light years.
    pub distance: f64,
    pub temperature: f64,
    pub radius: f64,
    pub luminosity: f64,
    pub mass: f64,
    /// Empty when no exoplanets are known.
    pub exoplanets: Vec<String>,
    pub description: Option<String>,
    pub portrait: String,
}

impl From<&StarEntity> for StarReport {
    fn from(star: &StarEntity) -> Self {
        let spectral_class = star.spectral_class();
        Self {
            name: star.name().to_string(),
            spectral_type: star.spectral_type().map(str::to_string),
            spectral_class,
            distance: star.distance_ly(),
            temperature: star.temperature(),
            radius: star.radius(),
            luminosity: star.luminosity(),
            mass: star.mass(),
            exoplanets: star.exoplanets().to_vec(),
            description: star.description().map(str::to_string),
            portrait: spectral_class.portrait_path(),
        }
    }
}

/// Receiver of arrival notifications.
///
/// Called exactly once per completed flight, when settling begins.
pub trait OverlaySink {
    fn show(&mut self, report: &StarReport);
}

impl OverlaySink for Vec<StarReport> {
    fn show(&mut self, report: &StarReport) { self.push(report.clone()); }
}
