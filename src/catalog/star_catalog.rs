use super::star_entity::StarEntity;
use crate::info;
use nalgebra::Vector3;
use serde::Deserialize;
use std::{collections::HashMap, fmt::Display, fs, path::Path, sync::Arc};

/// Star record exactly as it appears in the catalog file.
#[derive(Debug, Deserialize)]
struct StarRecord {
    name: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
    /// Kept as a raw value since catalogs occasionally carry non-string types.
    #[serde(rename = "type", default)]
    spectral_type: serde_json::Value,
    dist: Option<f64>,
    temperature: Option<f64>,
    radius: Option<f64>,
    luminosity: Option<f64>,
    mass: Option<f64>,
    #[serde(default)]
    exoplanets: Option<Vec<String>>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    InvalidRecord { index: usize, reason: String },
    DuplicateName(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "cannot read catalog: {e}"),
            CatalogError::Parse(e) => write!(f, "malformed catalog JSON: {e}"),
            CatalogError::InvalidRecord { index, reason } => write!(f, "record {index}: {reason}"),
            CatalogError::DuplicateName(name) => write!(f, "duplicate star name {name:?}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self { CatalogError::Io(value) }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self { CatalogError::Parse(value) }
}

/// In-memory, read-only star catalog.
#[derive(Debug, Default, Clone)]
pub struct StarCatalog {
    stars: Vec<Arc<StarEntity>>,
    by_name: HashMap<String, usize>,
}

impl StarCatalog {
    /// Scene units per catalog unit.
    pub const POSITION_SCALE: f64 = 30.0;

    /// Reads and validates a JSON catalog from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&raw)?;
        info!("Loaded {} stars from {}", catalog.len(), path.as_ref().display());
        Ok(catalog)
    }

    /// Parses and validates a JSON array of star records.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<StarRecord> = serde_json::from_str(raw)?;
        let stars = records
            .into_iter()
            .enumerate()
            .map(|(index, rec)| {
                Self::validate(rec)
                    .map_err(|reason| CatalogError::InvalidRecord { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_stars(stars)
    }

    /// Builds a catalog from already validated stars.
    pub fn from_stars(stars: Vec<StarEntity>) -> Result<Self, CatalogError> {
        let mut by_name = HashMap::with_capacity(stars.len());
        for (i, star) in stars.iter().enumerate() {
            if by_name.insert(star.name().to_string(), i).is_some() {
                return Err(CatalogError::DuplicateName(star.name().to_string()));
            }
        }
        Ok(Self { stars: stars.into_iter().map(Arc::new).collect(), by_name })
    }

    pub fn len(&self) -> usize { self.stars.len() }
    pub fn is_empty(&self) -> bool { self.stars.is_empty() }
    pub fn stars(&self) -> &[Arc<StarEntity>] { &self.stars }
    pub fn iter(&self) -> impl Iterator<Item = &Arc<StarEntity>> { self.stars.iter() }

    pub fn get(&self, name: &str) -> Option<Arc<StarEntity>> {
        self.by_name.get(name).map(|&i| Arc::clone(&self.stars[i]))
    }

    fn validate(rec: StarRecord) -> Result<StarEntity, String> {
        let name = rec
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| String::from("missing name"))?;
        let coord = |v: Option<f64>, axis: &str| {
            v.filter(|c| c.is_finite())
                .ok_or_else(|| format!("{name}: missing or non-finite {axis} coordinate"))
        };
        let position = Vector3::new(coord(rec.x, "x")?, coord(rec.y, "y")?, coord(rec.z, "z")?)
            * Self::POSITION_SCALE;
        let physical = |v: Option<f64>, field: &str| {
            v.filter(|p| p.is_finite() && *p >= 0.0)
                .ok_or_else(|| format!("{name}: missing or invalid {field}"))
        };
        let distance_ly = physical(rec.dist, "dist")?;
        let temperature = physical(rec.temperature, "temperature")?;
        let radius = physical(rec.radius, "radius")?;
        let luminosity = physical(rec.luminosity, "luminosity")?;
        let mass = physical(rec.mass, "mass")?;
        let spectral_type = rec.spectral_type.as_str().map(str::to_string);
        let exoplanets = rec
            .exoplanets
            .unwrap_or_default()
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        Ok(StarEntity::new(
            name,
            position,
            spectral_type,
            distance_ly,
            temperature,
            radius,
            luminosity,
            mass,
        )
        .with_exoplanets(exoplanets)
        .with_description(rec.description))
    }
}
