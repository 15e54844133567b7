use std::collections::HashMap;
use std::sync::LazyLock;
use strum_macros::{Display, EnumIter};

/// Canonical spectral classes used for styling and portraits.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumIter)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    WD,
}

/// Visual parameters of a spectral class: display sphere radius and RGB colour.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct StarStyle {
    radius: f64,
    color: u32,
}

impl StarStyle {
    const fn new(radius: f64, color: u32) -> Self { Self { radius, color } }
    pub const fn radius(&self) -> f64 { self.radius }
    pub const fn color(&self) -> u32 { self.color }
    /// Colour split into `[r, g, b]` bytes.
    pub const fn rgb(&self) -> [u8; 3] {
        let [_, r, g, b] = self.color.to_be_bytes();
        [r, g, b]
    }
}

static STYLE_LOOKUP: LazyLock<HashMap<SpectralClass, StarStyle>> = LazyLock::new(|| {
    let mut lookup = HashMap::new();
    let styles = vec![
        (SpectralClass::O, StarStyle::new(2.4, 0x8b_b3ff)),
        (SpectralClass::B, StarStyle::new(1.7, 0xa3_c6ff)),
        (SpectralClass::A, StarStyle::new(1.3, 0xcf_e6ff)),
        (SpectralClass::F, StarStyle::new(1.0, 0xf6_fff8)),
        (SpectralClass::G, StarStyle::new(0.8, 0xff_f3b0)),
        (SpectralClass::K, StarStyle::new(0.6, 0xff_b380)),
        (SpectralClass::M, StarStyle::new(0.4, 0xff_7b7b)),
        (SpectralClass::WD, StarStyle::new(0.25, 0xff_ffff)),
    ];
    for (class, style) in styles {
        lookup.insert(class, style);
    }
    lookup
});

impl SpectralClass {
    const DEFAULT: SpectralClass = SpectralClass::G;
    const PORTRAIT_DIR: &'static str = "star_images";
    const MIN_GLOW: f64 = 0.4;
    const MAX_GLOW: f64 = 3.0;
    const GLOW_DISTANCE: f64 = 12.0;

    pub fn style(self) -> StarStyle { STYLE_LOOKUP[&self] }

    /// Relative path of the portrait image shown on the info card.
    pub fn portrait_path(self) -> String { format!("{}/{self}.png", Self::PORTRAIT_DIR) }

    /// Portrait used when a class specific image cannot be shown.
    pub fn fallback_portrait_path() -> String { Self::DEFAULT.portrait_path() }

    /// Emissive intensity of a star seen from `distance` scene units away.
    pub fn glow_intensity(distance: f64) -> f64 {
        if distance <= 0.0 || distance.is_nan() {
            return Self::MAX_GLOW;
        }
        (Self::GLOW_DISTANCE / distance).clamp(Self::MIN_GLOW, Self::MAX_GLOW)
    }
}

/// Maps a free-form spectral type to its canonical class.
///
/// Matching is case-insensitive. White dwarfs are recognised by the substring
/// `WHITE DWARF` or the prefixes `WD`, `DA` and `DB`; otherwise the leading
/// letter decides. Missing, empty or unrecognised input resolves to `G`.
pub fn classify(spectral_type: Option<&str>) -> SpectralClass {
    let Some(raw) = spectral_type else {
        return SpectralClass::DEFAULT;
    };
    let up = raw.to_uppercase();
    if up.contains("WHITE DWARF") || up.starts_with("WD") || up.starts_with("DA") || up.starts_with("DB") {
        return SpectralClass::WD;
    }
    match up.chars().next() {
        Some('O') => SpectralClass::O,
        Some('B') => SpectralClass::B,
        Some('A') => SpectralClass::A,
        Some('F') => SpectralClass::F,
        Some('G') => SpectralClass::G,
        Some('K') => SpectralClass::K,
        Some('M') => SpectralClass::M,
        _ => SpectralClass::DEFAULT,
    }
}

impl From<&str> for SpectralClass {
    fn from(value: &str) -> Self { classify(Some(value)) }
}

impl From<Option<&str>> for SpectralClass {
    fn from(value: Option<&str>) -> Self { classify(value) }
}
