use super::overlay_sink::{OverlaySink, StarReport};
use crate::info;
use std::fmt::Write;

/// Renders the text info card of a star. Sections without data are omitted.
pub fn render_card(report: &StarReport) -> String {
    let mut card = String::new();
    let spectral_type = report.spectral_type.as_deref().unwrap_or("unknown type");
    // writing into a String cannot fail
    let _ = writeln!(card, "{}", report.name);
    let _ = writeln!(card, "[portrait: {}]", report.portrait);
    let _ = writeln!(card, "{spectral_type} • {:.2} ly away", report.distance);
    let _ = writeln!(card);
    let _ = writeln!(card, "Stellar Data");
    let _ = writeln!(card, "Temp: {} K", report.temperature);
    let _ = writeln!(card, "Radius: {} R☉", report.radius);
    let _ = writeln!(card, "Luminosity: {} L☉", report.luminosity);
    let _ = writeln!(card, "Mass: {} M☉", report.mass);
    if !report.exoplanets.is_empty() {
        let _ = writeln!(card);
        let _ = writeln!(card, "Exoplanets: {}", report.exoplanets.join(", "));
    }
    if let Some(description) = &report.description {
        let _ = writeln!(card);
        let _ = writeln!(card, "About:");
        let _ = writeln!(card, "{description}");
    }
    card
}

/// Overlay sink printing info cards to the log.
#[derive(Debug, Default)]
pub struct ConsoleOverlay {
    shown: usize,
    last: Option<StarReport>,
}

impl ConsoleOverlay {
    pub fn new() -> Self { Self::default() }
    /// Number of cards shown so far.
    pub fn shown(&self) -> usize { self.shown }
    pub fn last(&self) -> Option<&StarReport> { self.last.as_ref() }
}

impl OverlaySink for ConsoleOverlay {
    fn show(&mut self, report: &StarReport) {
        self.shown += 1;
        info!("Arrived at {}:\n{}", report.name, render_card(report));
        self.last = Some(report.clone());
    }
}
