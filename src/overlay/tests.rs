use super::{ConsoleOverlay, OverlaySink, StarReport, render_card};
use crate::catalog::{SpectralClass, StarEntity};
use nalgebra::Vector3;

fn proxima() -> StarEntity {
    StarEntity::new(
        "Proxima Centauri",
        Vector3::new(3.0, 6.0, -9.0),
        Some(String::from("M5.5Ve")),
        4.2467,
        3042.0,
        0.154,
        0.0017,
        0.122,
    )
    .with_exoplanets(vec![String::from("Proxima b"), String::from("Proxima d")])
    .with_description(Some(String::from("Closest known star to the Sun.")))
}

#[test]
fn test_report_carries_all_attributes() {
    let report = StarReport::from(&proxima());
    assert_eq!(report.name, "Proxima Centauri");
    assert_eq!(report.spectral_type.as_deref(), Some("M5.5Ve"));
    assert_eq!(report.spectral_class, SpectralClass::M);
    assert_eq!(report.portrait, "star_images/M.png");
    assert_eq!(report.exoplanets.len(), 2);
    assert_eq!(report.description.as_deref(), Some("Closest known star to the Sun."));
}

#[test]
fn test_card_contains_every_section() {
    let card = render_card(&StarReport::from(&proxima()));
    assert!(card.starts_with("Proxima Centauri\n"));
    assert!(card.contains("M5.5Ve • 4.25 ly away"));
    assert!(card.contains("Temp: 3042 K"));
    assert!(card.contains("Mass: 0.122 M☉"));
    assert!(card.contains("Exoplanets: Proxima b, Proxima d"));
    assert!(card.contains("About:\nClosest known star to the Sun."));
}

#[test]
fn test_card_omits_absent_sections() {
    let bare = StarEntity::new("Lonely", Vector3::zeros(), None, 12.0, 5000.0, 1.0, 1.0, 1.0)
        .with_description(Some(String::from("   ")));
    let report = StarReport::from(&bare);
    assert_eq!(report.spectral_class, SpectralClass::G);
    assert_eq!(report.description, None);
    let card = render_card(&report);
    assert!(!card.contains("Exoplanets"));
    assert!(!card.contains("About"));
    assert!(card.contains("unknown type • 12.00 ly away"));
    assert!(card.contains("[portrait: star_images/G.png]"));
}

#[test]
fn test_console_overlay_counts_cards() {
    let mut overlay = ConsoleOverlay::new();
    assert_eq!(overlay.shown(), 0);
    overlay.show(&StarReport::from(&proxima()));
    assert_eq!(overlay.shown(), 1);
    assert_eq!(overlay.last().map(|r| r.name.as_str()), Some("Proxima Centauri"));

    let mut recorded: Vec<StarReport> = Vec::new();
    recorded.show(&StarReport::from(&proxima()));
    assert_eq!(recorded.len(), 1);
}
