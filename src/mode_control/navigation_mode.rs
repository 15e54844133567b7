use std::collections::HashSet;
use std::sync::LazyLock;
use strum_macros::{Display, EnumIter};

/// Mode of the single navigation session.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumIter)]
pub enum NavigationMode {
    /// Free orbit control, picks accepted.
    Idle,
    /// Camera travels along the flight path, picks dropped.
    Flying,
    /// Camera rotates to face the arrived-at star, picks dropped.
    Settling,
}

impl NavigationMode {
    /// Whether new picks may start a flight in this mode.
    pub fn accepts_picks(self) -> bool { self == NavigationMode::Idle }

    /// Whether the free orbit controls drive the camera in this mode.
    pub fn orbit_control_active(self) -> bool { self == NavigationMode::Idle }

    /// Whether `self -> next` belongs to the regular navigation cycle.
    pub fn can_transition_to(self, next: NavigationMode) -> bool {
        REGULAR_TRANSITIONS.contains(&(self, next))
    }

    /// Whether `self -> next` is allowed at all, including aborts back to `Idle`.
    pub fn can_abort_to(self, next: NavigationMode) -> bool {
        self.can_transition_to(next) || (next == NavigationMode::Idle && self != NavigationMode::Idle)
    }
}

impl From<&str> for NavigationMode {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "flying" => NavigationMode::Flying,
            "settling" => NavigationMode::Settling,
            _ => NavigationMode::Idle,
        }
    }
}

impl From<NavigationMode> for &'static str {
    fn from(value: NavigationMode) -> Self {
        match value {
            NavigationMode::Idle => "idle",
            NavigationMode::Flying => "flying",
            NavigationMode::Settling => "settling",
        }
    }
}

/// The navigation cycle `Idle -> Flying -> Settling -> Idle`.
pub static REGULAR_TRANSITIONS: LazyLock<HashSet<(NavigationMode, NavigationMode)>> =
    LazyLock::new(|| {
        let mut lookup = HashSet::new();
        let transitions = vec![
            (NavigationMode::Idle, NavigationMode::Flying),
            (NavigationMode::Flying, NavigationMode::Settling),
            (NavigationMode::Settling, NavigationMode::Idle),
        ];
        for edge in transitions {
            lookup.insert(edge);
        }
        lookup
    });
