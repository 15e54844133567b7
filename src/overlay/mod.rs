//! Sink side of navigation: the star report handed over on arrival and the
//! text info card rendering it.

mod info_card;
mod overlay_sink;
#[cfg(test)]
mod tests;

pub use info_card::{ConsoleOverlay, render_card};
pub use overlay_sink::{OverlaySink, StarReport};
