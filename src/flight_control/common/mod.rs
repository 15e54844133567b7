pub(crate) mod curve;
pub(crate) mod math;

pub use curve::CatmullRomCurve;
pub use math::{ease_out_quint, frame_independent_alpha};
