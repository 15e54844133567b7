use num::traits::Float;

/// Quintic ease-out timing curve, `1 - (1 - x)^5`.
///
/// Starts fast and decelerates smoothly into the end. Input is clamped to
/// `[0, 1]` so the result never leaves that range.
///
/// # Arguments
/// - `x`: Linear progress.
///
/// # Returns
/// - Eased progress in `[0, 1]`, monotonically non-decreasing in `x`.
pub fn ease_out_quint<T: Float>(x: T) -> T {
    let x = clamp_unit(x);
    T::one() - (T::one() - x).powi(5)
}

/// Clamps a value to `[0, 1]`; `NaN` maps to `0`.
pub fn clamp_unit<T: Float>(x: T) -> T {
    if x.is_nan() { T::zero() } else { x.max(T::zero()).min(T::one()) }
}

/// Converts a per-frame lerp fraction into the fraction for an arbitrary time step.
///
/// Applying the result once over `dt_secs` closes the same share of the gap as
/// applying `per_frame` once per frame at `reference_hz`, independent of the
/// actual frame rate.
///
/// # Arguments
/// - `per_frame`: Fraction of the remaining distance closed per reference frame.
/// - `reference_hz`: Frame rate `per_frame` was tuned at.
/// - `dt_secs`: Elapsed seconds of the current step.
///
/// # Returns
/// - The lerp fraction for this step, in `[0, 1]`.
pub fn frame_independent_alpha<T: Float>(per_frame: T, reference_hz: T, dt_secs: T) -> T {
    let per_frame = clamp_unit(per_frame);
    if dt_secs <= T::zero() {
        return T::zero();
    }
    clamp_unit(T::one() - (T::one() - per_frame).powf(dt_secs * reference_hz))
}
