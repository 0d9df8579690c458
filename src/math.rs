use bevy::math::DVec2;

pub type Real = f64;

pub type Vector = DVec2;

#[inline(always)]
pub fn zero_vector() -> Vector {
    DVec2::ZERO
}

/// Exact zero check inverse (prevents NaN from division by zero)
#[inline(always)]
pub fn inv_exact(e: Real) -> Real {
    if e == 0.0 { 0.0 } else { 1.0 / e }
}
