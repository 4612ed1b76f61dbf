use core::ops::{Add, Mul, Sub};

use super::NativeFloat;

/// Trait defined over generic 2D points.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for evaluating curves, so that implementing it requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy
pub trait Point:
    Add<Output = Self> + Sub<Output = Self> + Mul<NativeFloat, Output = Self> + Copy + PartialEq + Default
{
    fn x(&self) -> NativeFloat;

    fn y(&self) -> NativeFloat;

    /// Returns the distance between the two Points self and other
    fn distance(&self, other: Self) -> NativeFloat {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        num_traits::Float::sqrt(dx * dx + dy * dy)
    }
}
