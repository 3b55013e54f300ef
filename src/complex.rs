use std::{cmp::Ordering, fmt};

use ordered_float::OrderedFloat;

/// A complex number ordered by its distance from the origin.
///
/// Equality compares the exact components. Numbers of equal magnitude are
/// ordered by their components so that `Ord` agrees with `Eq`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Complex {
    real: OrderedFloat<f64>,
    imag: OrderedFloat<f64>,
}

impl Complex {
    #[must_use]
    pub fn new(real: f64, imag: f64) -> Complex {
        Complex {
            real: OrderedFloat(real),
            imag: OrderedFloat(imag),
        }
    }

    #[must_use]
    pub fn real(&self) -> f64 {
        self.real.into_inner()
    }

    #[must_use]
    pub fn imag(&self) -> f64 {
        self.imag.into_inner()
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real().hypot(self.imag())
    }
}

impl Ord for Complex {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.magnitude())
            .cmp(&OrderedFloat(other.magnitude()))
            .then_with(|| (self.real, self.imag).cmp(&(other.real, other.imag)))
    }
}

impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, imag): (f64, f64)) -> Self {
        Complex::new(real, imag)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} + {}i)", self.real, self.imag)
    }
}
