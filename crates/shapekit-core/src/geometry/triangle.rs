use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{check_dimension, Measurable};
use crate::error::{GeometryError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    sides: [f64; 3],
}

impl Triangle {
    /// Builds a triangle from its three side lengths.
    ///
    /// Each side must be positive and finite, and the three together must
    /// satisfy the strict triangle inequality; degenerate (zero-area)
    /// triangles are rejected.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        let a = check_dimension("side a", a)?;
        let b = check_dimension("side b", b)?;
        let c = check_dimension("side c", c)?;
        if a + b <= c || b + c <= a || a + c <= b {
            return Err(GeometryError::TriangleInequality { a, b, c });
        }
        Ok(Self { sides: [a, b, c] })
    }

    pub fn sides(&self) -> [f64; 3] {
        self.sides
    }
}

impl Measurable for Triangle {
    fn area(&self) -> f64 {
        // Heron's formula
        let [a, b, c] = self.sides;
        let s = (a + b + c) / 2.0;
        (s * (s - a) * (s - b) * (s - c)).sqrt()
    }

    fn perimeter(&self) -> f64 {
        self.sides.iter().sum()
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for side in self.sides {
            state.write_u64(side.to_bits());
        }
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.sides;
        write!(f, "Triangle (sides {}, {}, {})", a, b, c)
    }
}
