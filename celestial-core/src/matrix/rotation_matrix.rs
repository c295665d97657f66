//! 3x3 matrices for rotating unit vectors between frames.
//!
//! Rotations compose by multiplication. To apply rotation A, then rotation
//! B, compute `B * A`: the rightmost matrix acts first on the vector. The
//! in-place `rotate_*` methods premultiply, so calling `rotate_z` and then
//! `rotate_y` on an identity builds `Ry * Rz`.
//!
//! # Conventions
//!
//! Rotations rotate the frame, not the vector. A positive rotation of 90°
//! about Z takes `[1, 0, 0]` to `[0, -1, 0]`:
//!
//! ```text
//! Rz(ψ) = | cos ψ   sin ψ  0 |      Ry(θ) = | cos θ  0  -sin θ |
//!         | -sin ψ  cos ψ  0 |              |   0    1    0    |
//!         |   0       0    1 |              | sin θ  0   cos θ |
//! ```
//!
//! Storage is row-major `[[f64; 3]; 3]`.
//!
//! ```
//! use celestial_core::RotationMatrix3;
//!
//! let mut m = RotationMatrix3::identity();
//! m.rotate_z(0.5);
//! let back = m * m.transpose();
//! assert!((back.get(0, 0) - 1.0).abs() < 1e-15);
//! ```

use std::fmt;
use std::ops::Mul;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Premultiplies by a rotation of `psi` radians about Z.
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = psi.sin_cos();

        let a00 = c * self.elements[0][0] + s * self.elements[1][0];
        let a01 = c * self.elements[0][1] + s * self.elements[1][1];
        let a02 = c * self.elements[0][2] + s * self.elements[1][2];
        let a10 = -s * self.elements[0][0] + c * self.elements[1][0];
        let a11 = -s * self.elements[0][1] + c * self.elements[1][1];
        let a12 = -s * self.elements[0][2] + c * self.elements[1][2];

        self.elements[0] = [a00, a01, a02];
        self.elements[1] = [a10, a11, a12];
    }

    /// Premultiplies by a rotation of `theta` radians about Y.
    pub fn rotate_y(&mut self, theta: f64) {
        let (s, c) = theta.sin_cos();

        let a00 = c * self.elements[0][0] - s * self.elements[2][0];
        let a01 = c * self.elements[0][1] - s * self.elements[2][1];
        let a02 = c * self.elements[0][2] - s * self.elements[2][2];
        let a20 = s * self.elements[0][0] + c * self.elements[2][0];
        let a21 = s * self.elements[0][1] + c * self.elements[2][1];
        let a22 = s * self.elements[0][2] + c * self.elements[2][2];

        self.elements[0] = [a00, a01, a02];
        self.elements[2] = [a20, a21, a22];
    }

    /// Premultiplies by `diag(-1, 1, 1)`, mirroring the X axis.
    ///
    /// Not a proper rotation: the determinant flips sign.
    pub fn flip_x(&mut self) {
        for cell in self.elements[0].iter_mut() {
            *cell = -*cell;
        }
    }

    pub fn transpose(&self) -> Self {
        let e = &self.elements;
        Self::from_array([
            [e[0][0], e[1][0], e[2][0]],
            [e[0][1], e[1][1], e[2][1]],
            [e[0][2], e[1][2], e[2][2]],
        ])
    }

    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    pub fn apply_to_vector(&self, vector: [f64; 3]) -> [f64; 3] {
        let e = &self.elements;
        [
            e[0][0] * vector[0] + e[0][1] * vector[1] + e[0][2] * vector[2],
            e[1][0] * vector[0] + e[1][1] * vector[1] + e[1][2] * vector[2],
            e[2][0] * vector[0] + e[2][1] * vector[1] + e[2][2] * vector[2],
        ]
    }

    pub fn determinant(&self) -> f64 {
        let e = &self.elements;
        e[0][0] * (e[1][1] * e[2][2] - e[1][2] * e[2][1])
            - e[0][1] * (e[1][0] * e[2][2] - e[1][2] * e[2][0])
            + e[0][2] * (e[1][0] * e[2][1] - e[1][1] * e[2][0])
    }
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<[f64; 3]> for RotationMatrix3 {
    type Output = [f64; 3];

    fn mul(self, rhs: [f64; 3]) -> [f64; 3] {
        self.apply_to_vector(rhs)
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.elements {
            writeln!(f, "[{:>12.9} {:>12.9} {:>12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
