use crate::utils::math_helpers::{normalize_vector, vector_magnitude};

/// Row-major 3x3 matrix used for rotations, scales and inertia tensors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    pub m: [[f64; 3]; 3],
}

impl Default for Matrix3 {
    fn default() -> Self {
        Matrix3::identity()
    }
}

impl Matrix3 {
    pub fn identity() -> Self {
        Matrix3::from_diagonal((1.0, 1.0, 1.0))
    }

    pub fn zero() -> Self {
        Matrix3 { m: [[0.0; 3]; 3] }
    }

    /// Creates a diagonal matrix, e.g. a scale matrix or a body-local inertia tensor
    pub fn from_diagonal(diagonal: (f64, f64, f64)) -> Self {
        Matrix3 {
            m: [
                [diagonal.0, 0.0, 0.0],
                [0.0, diagonal.1, 0.0],
                [0.0, 0.0, diagonal.2],
            ],
        }
    }

    /// Creates a rotation matrix from axis-angle representation (Rodrigues' formula).
    ///
    /// The axis does not need to be normalized. A zero axis yields the identity.
    pub fn from_axis_angle(axis: (f64, f64, f64), angle: f64) -> Self {
        if vector_magnitude(axis) < 1e-10 {
            return Matrix3::identity();
        }
        let (x, y, z) = normalize_vector(axis);
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;

        Matrix3 {
            m: [
                [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
                [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
                [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
            ],
        }
    }

    pub fn diagonal(&self) -> (f64, f64, f64) {
        (self.m[0][0], self.m[1][1], self.m[2][2])
    }

    pub fn transpose(&self) -> Matrix3 {
        let mut result = Matrix3::zero();
        for (r, row) in self.m.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                result.m[c][r] = *value;
            }
        }
        result
    }

    /// Matrix product `self * other`
    pub fn multiply(&self, other: &Matrix3) -> Matrix3 {
        let mut result = Matrix3::zero();
        for r in 0..3 {
            for c in 0..3 {
                result.m[r][c] = (0..3).map(|k| self.m[r][k] * other.m[k][c]).sum();
            }
        }
        result
    }

    /// Applies the matrix to a column vector
    pub fn transform_vector(&self, v: (f64, f64, f64)) -> (f64, f64, f64) {
        let row = |r: usize| self.m[r][0] * v.0 + self.m[r][1] * v.1 + self.m[r][2] * v.2;
        (row(0), row(1), row(2))
    }

    pub fn scale(&self, scalar: f64) -> Matrix3 {
        let mut result = *self;
        result.m.iter_mut().flatten().for_each(|value| *value *= scalar);
        result
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the inverse, or `None` for a singular matrix
    pub fn inverse(&self) -> Option<Matrix3> {
        let det = self.determinant();
        if det.abs() < 1e-12 {
            return None;
        }
        let m = &self.m;
        let cofactor = |r0: usize, r1: usize, c0: usize, c1: usize| m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0];

        // Adjugate (transposed cofactor matrix) divided by the determinant
        let adjugate = Matrix3 {
            m: [
                [cofactor(1, 2, 1, 2), -cofactor(0, 2, 1, 2), cofactor(0, 1, 1, 2)],
                [-cofactor(1, 2, 0, 2), cofactor(0, 2, 0, 2), -cofactor(0, 1, 0, 2)],
                [cofactor(1, 2, 0, 1), -cofactor(0, 2, 0, 1), cofactor(0, 1, 0, 1)],
            ],
        };
        Some(adjugate.scale(1.0 / det))
    }

    /// Similarity transform `R * self * Rᵀ`, re-expressing a body-local tensor in world axes
    pub fn rotated_by(&self, rotation: &Matrix3) -> Matrix3 {
        rotation.multiply(self).multiply(&rotation.transpose())
    }

    /// Largest absolute component on the diagonal
    pub fn max_diagonal(&self) -> f64 {
        let (x, y, z) = self.diagonal();
        x.abs().max(y.abs()).max(z.abs())
    }
}
