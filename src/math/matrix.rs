use rand::distributions::Open01;
use rand::Rng;
use std::fmt;
use std::ops::Mul;

use crate::error::{Error, Result};

/// Immutable dense matrix stored as one contiguous row-major buffer.
///
/// Every transforming operation allocates a new matrix; no method mutates `self`.
/// Binary elementwise operations require identical shapes and `dot` requires
/// `self.cols() == other.rows()`; violations return `Error::DimensionMismatch`.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from a row-major buffer of exactly `rows * cols` values.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Matrix> {
        if data.len() != rows * cols {
            return Err(Error::InvalidShape(format!(
                "{rows}x{cols} matrix needs {} values, got {}",
                rows * cols,
                data.len()
            )));
        }
        Ok(Matrix { rows, cols, data })
    }

    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn ones(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![1.0; rows * cols],
        }
    }

    pub fn identity(n: usize) -> Matrix {
        let mut res = Matrix::zeros(n, n);
        for i in 0..n {
            res.data[i * n + i] = 1.0;
        }
        res
    }

    /// Entries drawn uniformly from the open interval (0, 1).
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let data = (0..rows * cols).map(|_| rng.sample::<f64, _>(Open01)).collect();
        Matrix { rows, cols, data }
    }

    pub fn column_vector(values: &[f64]) -> Matrix {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// Builds a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
            return Err(Error::InvalidShape(format!(
                "ragged rows: expected {cols} columns, found a row with {}",
                bad.len()
            )));
        }
        let n_rows = rows.len();
        Ok(Matrix {
            rows: n_rows,
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Panics if `(r, c)` is out of bounds, like slice indexing.
    pub fn get(&self, r: usize, c: usize) -> f64 {
        assert!(r < self.rows && c < self.cols, "index ({r}, {c}) out of bounds for {:?}", self.dims());
        self.data[r * self.cols + c]
    }

    /// Row-major view of the entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                res.data[c * self.rows + r] = self.data[r * self.cols + c];
            }
        }
        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| functor(x)).collect(),
        }
    }

    /// Combines two same-shape matrices entry by entry.
    pub fn zip_with<F>(&self, other: &Matrix, functor: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.zip_named("zip_with", other, functor)
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_named("add", other, |x, y| x + y)
    }

    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_named("sub", other, |x, y| x - y)
    }

    /// Element-wise (Hadamard) product.
    pub fn hadamard(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_named("hadamard", other, |x, y| x * y)
    }

    pub fn scale(&self, k: f64) -> Matrix {
        self.map(|x| k * x)
    }

    /// Matrix product `self · other`.
    pub fn dot(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(Error::mismatch("dot", self.dims(), other.dims()));
        }

        let mut res = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let lhs = self.data[i * self.cols + k];
                for j in 0..other.cols {
                    res.data[i * other.cols + j] += lhs * other.data[k * other.cols + j];
                }
            }
        }

        Ok(res)
    }

    /// Coordinate of the largest entry. Ties go to the first one in row-major
    /// order. `None` for an empty matrix or one holding only NaN.
    pub fn arg_max(&self) -> Option<(usize, usize)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &x) in self.data.iter().enumerate() {
            match best {
                Some((_, max)) if x <= max || x.is_nan() => {}
                None if x.is_nan() => {}
                _ => best = Some((i, x)),
            }
        }
        best.map(|(i, _)| (i / self.cols, i % self.cols))
    }

    /// Solves `self · x = rhs` for a square `self` and column vector `rhs`
    /// using Gaussian elimination with partial pivoting.
    pub fn solve(&self, rhs: &Matrix) -> Result<Matrix> {
        let n = self.rows;
        if self.cols != n {
            return Err(Error::mismatch("solve", self.dims(), self.dims()));
        }
        if rhs.rows != n || rhs.cols != 1 {
            return Err(Error::mismatch("solve", self.dims(), rhs.dims()));
        }

        let mut a = self.data.clone();
        let mut b = rhs.data.clone();

        for c in 0..n {
            let pivot = (c..n)
                .fold(c, |max, r| if a[r * n + c].abs() > a[max * n + c].abs() { r } else { max });
            if pivot != c {
                for k in 0..n {
                    a.swap(c * n + k, pivot * n + k);
                }
                b.swap(c, pivot);
            }

            if a[c * n + c] == 0.0 {
                return Err(Error::SingularMatrix);
            }

            for r in c + 1..n {
                let m = a[r * n + c] / a[c * n + c];
                b[r] -= b[c] * m;
                for k in c + 1..n {
                    a[r * n + k] -= a[c * n + k] * m;
                }
                a[r * n + c] = 0.0;
            }
        }

        let mut x = vec![0.0; n];
        for j in (0..n).rev() {
            let t: f64 = (j + 1..n).map(|k| a[j * n + k] * x[k]).sum();
            x[j] = (b[j] - t) / a[j * n + j];
        }

        Ok(Matrix::column_vector(&x))
    }

    fn zip_named<F>(&self, op: &'static str, other: &Matrix, functor: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.dims() != other.dims() {
            return Err(Error::mismatch(op, self.dims(), other.dims()));
        }
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&x, &y)| functor(x, y))
                .collect(),
        })
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

/// Same shape and bit-identical entries.
impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.dims() == other.dims()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(x, y)| x.to_bits() == y.to_bits())
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.max(1)) {
            for x in row {
                write!(f, "{x:9.4} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
