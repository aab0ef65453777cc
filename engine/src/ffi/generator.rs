//! PyO3 wrapper for Mt64

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::checkpoint::RngSnapshot;
use crate::error::RngError;
use crate::rng::{Mt64 as RustMt64, DEFAULT_SEED};

fn to_py_err(err: RngError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for the Rust MT19937-64 generator
///
/// # Example (from Python)
///
/// ```python
/// from mt64_core_rs import Mt64
///
/// rng = Mt64(5489)
/// assert rng.next() == 14514284786278117030
///
/// saved = rng.snapshot_json()
/// resumed = Mt64.from_snapshot_json(saved)
/// assert rng.next() == resumed.next()
/// ```
#[pyclass(name = "Mt64")]
pub struct PyMt64 {
    inner: RustMt64,
}

#[pymethods]
impl PyMt64 {
    /// Create a generator; without a seed the default seed (5489) is used
    #[new]
    #[pyo3(signature = (seed = None))]
    fn new(seed: Option<u64>) -> Self {
        PyMt64 {
            inner: RustMt64::new(seed.unwrap_or(DEFAULT_SEED)),
        }
    }

    /// Create a generator from a key array
    ///
    /// Raises ValueError if the key is empty.
    #[staticmethod]
    fn from_key(key: Vec<u64>) -> PyResult<Self> {
        let inner = RustMt64::from_key(&key).map_err(to_py_err)?;
        Ok(PyMt64 { inner })
    }

    /// Restart the sequence for `seed`
    fn seed(&mut self, seed: u64) {
        self.inner.seed(seed);
    }

    /// Next 64-bit value
    fn next(&mut self) -> u64 {
        self.inner.next()
    }

    /// Float in [0.0, 1.0)
    fn next_f64(&mut self) -> f64 {
        self.inner.next_f64()
    }

    /// Integer in [min, max)
    ///
    /// Raises ValueError if min >= max.
    fn range(&mut self, min: i64, max: i64) -> PyResult<i64> {
        if min >= max {
            return Err(PyErr::new::<PyValueError, _>(format!(
                "min ({}) must be less than max ({})",
                min, max
            )));
        }
        Ok(self.inner.range(min, max))
    }

    /// Serialize the full state as JSON
    fn snapshot_json(&self) -> PyResult<String> {
        self.inner.snapshot().to_json().map_err(to_py_err)
    }

    /// Restore a generator saved with `snapshot_json`
    ///
    /// Raises ValueError on malformed or tampered snapshots.
    #[staticmethod]
    fn from_snapshot_json(json: &str) -> PyResult<Self> {
        let snapshot = RngSnapshot::from_json(json).map_err(to_py_err)?;
        let inner = RustMt64::restore(&snapshot).map_err(to_py_err)?;
        Ok(PyMt64 { inner })
    }

    fn __repr__(&self) -> String {
        format!("Mt64(index={})", self.inner.index())
    }
}
