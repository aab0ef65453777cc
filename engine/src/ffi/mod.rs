//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings for exposing the generator to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: `seed`, `next` and a few thin wrappers
//! 2. **Simple types**: ints, floats and JSON strings at the boundary
//! 3. **Safe errors**: every `RngError` becomes a Python `ValueError`
//! 4. **No references**: Python owns its generator; snapshots are copies

pub mod generator;
