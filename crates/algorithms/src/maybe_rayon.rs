//! Compatibility layer for rayon/sequential execution.
//!
//! When the `parallel` feature is enabled, this re-exports rayon's parallel iterators.
//! When disabled (`--no-default-features`), it provides sequential fallbacks that
//! implement the same API surface used by our algorithms.
#[cfg(feature = "parallel")]
pub use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
mod sequential {
    /// Sequential stand-in for `rayon::prelude::ParallelSliceMut`.
    ///
    /// Calls `chunks_mut()` instead of `par_chunks_mut()`, so the rest of the
    /// chain (`.for_each()`, `.enumerate()`, etc.) resolves to the standard
    /// `Iterator` methods.
    pub trait ParallelSliceMut<T> {
        fn par_chunks_mut(&mut self, chunk_size: usize) -> std::slice::ChunksMut<'_, T>;
    }

    impl<T> ParallelSliceMut<T> for [T] {
        fn par_chunks_mut(&mut self, chunk_size: usize) -> std::slice::ChunksMut<'_, T> {
            self.chunks_mut(chunk_size)
        }
    }
}

#[cfg(not(feature = "parallel"))]
pub use sequential::*;
