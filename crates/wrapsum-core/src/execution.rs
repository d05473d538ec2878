//! Execution engine for the summation
//!
//! Combines a [`SumPrimitives`] backend with an [`ExecutionStrategy`]. Partial
//! sums from parallel chunks are combined with wrapping addition, so every
//! strategy returns the same value as [`crate::sum::sum`].
//!
//! Like [`crate::sum`], this unit is excluded on 32-bit x86.

use crate::config::{ExecutionStrategy, SumConfig};
use crate::numeric::WrappingInt;
use crate::sum::{SumPrimitives, UnrolledBackend};
use crate::Result;
use std::marker::PhantomData;

/// Runs the summation according to a [`SumConfig`]
#[derive(Clone, Debug)]
pub struct SumEngine<T: WrappingInt, B: SumPrimitives<T> = UnrolledBackend> {
    backend: B,
    config: SumConfig,
    #[cfg(feature = "parallel")]
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
    _phantom: PhantomData<T>,
}

impl<T: WrappingInt, B: SumPrimitives<T>> SumEngine<T, B> {
    /// Create an engine, validating the config
    pub fn new(backend: B, config: SumConfig) -> Result<Self> {
        config.validate()?;
        if config.strategy == ExecutionStrategy::Parallel && !cfg!(feature = "parallel") {
            log::warn!("parallel summation requested without the `parallel` feature; running sequentially");
        }
        Ok(Self {
            backend,
            config,
            #[cfg(feature = "parallel")]
            thread_pool: None,
            _phantom: PhantomData,
        })
    }

    /// Create with a dedicated thread pool of `num_threads` workers
    #[cfg(feature = "parallel")]
    pub fn with_num_threads(backend: B, config: SumConfig, num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| crate::Error::Execution(format!("Failed to create thread pool: {e}")))?;

        let mut engine = Self::new(backend, config)?;
        engine.thread_pool = Some(std::sync::Arc::new(pool));
        Ok(engine)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &SumConfig {
        &self.config
    }

    /// Worker threads available to the parallel strategy
    pub fn num_threads(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            if let Some(pool) = &self.thread_pool {
                return pool.current_num_threads();
            }
            rayon::current_num_threads()
        }
        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }

    /// Strategy that will actually run for an input of `len` elements
    ///
    /// `Auto` goes parallel only when the engine has more than one worker.
    pub fn resolve_strategy(&self, len: usize) -> ExecutionStrategy {
        match self.config.strategy {
            ExecutionStrategy::Sequential => ExecutionStrategy::Sequential,
            ExecutionStrategy::Parallel => {
                if cfg!(feature = "parallel") {
                    ExecutionStrategy::Parallel
                } else {
                    ExecutionStrategy::Sequential
                }
            }
            ExecutionStrategy::Auto => {
                if cfg!(feature = "parallel")
                    && len >= self.config.parallel_threshold
                    && self.num_threads() > 1
                {
                    ExecutionStrategy::Parallel
                } else {
                    ExecutionStrategy::Sequential
                }
            }
        }
    }

    /// Wrapping sum of `values`
    pub fn sum(&self, values: &[T]) -> T {
        let strategy = self.resolve_strategy(values.len());
        log::trace!(
            "summing {} values with backend={} strategy={:?}",
            values.len(),
            self.backend.backend_name(),
            strategy
        );

        match strategy {
            ExecutionStrategy::Parallel => self.sum_parallel(values),
            _ => self.backend.sum(values),
        }
    }

    #[cfg(feature = "parallel")]
    fn sum_parallel(&self, values: &[T]) -> T {
        use rayon::prelude::*;

        let chunk_size = self.config.chunk_size;
        let run = || {
            values
                .par_chunks(chunk_size)
                .map(|chunk| self.backend.sum(chunk))
                .reduce(T::wrapping_zero, T::wrapping_accumulate)
        };

        if let Some(pool) = &self.thread_pool {
            pool.install(run)
        } else {
            run()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn sum_parallel(&self, values: &[T]) -> T {
        self.backend.sum(values)
    }
}

/// Engine over `i64` with the best backend and `config`
pub fn engine(config: SumConfig) -> Result<SumEngine<i64>> {
    let engine = SumEngine::new(crate::sum::best_available_backend(), config)?;
    log::debug!(
        "created sum engine: backend={} lanes={} strategy={:?} threads={}",
        SumPrimitives::<i64>::backend_name(engine.backend()),
        SumPrimitives::<i64>::lanes(engine.backend()),
        engine.config().strategy,
        engine.num_threads()
    );
    Ok(engine)
}

/// Engine with the default config
pub fn auto_engine() -> SumEngine<i64> {
    SumEngine {
        backend: crate::sum::best_available_backend(),
        config: SumConfig::default(),
        #[cfg(feature = "parallel")]
        thread_pool: None,
        _phantom: PhantomData,
    }
}
