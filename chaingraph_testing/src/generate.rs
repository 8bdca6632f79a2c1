//! Random data generation for dictionary and graph tests.
use rand::distr::Alphanumeric;
use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Capability to produce random values of the implementing type.
pub trait Generate<R: Rng>: Sized {
    /// Type-specific generation parameters.
    type GenerateParams: Default;

    /// Generates one random value.
    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self;

    /// Generates `size` pairwise-distinct random values.
    fn generate_many(rng: &mut R, params: &Self::GenerateParams, size: usize) -> Box<[Self]>
    where
        Self: Hash + Eq,
    {
        let mut seen = HashSet::with_capacity(size);
        while seen.len() < size {
            seen.insert(Self::generate(rng, params));
        }
        seen.into_iter().collect()
    }
}

/// Inclusive range parameters for the numeric [`Generate`] implementations.
pub struct NumParams<T> {
    min: T,
    max: T,
}

impl<T> NumParams<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

macro_rules! impl_generate_num {
    ($($type:ty),*) => {
        $(
            impl Default for NumParams<$type> {
                fn default() -> Self {
                    Self { min: <$type>::MIN, max: <$type>::MAX }
                }
            }

            impl<R: Rng> Generate<R> for $type {
                type GenerateParams = NumParams<$type>;

                fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
                    rng.random_range(params.min..=params.max)
                }
            }
        )*
    };
}

// `isize` is left out: `rand` bounds `random_range` on `SampleUniform`, which it
// implements for the fixed-width integers and `usize` only.
impl_generate_num!(u8, i8, u16, i16, u32, i32, u64, i64, usize);

/// Length parameters for the alphanumeric string [`Generate`] implementation.
pub struct StringParams {
    min_length: usize,
    max_length: usize,
}

impl StringParams {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }
}

impl Default for StringParams {
    fn default() -> Self {
        // Dictionary keys in the wild are short; long strings only slow the suite down.
        Self {
            min_length: 1,
            max_length: 24,
        }
    }
}

impl<R: Rng> Generate<R> for String {
    type GenerateParams = StringParams;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        let length = rng.random_range(params.min_length..=params.max_length);
        rng.sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}
