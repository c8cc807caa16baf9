pub use self::hit_probability::{
    DiscIntegral, HitProbability, HitProbabilityFn, Movement, SquareApproximation,
};

mod hit_probability;
