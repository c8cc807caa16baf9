pub trait FloatExt: Sized {
    /// `self == other`
    fn eq(self, other: Self) -> bool;

    /// Replaces `NaN` with positive infinity so that comparisons treat it as
    /// the worst possible value.
    fn nan_to_inf(self) -> Self;
}

macro_rules! impl_float_ext {
    ( $ty:ty ) => {
        impl FloatExt for $ty {
            fn eq(self, other: Self) -> bool {
                (self - other).abs() < <$ty>::EPSILON
            }

            fn nan_to_inf(self) -> Self {
                if self.is_nan() {
                    <$ty>::INFINITY
                } else {
                    self
                }
            }
        }
    };
}

impl_float_ext!(f32);
impl_float_ext!(f64);
