use super::FloatT;

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)
pub trait VectorMath {
    type T;

    /// Copy values from `src` to `self`
    fn copy_from(&mut self, src: &Self) -> &mut Self;

    /// Check if all elements are finite
    fn is_finite(&self) -> bool;

    /// Infinity norm.  Returns NaN if any element is NaN.
    fn norm_inf(&self) -> Self::T;
}

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn copy_from(&mut self, src: &[T]) -> &mut Self {
        self.copy_from_slice(src);
        self
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|x| x.is_finite())
    }

    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for v in self.iter().map(|v| v.abs()) {
            if v.is_nan() {
                return T::nan();
            }
            out = if v > out { v } else { out };
        }
        out
    }
}

#[test]
fn test_vecmath_basics() {
    let mut x = vec![1., -3., 2.];
    assert_eq!(x.norm_inf(), 3.);
    assert!(x.is_finite());

    let y = [0.5, -1., 2.];
    x.copy_from(&y);
    assert_eq!(x, y);

    x[1] = f64::NAN;
    assert!(!x.is_finite());
    assert!(x.norm_inf().is_nan());
}
