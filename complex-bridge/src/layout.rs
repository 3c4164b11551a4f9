//! Zero-copy layout bridging between complex and scalar views
//!
//! Native kernels expect an interleaved complex buffer to be addressable as
//! plain scalars: N complex elements are exactly 2N reals, real and imaginary
//! alternating. `num_complex::Complex<T>` is `#[repr(C)]` with fields
//! `re, im` in that order, so the reinterpretation is a pure type-level view
//! of the same bytes. All casts in the crate go through this module; nothing
//! else touches raw pointers for layout reasons.
//!
//! The precision casts (`complex_cast*`, `real_cast*`) additionally require
//! that the source and destination component types are the *same* type, as
//! established by a prior [`Precision`](crate::precision::Precision) branch.
//! Bridging mismatched precisions through them is rejected with a panic
//! before any pointer is formed.

use num_complex::Complex;
use std::any::TypeId;

/// View N interleaved complex elements as 2N scalars of the same precision.
#[inline]
pub fn complex_as_scalars<T>(x: &[Complex<T>]) -> &[T] {
    // Same allocation, same bytes: only the logical element shape changes.
    unsafe { std::slice::from_raw_parts(x.as_ptr() as *const T, x.len() * 2) }
}

/// Mutable variant of [`complex_as_scalars`].
#[inline]
pub fn complex_as_scalars_mut<T>(x: &mut [Complex<T>]) -> &mut [T] {
    unsafe { std::slice::from_raw_parts_mut(x.as_mut_ptr() as *mut T, x.len() * 2) }
}

/// View 2N scalars as N interleaved complex elements.
///
/// # Panics
/// Panics if the scalar count is odd.
#[inline]
pub fn scalars_as_complex<T>(x: &[T]) -> &[Complex<T>] {
    assert_eq!(x.len() % 2, 0, "scalar view of odd length {} cannot form complex elements", x.len());
    unsafe { std::slice::from_raw_parts(x.as_ptr() as *const Complex<T>, x.len() / 2) }
}

/// Mutable variant of [`scalars_as_complex`].
#[inline]
pub fn scalars_as_complex_mut<T>(x: &mut [T]) -> &mut [Complex<T>] {
    assert_eq!(x.len() % 2, 0, "scalar view of odd length {} cannot form complex elements", x.len());
    unsafe { std::slice::from_raw_parts_mut(x.as_mut_ptr() as *mut Complex<T>, x.len() / 2) }
}

#[inline]
fn assert_same_type<A: 'static, B: 'static>() {
    assert_eq!(
        TypeId::of::<A>(),
        TypeId::of::<B>(),
        "layout cast between distinct precisions"
    );
}

/// Reinterpret a complex slice from the generic component type to the
/// concrete one selected by the precision branch. `T` and `U` must be the
/// same type.
#[inline]
pub(crate) fn complex_cast<T: 'static, U: 'static>(x: &[Complex<T>]) -> &[Complex<U>] {
    assert_same_type::<T, U>();
    unsafe { std::slice::from_raw_parts(x.as_ptr() as *const Complex<U>, x.len()) }
}

/// Mutable variant of [`complex_cast`].
#[inline]
pub(crate) fn complex_cast_mut<T: 'static, U: 'static>(x: &mut [Complex<T>]) -> &mut [Complex<U>] {
    assert_same_type::<T, U>();
    unsafe { std::slice::from_raw_parts_mut(x.as_mut_ptr() as *mut Complex<U>, x.len()) }
}

/// Reinterpret a real slice from the generic component type to the concrete
/// one selected by the precision branch. `T` and `U` must be the same type.
#[inline]
pub(crate) fn real_cast<T: 'static, U: 'static>(x: &[T]) -> &[U] {
    assert_same_type::<T, U>();
    unsafe { std::slice::from_raw_parts(x.as_ptr() as *const U, x.len()) }
}

/// Mutable variant of [`real_cast`].
#[inline]
pub(crate) fn real_cast_mut<T: 'static, U: 'static>(x: &mut [T]) -> &mut [U] {
    assert_same_type::<T, U>();
    unsafe { std::slice::from_raw_parts_mut(x.as_mut_ptr() as *mut U, x.len()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_to_scalar_view_is_interleaved() {
        let x = [Complex::new(1.0f64, 2.0), Complex::new(3.0, 4.0)];
        let s = complex_as_scalars(&x);
        assert_eq!(s, &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn scalar_to_complex_view_pairs_up() {
        let s = [1.0f32, 2.0, 3.0, 4.0];
        let x = scalars_as_complex(&s);
        assert_eq!(x, &[Complex::new(1.0f32, 2.0), Complex::new(3.0, 4.0)]);
    }

    #[test]
    fn round_trip_preserves_bytes() {
        let x = [Complex::new(-0.0f64, f64::MIN_POSITIVE), Complex::new(1.5, -7.25)];
        let back = scalars_as_complex(complex_as_scalars(&x));
        for (a, b) in x.iter().zip(back) {
            assert_eq!(a.re.to_bits(), b.re.to_bits());
            assert_eq!(a.im.to_bits(), b.im.to_bits());
        }
    }

    #[test]
    fn mutation_through_scalar_view_lands_in_complex_elements() {
        let mut x = [Complex::new(0.0f32, 0.0); 2];
        {
            let s = complex_as_scalars_mut(&mut x);
            s[1] = 9.0;
            s[2] = 5.0;
        }
        assert_eq!(x[0], Complex::new(0.0, 9.0));
        assert_eq!(x[1], Complex::new(5.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "odd length")]
    fn odd_scalar_view_is_rejected() {
        let s = [1.0f64, 2.0, 3.0];
        let _ = scalars_as_complex(&s);
    }

    #[test]
    #[should_panic(expected = "distinct precisions")]
    fn mismatched_precision_cast_is_rejected() {
        let x = [Complex::new(1.0f32, 0.0)];
        let _ = complex_cast::<f32, f64>(&x);
    }
}
