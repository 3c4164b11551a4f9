//! Split/interleaved conversion layer
//!
//! The vectorized elementwise backend operates strictly on the split
//! representation: two equal-length real arrays holding real and imaginary
//! components. Callers hold interleaved buffers, so every operation here
//! deinterleaves on demand, applies the split primitive, and re-interleaves
//! the result. Split buffers are call-scoped scratch, never the buffer of
//! record.
//!
//! Operand length mismatches are caller contract violations and fatal.

use num_complex::Complex;
use num_traits::Float;

use crate::backend;
use crate::layout;
use crate::precision::Precision;

#[inline]
fn check_len(name: &str, a: usize, b: usize) {
    assert_eq!(a, b, "{}: operand lengths {} and {} differ", name, a, b);
}

/// Split N interleaved elements into their real and imaginary sequences.
pub fn deinterleave<T: Float + 'static>(x: &[Complex<T>], re: &mut [T], im: &mut [T]) {
    check_len("deinterleave", x.len(), re.len());
    check_len("deinterleave", x.len(), im.len());
    let n = x.len();
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let x = layout::complex_cast::<T, f32>(x);
            let re = layout::real_cast_mut::<T, f32>(re);
            let im = layout::real_cast_mut::<T, f32>(im);
            unsafe { backend.ctoz(x.as_ptr(), 1, re.as_mut_ptr(), im.as_mut_ptr(), 1, n) }
        }
        Precision::Double => {
            let x = layout::complex_cast::<T, f64>(x);
            let re = layout::real_cast_mut::<T, f64>(re);
            let im = layout::real_cast_mut::<T, f64>(im);
            unsafe { backend.ctoz_d(x.as_ptr(), 1, re.as_mut_ptr(), im.as_mut_ptr(), 1, n) }
        }
    }
}

/// Merge two equal-length real sequences back into interleaved elements.
pub fn interleave<T: Float + 'static>(re: &[T], im: &[T], out: &mut [Complex<T>]) {
    check_len("interleave", re.len(), im.len());
    check_len("interleave", re.len(), out.len());
    let n = out.len();
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let re = layout::real_cast::<T, f32>(re);
            let im = layout::real_cast::<T, f32>(im);
            let out = layout::complex_cast_mut::<T, f32>(out);
            unsafe { backend.ztoc(re.as_ptr(), im.as_ptr(), 1, out.as_mut_ptr(), 1, n) }
        }
        Precision::Double => {
            let re = layout::real_cast::<T, f64>(re);
            let im = layout::real_cast::<T, f64>(im);
            let out = layout::complex_cast_mut::<T, f64>(out);
            unsafe { backend.ztoc_d(re.as_ptr(), im.as_ptr(), 1, out.as_mut_ptr(), 1, n) }
        }
    }
}

/// Elementwise magnitude: out[i] = |x[i]|.
pub fn abs<T: Float + 'static>(x: &[Complex<T>], out: &mut [T]) {
    check_len("abs", x.len(), out.len());
    let n = x.len();
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let x = layout::complex_cast::<T, f32>(x);
            let out = layout::real_cast_mut::<T, f32>(out);
            let mut re = vec![0.0f32; n];
            let mut im = vec![0.0f32; n];
            unsafe {
                backend.ctoz(x.as_ptr(), 1, re.as_mut_ptr(), im.as_mut_ptr(), 1, n);
                backend.zvabs(re.as_ptr(), im.as_ptr(), 1, out.as_mut_ptr(), 1, n);
            }
        }
        Precision::Double => {
            let x = layout::complex_cast::<T, f64>(x);
            let out = layout::real_cast_mut::<T, f64>(out);
            let mut re = vec![0.0f64; n];
            let mut im = vec![0.0f64; n];
            unsafe {
                backend.ctoz_d(x.as_ptr(), 1, re.as_mut_ptr(), im.as_mut_ptr(), 1, n);
                backend.zvabs_d(re.as_ptr(), im.as_ptr(), 1, out.as_mut_ptr(), 1, n);
            }
        }
    }
}

/// Elementwise conjugate: out[i] = conj(x[i]).
pub fn conj<T: Float + 'static>(x: &[Complex<T>], out: &mut [Complex<T>]) {
    check_len("conj", x.len(), out.len());
    let n = x.len();
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let x = layout::complex_cast::<T, f32>(x);
            let out = layout::complex_cast_mut::<T, f32>(out);
            let mut xre = vec![0.0f32; n];
            let mut xim = vec![0.0f32; n];
            let mut cre = vec![0.0f32; n];
            let mut cim = vec![0.0f32; n];
            unsafe {
                backend.ctoz(x.as_ptr(), 1, xre.as_mut_ptr(), xim.as_mut_ptr(), 1, n);
                backend.zvconj(xre.as_ptr(), xim.as_ptr(), 1, cre.as_mut_ptr(), cim.as_mut_ptr(), 1, n);
                backend.ztoc(cre.as_ptr(), cim.as_ptr(), 1, out.as_mut_ptr(), 1, n);
            }
        }
        Precision::Double => {
            let x = layout::complex_cast::<T, f64>(x);
            let out = layout::complex_cast_mut::<T, f64>(out);
            let mut xre = vec![0.0f64; n];
            let mut xim = vec![0.0f64; n];
            let mut cre = vec![0.0f64; n];
            let mut cim = vec![0.0f64; n];
            unsafe {
                backend.ctoz_d(x.as_ptr(), 1, xre.as_mut_ptr(), xim.as_mut_ptr(), 1, n);
                backend.zvconj_d(xre.as_ptr(), xim.as_ptr(), 1, cre.as_mut_ptr(), cim.as_mut_ptr(), 1, n);
                backend.ztoc_d(cre.as_ptr(), cim.as_ptr(), 1, out.as_mut_ptr(), 1, n);
            }
        }
    }
}

/// Elementwise product: out[i] = u[i] * v[i].
pub fn mul<T: Float + 'static>(u: &[Complex<T>], v: &[Complex<T>], out: &mut [Complex<T>]) {
    check_len("mul", u.len(), v.len());
    check_len("mul", u.len(), out.len());
    let n = u.len();
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let u = layout::complex_cast::<T, f32>(u);
            let v = layout::complex_cast::<T, f32>(v);
            let out = layout::complex_cast_mut::<T, f32>(out);
            let mut ure = vec![0.0f32; n];
            let mut uim = vec![0.0f32; n];
            let mut vre = vec![0.0f32; n];
            let mut vim = vec![0.0f32; n];
            let mut cre = vec![0.0f32; n];
            let mut cim = vec![0.0f32; n];
            unsafe {
                backend.ctoz(u.as_ptr(), 1, ure.as_mut_ptr(), uim.as_mut_ptr(), 1, n);
                backend.ctoz(v.as_ptr(), 1, vre.as_mut_ptr(), vim.as_mut_ptr(), 1, n);
                backend.zvmul(
                    ure.as_ptr(),
                    uim.as_ptr(),
                    1,
                    vre.as_ptr(),
                    vim.as_ptr(),
                    1,
                    cre.as_mut_ptr(),
                    cim.as_mut_ptr(),
                    1,
                    n,
                );
                backend.ztoc(cre.as_ptr(), cim.as_ptr(), 1, out.as_mut_ptr(), 1, n);
            }
        }
        Precision::Double => {
            let u = layout::complex_cast::<T, f64>(u);
            let v = layout::complex_cast::<T, f64>(v);
            let out = layout::complex_cast_mut::<T, f64>(out);
            let mut ure = vec![0.0f64; n];
            let mut uim = vec![0.0f64; n];
            let mut vre = vec![0.0f64; n];
            let mut vim = vec![0.0f64; n];
            let mut cre = vec![0.0f64; n];
            let mut cim = vec![0.0f64; n];
            unsafe {
                backend.ctoz_d(u.as_ptr(), 1, ure.as_mut_ptr(), uim.as_mut_ptr(), 1, n);
                backend.ctoz_d(v.as_ptr(), 1, vre.as_mut_ptr(), vim.as_mut_ptr(), 1, n);
                backend.zvmul_d(
                    ure.as_ptr(),
                    uim.as_ptr(),
                    1,
                    vre.as_ptr(),
                    vim.as_ptr(),
                    1,
                    cre.as_mut_ptr(),
                    cim.as_mut_ptr(),
                    1,
                    n,
                );
                backend.ztoc_d(cre.as_ptr(), cim.as_ptr(), 1, out.as_mut_ptr(), 1, n);
            }
        }
    }
}

/// Elementwise quotient: out[i] = u[i] / v[i].
///
/// The backend's divide primitive takes the denominator first; the operands
/// are forwarded in that order, so the public meaning of (numerator,
/// denominator) never swaps.
pub fn div<T: Float + 'static>(u: &[Complex<T>], v: &[Complex<T>], out: &mut [Complex<T>]) {
    check_len("div", u.len(), v.len());
    check_len("div", u.len(), out.len());
    let n = u.len();
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let u = layout::complex_cast::<T, f32>(u);
            let v = layout::complex_cast::<T, f32>(v);
            let out = layout::complex_cast_mut::<T, f32>(out);
            let mut ure = vec![0.0f32; n];
            let mut uim = vec![0.0f32; n];
            let mut vre = vec![0.0f32; n];
            let mut vim = vec![0.0f32; n];
            let mut cre = vec![0.0f32; n];
            let mut cim = vec![0.0f32; n];
            unsafe {
                backend.ctoz(u.as_ptr(), 1, ure.as_mut_ptr(), uim.as_mut_ptr(), 1, n);
                backend.ctoz(v.as_ptr(), 1, vre.as_mut_ptr(), vim.as_mut_ptr(), 1, n);
                // v is the denominator and goes first.
                backend.zvdiv(
                    vre.as_ptr(),
                    vim.as_ptr(),
                    1,
                    ure.as_ptr(),
                    uim.as_ptr(),
                    1,
                    cre.as_mut_ptr(),
                    cim.as_mut_ptr(),
                    1,
                    n,
                );
                backend.ztoc(cre.as_ptr(), cim.as_ptr(), 1, out.as_mut_ptr(), 1, n);
            }
        }
        Precision::Double => {
            let u = layout::complex_cast::<T, f64>(u);
            let v = layout::complex_cast::<T, f64>(v);
            let out = layout::complex_cast_mut::<T, f64>(out);
            let mut ure = vec![0.0f64; n];
            let mut uim = vec![0.0f64; n];
            let mut vre = vec![0.0f64; n];
            let mut vim = vec![0.0f64; n];
            let mut cre = vec![0.0f64; n];
            let mut cim = vec![0.0f64; n];
            unsafe {
                backend.ctoz_d(u.as_ptr(), 1, ure.as_mut_ptr(), uim.as_mut_ptr(), 1, n);
                backend.ctoz_d(v.as_ptr(), 1, vre.as_mut_ptr(), vim.as_mut_ptr(), 1, n);
                backend.zvdiv_d(
                    vre.as_ptr(),
                    vim.as_ptr(),
                    1,
                    ure.as_ptr(),
                    uim.as_ptr(),
                    1,
                    cre.as_mut_ptr(),
                    cim.as_mut_ptr(),
                    1,
                    n,
                );
                backend.ztoc_d(cre.as_ptr(), cim.as_ptr(), 1, out.as_mut_ptr(), 1, n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    #[test]
    fn deinterleave_then_interleave_is_identity() {
        let x = [z(1.0, -2.0), z(0.5, 0.25), z(-3.0, 4.0)];
        let mut re = [0.0f64; 3];
        let mut im = [0.0f64; 3];
        deinterleave(&x, &mut re, &mut im);
        assert_eq!(re, [1.0, 0.5, -3.0]);
        assert_eq!(im, [-2.0, 0.25, 4.0]);

        let mut back = [z(0.0, 0.0); 3];
        interleave(&re, &im, &mut back);
        assert_eq!(back, x);
    }

    #[test]
    fn round_trip_single_precision() {
        let x = [
            Complex::new(1.0f32, 2.0),
            Complex::new(-0.5, 0.0),
            Complex::new(0.0, -7.5),
            Complex::new(3.25, 1.125),
        ];
        let mut re = [0.0f32; 4];
        let mut im = [0.0f32; 4];
        let mut back = [Complex::new(0.0f32, 0.0); 4];
        deinterleave(&x, &mut re, &mut im);
        interleave(&re, &im, &mut back);
        assert_eq!(back, x);
    }

    #[test]
    fn abs_is_elementwise_magnitude() {
        let x = [z(3.0, 4.0), z(0.0, -2.0)];
        let mut out = [0.0f64; 2];
        abs(&x, &mut out);
        assert!((out[0] - 5.0).abs() < 1e-14);
        assert!((out[1] - 2.0).abs() < 1e-14);
    }

    #[test]
    fn conj_twice_returns_original() {
        let x = [z(1.0, 2.0), z(-3.0, -4.0), z(0.0, 5.0)];
        let mut once = [z(0.0, 0.0); 3];
        let mut twice = [z(0.0, 0.0); 3];
        conj(&x, &mut once);
        assert_eq!(once[0], z(1.0, -2.0));
        conj(&once, &mut twice);
        assert_eq!(twice, x);
    }

    #[test]
    fn mul_matches_complex_product() {
        let u = [z(1.0, 2.0)];
        let v = [z(3.0, 4.0)];
        let mut out = [z(0.0, 0.0)];
        mul(&u, &v, &mut out);
        assert_eq!(out[0], z(-5.0, 10.0));
    }

    #[test]
    fn div_keeps_numerator_denominator_order() {
        // (4+0i) / (2+0i) must be 2, not 0.5.
        let u = [z(4.0, 0.0)];
        let v = [z(2.0, 0.0)];
        let mut out = [z(0.0, 0.0)];
        div(&u, &v, &mut out);
        assert_eq!(out[0], z(2.0, 0.0));
    }

    #[test]
    fn div_complex_values() {
        let u = [z(-5.0, 10.0)];
        let v = [z(3.0, 4.0)];
        let mut out = [z(0.0, 0.0)];
        div(&u, &v, &mut out);
        assert!((out[0] - z(1.0, 2.0)).norm() < 1e-14);
    }

    #[test]
    #[should_panic(expected = "operand lengths")]
    fn mismatched_lengths_are_fatal() {
        let u = [z(1.0, 0.0), z(2.0, 0.0)];
        let v = [z(1.0, 0.0)];
        let mut out = [z(0.0, 0.0); 2];
        mul(&u, &v, &mut out);
    }
}
