//! Precision-agnostic vector/matrix kernels
//!
//! One public entry point per backend kernel. Every operation resolves the
//! precision of its buffers once, reinterprets them through the layout
//! bridge, and forwards to the corresponding native entry point; there is no
//! numeric logic here beyond parameter marshaling, with one exception: the
//! infinity-norm argmax, a policy the backend does not provide, built from
//! two real argmax calls over the bridged scalar view.
//!
//! Counts, strides and leading dimensions mirror the native calling
//! convention. Slices must cover the strided span they describe; a
//! too-short slice is a caller bug and panics.

use num_complex::Complex;
use num_traits::Float;

use crate::backend::{self, Order, Transpose};
use crate::layout;
use crate::precision::{value_cast, Precision};

#[inline]
fn span(n: usize, inc: usize) -> usize {
    if n == 0 {
        0
    } else {
        (n - 1) * inc + 1
    }
}

#[inline]
fn mat_len(order: Order, rows: usize, cols: usize, ld: usize) -> usize {
    if rows == 0 || cols == 0 {
        return 0;
    }
    match order {
        Order::ColMajor => (cols - 1) * ld + rows,
        Order::RowMajor => (rows - 1) * ld + cols,
    }
}

#[inline]
fn as_i32(v: usize) -> i32 {
    assert!(v <= i32::MAX as usize, "dimension {} too large for the native LP64 interface", v);
    v as i32
}

#[inline]
fn check_vec<T>(name: &str, x: &[Complex<T>], n: usize, inc: usize) {
    assert!(inc > 0, "{}: stride must be positive", name);
    assert!(
        x.len() >= span(n, inc),
        "{}: buffer of {} elements cannot hold {} strided by {}",
        name,
        x.len(),
        n,
        inc
    );
}

#[inline]
fn check_mat<T>(name: &str, a: &[Complex<T>], order: Order, rows: usize, cols: usize, ld: usize) {
    let min_ld = match order {
        Order::ColMajor => rows,
        Order::RowMajor => cols,
    };
    assert!(ld >= min_ld.max(1), "{}: leading dimension {} below {}", name, ld, min_ld.max(1));
    assert!(
        a.len() >= mat_len(order, rows, cols, ld),
        "{}: buffer of {} elements cannot hold a {}x{} matrix with leading dimension {}",
        name,
        a.len(),
        rows,
        cols,
        ld
    );
}

/// Sum of |re| + |im| magnitudes over a strided vector.
pub fn asum<T: Float + 'static>(n: usize, x: &[Complex<T>], incx: usize) -> T {
    check_vec("asum", x, n, incx);
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let x = layout::complex_cast::<T, f32>(x);
            let r = unsafe { backend.scasum(as_i32(n), x.as_ptr(), as_i32(incx)) };
            value_cast::<f32, T>(r)
        }
        Precision::Double => {
            let x = layout::complex_cast::<T, f64>(x);
            let r = unsafe { backend.dzasum(as_i32(n), x.as_ptr(), as_i32(incx)) };
            value_cast::<f64, T>(r)
        }
    }
}

/// Euclidean norm of a strided vector.
pub fn nrm2<T: Float + 'static>(n: usize, x: &[Complex<T>], incx: usize) -> T {
    check_vec("nrm2", x, n, incx);
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let x = layout::complex_cast::<T, f32>(x);
            let r = unsafe { backend.scnrm2(as_i32(n), x.as_ptr(), as_i32(incx)) };
            value_cast::<f32, T>(r)
        }
        Precision::Double => {
            let x = layout::complex_cast::<T, f64>(x);
            let r = unsafe { backend.dznrm2(as_i32(n), x.as_ptr(), as_i32(incx)) };
            value_cast::<f64, T>(r)
        }
    }
}

/// X <- alpha X, in place.
pub fn scal<T: Float + 'static>(n: usize, alpha: Complex<T>, x: &mut [Complex<T>], incx: usize) {
    check_vec("scal", x, n, incx);
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let x = layout::complex_cast_mut::<T, f32>(x);
            unsafe { backend.cscal(as_i32(n), value_cast(alpha), x.as_mut_ptr(), as_i32(incx)) }
        }
        Precision::Double => {
            let x = layout::complex_cast_mut::<T, f64>(x);
            unsafe { backend.zscal(as_i32(n), value_cast(alpha), x.as_mut_ptr(), as_i32(incx)) }
        }
    }
}

/// Y <- alpha X + beta Y, in place. `beta == 0` overwrites Y without reading it.
pub fn axpby<T: Float + 'static>(
    n: usize,
    alpha: Complex<T>,
    x: &[Complex<T>],
    incx: usize,
    beta: Complex<T>,
    y: &mut [Complex<T>],
    incy: usize,
) {
    check_vec("axpby", x, n, incx);
    check_vec("axpby", y, n, incy);
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let x = layout::complex_cast::<T, f32>(x);
            let y = layout::complex_cast_mut::<T, f32>(y);
            unsafe {
                backend.caxpby(
                    as_i32(n),
                    value_cast(alpha),
                    x.as_ptr(),
                    as_i32(incx),
                    value_cast(beta),
                    y.as_mut_ptr(),
                    as_i32(incy),
                )
            }
        }
        Precision::Double => {
            let x = layout::complex_cast::<T, f64>(x);
            let y = layout::complex_cast_mut::<T, f64>(y);
            unsafe {
                backend.zaxpby(
                    as_i32(n),
                    value_cast(alpha),
                    x.as_ptr(),
                    as_i32(incx),
                    value_cast(beta),
                    y.as_mut_ptr(),
                    as_i32(incy),
                )
            }
        }
    }
}

/// Zero-based index of the element maximizing |re| + |im|.
pub fn iamax<T: Float + 'static>(n: usize, x: &[Complex<T>], incx: usize) -> usize {
    check_vec("iamax", x, n, incx);
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let x = layout::complex_cast::<T, f32>(x);
            unsafe { backend.icamax(as_i32(n), x.as_ptr(), as_i32(incx)) }
        }
        Precision::Double => {
            let x = layout::complex_cast::<T, f64>(x);
            unsafe { backend.izamax(as_i32(n), x.as_ptr(), as_i32(incx)) }
        }
    }
}

/// Zero-based index of the element maximizing the Chebyshev magnitude
/// max(|re|, |im|).
///
/// The backend has no such kernel; it is composed from two real argmax
/// calls through the layout bridge, treating the real components and the
/// imaginary components as separate real vectors of doubled stride. When
/// the two maxima are exactly equal, the smaller index wins; otherwise the
/// index belonging to the larger maximum is returned.
pub fn iamax_inf<T: Float + 'static>(n: usize, x: &[Complex<T>], incx: usize) -> usize {
    check_vec("iamax_inf", x, n, incx);
    if n == 0 {
        return 0;
    }
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let xs = layout::complex_as_scalars(layout::complex_cast::<T, f32>(x));
            iamax_inf_impl(xs, n, incx, |n, p, inc| unsafe { backend.isamax(n, p, inc) })
        }
        Precision::Double => {
            let xs = layout::complex_as_scalars(layout::complex_cast::<T, f64>(x));
            iamax_inf_impl(xs, n, incx, |n, p, inc| unsafe { backend.idamax(n, p, inc) })
        }
    }
}

fn iamax_inf_impl<F: Float>(
    xs: &[F],
    n: usize,
    incx: usize,
    argmax: impl Fn(i32, *const F, i32) -> usize,
) -> usize {
    let real_stride = as_i32(2 * incx);
    let i_re = argmax(as_i32(n), xs.as_ptr(), real_stride);
    let i_im = argmax(as_i32(n), unsafe { xs.as_ptr().add(1) }, real_stride);
    let max_re = xs[2 * i_re * incx].abs();
    let max_im = xs[2 * i_im * incx + 1].abs();
    if max_re == max_im {
        i_re.min(i_im)
    } else if max_re > max_im {
        i_re
    } else {
        i_im
    }
}

/// Unconjugated dot product: sum X[i] * Y[i].
pub fn dotu<T: Float + 'static>(
    n: usize,
    x: &[Complex<T>],
    incx: usize,
    y: &[Complex<T>],
    incy: usize,
) -> Complex<T> {
    check_vec("dotu", x, n, incx);
    check_vec("dotu", y, n, incy);
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let x = layout::complex_cast::<T, f32>(x);
            let y = layout::complex_cast::<T, f32>(y);
            let r =
                unsafe { backend.cdotu(as_i32(n), x.as_ptr(), as_i32(incx), y.as_ptr(), as_i32(incy)) };
            value_cast::<Complex<f32>, Complex<T>>(r)
        }
        Precision::Double => {
            let x = layout::complex_cast::<T, f64>(x);
            let y = layout::complex_cast::<T, f64>(y);
            let r =
                unsafe { backend.zdotu(as_i32(n), x.as_ptr(), as_i32(incx), y.as_ptr(), as_i32(incy)) };
            value_cast::<Complex<f64>, Complex<T>>(r)
        }
    }
}

/// Adjoint dot product: sum conj(X[i]) * Y[i], the complex inner product.
pub fn dotc<T: Float + 'static>(
    n: usize,
    x: &[Complex<T>],
    incx: usize,
    y: &[Complex<T>],
    incy: usize,
) -> Complex<T> {
    check_vec("dotc", x, n, incx);
    check_vec("dotc", y, n, incy);
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let x = layout::complex_cast::<T, f32>(x);
            let y = layout::complex_cast::<T, f32>(y);
            let r =
                unsafe { backend.cdotc(as_i32(n), x.as_ptr(), as_i32(incx), y.as_ptr(), as_i32(incy)) };
            value_cast::<Complex<f32>, Complex<T>>(r)
        }
        Precision::Double => {
            let x = layout::complex_cast::<T, f64>(x);
            let y = layout::complex_cast::<T, f64>(y);
            let r =
                unsafe { backend.zdotc(as_i32(n), x.as_ptr(), as_i32(incx), y.as_ptr(), as_i32(incy)) };
            value_cast::<Complex<f64>, Complex<T>>(r)
        }
    }
}

/// y <- alpha op(A) x + beta y. A is stored m x n; `trans` selects op.
#[allow(clippy::too_many_arguments)]
pub fn gemv<T: Float + 'static>(
    order: Order,
    trans: Transpose,
    m: usize,
    n: usize,
    alpha: Complex<T>,
    a: &[Complex<T>],
    lda: usize,
    x: &[Complex<T>],
    incx: usize,
    beta: Complex<T>,
    y: &mut [Complex<T>],
    incy: usize,
) {
    let (ylen, xlen) = match trans {
        Transpose::NoTrans => (m, n),
        _ => (n, m),
    };
    check_mat("gemv", a, order, m, n, lda);
    check_vec("gemv", x, xlen, incx);
    check_vec("gemv", y, ylen, incy);
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let a = layout::complex_cast::<T, f32>(a);
            let x = layout::complex_cast::<T, f32>(x);
            let y = layout::complex_cast_mut::<T, f32>(y);
            unsafe {
                backend.cgemv(
                    order,
                    trans,
                    as_i32(m),
                    as_i32(n),
                    value_cast(alpha),
                    a.as_ptr(),
                    as_i32(lda),
                    x.as_ptr(),
                    as_i32(incx),
                    value_cast(beta),
                    y.as_mut_ptr(),
                    as_i32(incy),
                )
            }
        }
        Precision::Double => {
            let a = layout::complex_cast::<T, f64>(a);
            let x = layout::complex_cast::<T, f64>(x);
            let y = layout::complex_cast_mut::<T, f64>(y);
            unsafe {
                backend.zgemv(
                    order,
                    trans,
                    as_i32(m),
                    as_i32(n),
                    value_cast(alpha),
                    a.as_ptr(),
                    as_i32(lda),
                    x.as_ptr(),
                    as_i32(incx),
                    value_cast(beta),
                    y.as_mut_ptr(),
                    as_i32(incy),
                )
            }
        }
    }
}

/// C <- alpha op(A) op(B) + beta C, with op(A) m x k, op(B) k x n, C m x n.
#[allow(clippy::too_many_arguments)]
pub fn gemm<T: Float + 'static>(
    order: Order,
    transa: Transpose,
    transb: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: Complex<T>,
    a: &[Complex<T>],
    lda: usize,
    b: &[Complex<T>],
    ldb: usize,
    beta: Complex<T>,
    c: &mut [Complex<T>],
    ldc: usize,
) {
    let (ar, ac) = if transa == Transpose::NoTrans { (m, k) } else { (k, m) };
    let (br, bc) = if transb == Transpose::NoTrans { (k, n) } else { (n, k) };
    check_mat("gemm", a, order, ar, ac, lda);
    check_mat("gemm", b, order, br, bc, ldb);
    check_mat("gemm", c, order, m, n, ldc);
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let a = layout::complex_cast::<T, f32>(a);
            let b = layout::complex_cast::<T, f32>(b);
            let c = layout::complex_cast_mut::<T, f32>(c);
            unsafe {
                backend.cgemm(
                    order,
                    transa,
                    transb,
                    as_i32(m),
                    as_i32(n),
                    as_i32(k),
                    value_cast(alpha),
                    a.as_ptr(),
                    as_i32(lda),
                    b.as_ptr(),
                    as_i32(ldb),
                    value_cast(beta),
                    c.as_mut_ptr(),
                    as_i32(ldc),
                )
            }
        }
        Precision::Double => {
            let a = layout::complex_cast::<T, f64>(a);
            let b = layout::complex_cast::<T, f64>(b);
            let c = layout::complex_cast_mut::<T, f64>(c);
            unsafe {
                backend.zgemm(
                    order,
                    transa,
                    transb,
                    as_i32(m),
                    as_i32(n),
                    as_i32(k),
                    value_cast(alpha),
                    a.as_ptr(),
                    as_i32(lda),
                    b.as_ptr(),
                    as_i32(ldb),
                    value_cast(beta),
                    c.as_mut_ptr(),
                    as_i32(ldc),
                )
            }
        }
    }
}

/// Unconjugated rank-1 update: A <- alpha X Y^T + A.
#[allow(clippy::too_many_arguments)]
pub fn geru<T: Float + 'static>(
    order: Order,
    m: usize,
    n: usize,
    alpha: Complex<T>,
    x: &[Complex<T>],
    incx: usize,
    y: &[Complex<T>],
    incy: usize,
    a: &mut [Complex<T>],
    lda: usize,
) {
    check_vec("geru", x, m, incx);
    check_vec("geru", y, n, incy);
    check_mat("geru", a, order, m, n, lda);
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let x = layout::complex_cast::<T, f32>(x);
            let y = layout::complex_cast::<T, f32>(y);
            let a = layout::complex_cast_mut::<T, f32>(a);
            unsafe {
                backend.cgeru(
                    order,
                    as_i32(m),
                    as_i32(n),
                    value_cast(alpha),
                    x.as_ptr(),
                    as_i32(incx),
                    y.as_ptr(),
                    as_i32(incy),
                    a.as_mut_ptr(),
                    as_i32(lda),
                )
            }
        }
        Precision::Double => {
            let x = layout::complex_cast::<T, f64>(x);
            let y = layout::complex_cast::<T, f64>(y);
            let a = layout::complex_cast_mut::<T, f64>(a);
            unsafe {
                backend.zgeru(
                    order,
                    as_i32(m),
                    as_i32(n),
                    value_cast(alpha),
                    x.as_ptr(),
                    as_i32(incx),
                    y.as_ptr(),
                    as_i32(incy),
                    a.as_mut_ptr(),
                    as_i32(lda),
                )
            }
        }
    }
}

/// Conjugated rank-1 update: A <- alpha X Y^H + A.
#[allow(clippy::too_many_arguments)]
pub fn gerc<T: Float + 'static>(
    order: Order,
    m: usize,
    n: usize,
    alpha: Complex<T>,
    x: &[Complex<T>],
    incx: usize,
    y: &[Complex<T>],
    incy: usize,
    a: &mut [Complex<T>],
    lda: usize,
) {
    check_vec("gerc", x, m, incx);
    check_vec("gerc", y, n, incy);
    check_mat("gerc", a, order, m, n, lda);
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let x = layout::complex_cast::<T, f32>(x);
            let y = layout::complex_cast::<T, f32>(y);
            let a = layout::complex_cast_mut::<T, f32>(a);
            unsafe {
                backend.cgerc(
                    order,
                    as_i32(m),
                    as_i32(n),
                    value_cast(alpha),
                    x.as_ptr(),
                    as_i32(incx),
                    y.as_ptr(),
                    as_i32(incy),
                    a.as_mut_ptr(),
                    as_i32(lda),
                )
            }
        }
        Precision::Double => {
            let x = layout::complex_cast::<T, f64>(x);
            let y = layout::complex_cast::<T, f64>(y);
            let a = layout::complex_cast_mut::<T, f64>(a);
            unsafe {
                backend.zgerc(
                    order,
                    as_i32(m),
                    as_i32(n),
                    value_cast(alpha),
                    x.as_ptr(),
                    as_i32(incx),
                    y.as_ptr(),
                    as_i32(incy),
                    a.as_mut_ptr(),
                    as_i32(lda),
                )
            }
        }
    }
}
