//! Default pure-Rust backend
//!
//! Implements the full [`NativeBackend`](crate::backend::NativeBackend)
//! contract without external libraries, so the adapter layer works out of the
//! box and a native binding can be validated against it. Kernels and
//! split-complex primitives are direct strided loops; the factorizations are
//! built on nalgebra (SVD, symmetric/Hermitian eigendecomposition, Schur),
//! with an explicit partially-pivoted LU for the linear solver so pivot
//! indices and singularity statuses come out in the native convention.
//!
//! Contract notes:
//! - pivot selection uses the |re| + |im| magnitude, and `gesv` reports the
//!   first exactly-zero pivot as a positive status `k + 1`;
//! - SVD factors are economy-size; the full (`'A'`) job produces the same
//!   min(m, n) columns, which coincides with the full factors for square
//!   inputs;
//! - workspace-size queries (`lwork == -1`) and too-small `lwork` statuses
//!   follow the argument positions of the trait signatures.

use nalgebra::{DMatrix, RealField};
use num_complex::Complex;
use num_traits::Float;

use crate::backend::{NativeBackend, Order, Transpose};

/// The default backend registration.
pub struct ReferenceBackend;

// ---------------------------------------------------------------------------
// span helpers
// ---------------------------------------------------------------------------

#[inline]
fn vec_span(n: usize, inc: usize) -> usize {
    if n == 0 {
        0
    } else {
        (n - 1) * inc + 1
    }
}

#[inline]
fn mat_span(order: Order, rows: usize, cols: usize, ld: usize) -> usize {
    if rows == 0 || cols == 0 {
        return 0;
    }
    match order {
        Order::ColMajor => (cols - 1) * ld + rows,
        Order::RowMajor => (rows - 1) * ld + cols,
    }
}

#[inline]
fn col_span(rows: usize, cols: usize, ld: usize) -> usize {
    if rows == 0 || cols == 0 {
        0
    } else {
        (cols - 1) * ld + rows
    }
}

/// |re| + |im|, the magnitude BLAS and LAPACK use for argmax and pivoting.
#[inline]
fn cabs1<T: Float>(z: Complex<T>) -> T {
    z.re.abs() + z.im.abs()
}

// ---------------------------------------------------------------------------
// level-1 kernels
// ---------------------------------------------------------------------------

fn asum_ref<T: Float>(n: usize, x: &[Complex<T>], incx: usize) -> T {
    let mut acc = T::zero();
    for i in 0..n {
        acc = acc + cabs1(x[i * incx]);
    }
    acc
}

fn nrm2_ref<T: Float>(n: usize, x: &[Complex<T>], incx: usize) -> T {
    let mut acc = T::zero();
    for i in 0..n {
        acc = acc + x[i * incx].norm_sqr();
    }
    acc.sqrt()
}

fn scal_ref<T: Float>(n: usize, alpha: Complex<T>, x: &mut [Complex<T>], incx: usize) {
    for i in 0..n {
        x[i * incx] = alpha * x[i * incx];
    }
}

fn axpby_ref<T: Float>(
    n: usize,
    alpha: Complex<T>,
    x: &[Complex<T>],
    incx: usize,
    beta: Complex<T>,
    y: &mut [Complex<T>],
    incy: usize,
) {
    let beta_is_zero = beta.re == T::zero() && beta.im == T::zero();
    for i in 0..n {
        let ax = alpha * x[i * incx];
        // beta == 0 overwrites without reading y, per BLAS convention.
        y[i * incy] = if beta_is_zero { ax } else { ax + beta * y[i * incy] };
    }
}

fn icamax_ref<T: Float>(n: usize, x: &[Complex<T>], incx: usize) -> usize {
    let mut best = 0usize;
    let mut best_val = T::neg_infinity();
    for i in 0..n {
        let v = cabs1(x[i * incx]);
        if v > best_val {
            best_val = v;
            best = i;
        }
    }
    best
}

fn iamax_real_ref<T: Float>(n: usize, x: &[T], incx: usize) -> usize {
    let mut best = 0usize;
    let mut best_val = T::neg_infinity();
    for i in 0..n {
        let v = x[i * incx].abs();
        if v > best_val {
            best_val = v;
            best = i;
        }
    }
    best
}

fn dotu_ref<T: Float>(
    n: usize,
    x: &[Complex<T>],
    incx: usize,
    y: &[Complex<T>],
    incy: usize,
) -> Complex<T> {
    let mut acc = Complex::new(T::zero(), T::zero());
    for i in 0..n {
        acc = acc + x[i * incx] * y[i * incy];
    }
    acc
}

fn dotc_ref<T: Float>(
    n: usize,
    x: &[Complex<T>],
    incx: usize,
    y: &[Complex<T>],
    incy: usize,
) -> Complex<T> {
    let mut acc = Complex::new(T::zero(), T::zero());
    for i in 0..n {
        acc = acc + x[i * incx].conj() * y[i * incy];
    }
    acc
}

// ---------------------------------------------------------------------------
// level-2/3 kernels
// ---------------------------------------------------------------------------

#[inline]
fn stored_index(order: Order, i: usize, j: usize, ld: usize) -> usize {
    match order {
        Order::ColMajor => i + j * ld,
        Order::RowMajor => i * ld + j,
    }
}

/// op(M)[i, j] for a stored matrix under the given transpose flag.
#[inline]
fn op_element<T: Float>(
    order: Order,
    trans: Transpose,
    m: &[Complex<T>],
    ld: usize,
    i: usize,
    j: usize,
) -> Complex<T> {
    match trans {
        Transpose::NoTrans => m[stored_index(order, i, j, ld)],
        Transpose::Trans => m[stored_index(order, j, i, ld)],
        Transpose::ConjTrans => m[stored_index(order, j, i, ld)].conj(),
    }
}

#[allow(clippy::too_many_arguments)]
fn gemv_ref<T: Float>(
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
    // op(A) is rows_op x cols_op; A itself is stored m x n.
    let (rows_op, cols_op) = match trans {
        Transpose::NoTrans => (m, n),
        _ => (n, m),
    };
    let beta_is_zero = beta.re == T::zero() && beta.im == T::zero();
    for i in 0..rows_op {
        let mut sum = Complex::new(T::zero(), T::zero());
        for l in 0..cols_op {
            sum = sum + op_element(order, trans, a, lda, i, l) * x[l * incx];
        }
        let ax = alpha * sum;
        y[i * incy] = if beta_is_zero { ax } else { ax + beta * y[i * incy] };
    }
}

#[allow(clippy::too_many_arguments)]
fn gemm_ref<T: Float>(
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
    let beta_is_zero = beta.re == T::zero() && beta.im == T::zero();
    for i in 0..m {
        for j in 0..n {
            let mut sum = Complex::new(T::zero(), T::zero());
            for l in 0..k {
                sum = sum
                    + op_element(order, transa, a, lda, i, l)
                        * op_element(order, transb, b, ldb, l, j);
            }
            let idx = stored_index(order, i, j, ldc);
            let ac = alpha * sum;
            c[idx] = if beta_is_zero { ac } else { ac + beta * c[idx] };
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn ger_ref<T: Float>(
    order: Order,
    conj: bool,
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
    for j in 0..n {
        let yj = if conj { y[j * incy].conj() } else { y[j * incy] };
        let s = alpha * yj;
        for i in 0..m {
            let idx = stored_index(order, i, j, lda);
            a[idx] = a[idx] + x[i * incx] * s;
        }
    }
}

// ---------------------------------------------------------------------------
// linear solve (LU with partial pivoting, column-major)
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn gesv_ref<T: Float>(
    n: usize,
    nrhs: usize,
    a: &mut [Complex<T>],
    lda: usize,
    ipiv: &mut [i32],
    b: &mut [Complex<T>],
    ldb: usize,
) -> i32 {
    let at = |i: usize, j: usize| i + j * lda;
    let bt = |i: usize, j: usize| i + j * ldb;

    for k in 0..n {
        // Pivot on the |re| + |im| magnitude down column k.
        let mut p = k;
        let mut pmax = cabs1(a[at(k, k)]);
        for i in (k + 1)..n {
            let v = cabs1(a[at(i, k)]);
            if v > pmax {
                pmax = v;
                p = i;
            }
        }
        ipiv[k] = (p + 1) as i32;
        if pmax == T::zero() {
            // Exactly singular at pivot k; the 1-based native status.
            return (k + 1) as i32;
        }
        if p != k {
            for j in 0..n {
                a.swap(at(k, j), at(p, j));
            }
            for j in 0..nrhs {
                b.swap(bt(k, j), bt(p, j));
            }
        }
        let pivot = a[at(k, k)];
        for i in (k + 1)..n {
            let mult = a[at(i, k)] / pivot;
            a[at(i, k)] = mult;
            for j in (k + 1)..n {
                let akj = a[at(k, j)];
                a[at(i, j)] = a[at(i, j)] - mult * akj;
            }
            for j in 0..nrhs {
                let bkj = b[bt(k, j)];
                b[bt(i, j)] = b[bt(i, j)] - mult * bkj;
            }
        }
    }

    for j in 0..nrhs {
        for i in (0..n).rev() {
            let mut sum = b[bt(i, j)];
            for l in (i + 1)..n {
                sum = sum - a[at(i, l)] * b[bt(l, j)];
            }
            b[bt(i, j)] = sum / a[at(i, i)];
        }
    }
    0
}

// ---------------------------------------------------------------------------
// nalgebra-backed factorizations (column-major)
// ---------------------------------------------------------------------------

fn gels_lwork(m: usize, n: usize, nrhs: usize) -> usize {
    let mn = m.min(n);
    (mn + mn.max(nrhs)).max(1)
}

fn gesvd_lwork(m: usize, n: usize) -> usize {
    (2 * m.min(n) + m.max(n)).max(1)
}

fn heev_lwork(n: usize) -> usize {
    (2 * n).saturating_sub(1).max(1)
}

fn gees_lwork(n: usize) -> usize {
    (2 * n).max(1)
}

fn from_col_major<T>(a: &[Complex<T>], rows: usize, cols: usize, ld: usize) -> DMatrix<Complex<T>>
where
    T: RealField + Float + Copy,
{
    DMatrix::from_fn(rows, cols, |i, j| a[i + j * ld])
}

fn write_col_major<T>(m: &DMatrix<Complex<T>>, out: &mut [Complex<T>], ld: usize)
where
    T: RealField + Float + Copy,
{
    for j in 0..m.ncols() {
        for i in 0..m.nrows() {
            out[i + j * ld] = m[(i, j)];
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn gels_ref<T>(
    trans: u8,
    m: usize,
    n: usize,
    nrhs: usize,
    a: &[Complex<T>],
    lda: usize,
    b: &mut [Complex<T>],
    ldb: usize,
    lwork: usize,
) -> i32
where
    T: RealField + Float + Copy,
{
    if lwork < gels_lwork(m, n, nrhs) {
        return -10;
    }
    let full = from_col_major(a, m, n, lda);
    let op = match trans {
        b'N' => full,
        _ => full.adjoint(),
    };
    let (rows_op, cols_op) = (op.nrows(), op.ncols());
    let rhs = DMatrix::from_fn(rows_op, nrhs, |i, j| b[i + j * ldb]);

    let eps = <T as Float>::epsilon();
    let svd = match op.try_svd(true, true, eps, 0) {
        Some(svd) => svd,
        None => return 1,
    };
    let x = match svd.solve(&rhs, eps) {
        Ok(x) => x,
        Err(_) => return 1,
    };
    // The solution overwrites the leading cols_op rows of B.
    for j in 0..nrhs {
        for i in 0..cols_op {
            b[i + j * ldb] = x[(i, j)];
        }
    }
    0
}

#[allow(clippy::too_many_arguments)]
fn gesvd_ref<T>(
    jobu: u8,
    jobvt: u8,
    m: usize,
    n: usize,
    a: &[Complex<T>],
    lda: usize,
    s: &mut [T],
    u: &mut [Complex<T>],
    ldu: usize,
    vt: &mut [Complex<T>],
    ldvt: usize,
    lwork: usize,
) -> i32
where
    T: RealField + Float + Copy,
{
    if lwork < gesvd_lwork(m, n) {
        return -13;
    }
    let mat = from_col_major(a, m, n, lda);
    let want_u = jobu != b'N';
    let want_vt = jobvt != b'N';

    let eps = <T as Float>::epsilon();
    let svd = match mat.try_svd(want_u, want_vt, eps, 0) {
        Some(svd) => svd,
        None => return 1,
    };
    let min_mn = m.min(n);
    for (i, sv) in svd.singular_values.iter().take(min_mn).enumerate() {
        s[i] = *sv;
    }
    if want_u {
        if let Some(u_mat) = svd.u.as_ref() {
            write_col_major(u_mat, u, ldu);
        }
    }
    if want_vt {
        if let Some(vt_mat) = svd.v_t.as_ref() {
            write_col_major(vt_mat, vt, ldvt);
        }
    }
    0
}

#[allow(clippy::too_many_arguments)]
fn heev_ref<T>(
    jobz: u8,
    uplo: u8,
    n: usize,
    a: &mut [Complex<T>],
    lda: usize,
    w: &mut [T],
    lwork: usize,
) -> i32
where
    T: RealField + Float + Copy,
{
    if lwork < heev_lwork(n) {
        return -8;
    }
    // Build the full Hermitian matrix from the referenced triangle; the
    // diagonal is taken as real.
    let mat = DMatrix::from_fn(n, n, |i, j| {
        let lower = uplo == b'L';
        let stored = if i == j {
            Complex::new(a[i + j * lda].re, T::zero())
        } else if (lower && i > j) || (!lower && i < j) {
            a[i + j * lda]
        } else {
            a[j + i * lda].conj()
        };
        stored
    });

    let eps = <T as Float>::epsilon();
    let eig = match nalgebra::linalg::SymmetricEigen::try_new(mat, eps, 0) {
        Some(eig) => eig,
        None => return 1,
    };

    // Native convention: eigenvalues ascending, eigenvectors to match.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| {
        eig.eigenvalues[i]
            .partial_cmp(&eig.eigenvalues[j])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (dst, &src) in order.iter().enumerate() {
        w[dst] = eig.eigenvalues[src];
    }
    if jobz == b'V' {
        for (dst, &src) in order.iter().enumerate() {
            for i in 0..n {
                a[i + dst * lda] = eig.eigenvectors[(i, src)];
            }
        }
    }
    0
}

#[allow(clippy::too_many_arguments)]
fn gees_ref<T>(
    jobvs: u8,
    n: usize,
    a: &mut [Complex<T>],
    lda: usize,
    w: &mut [Complex<T>],
    vs: &mut [Complex<T>],
    ldvs: usize,
    lwork: usize,
) -> i32
where
    T: RealField + Float + Copy,
{
    if lwork < gees_lwork(n) {
        return -9;
    }
    let mat = from_col_major(a, n, n, lda);
    let eps = <T as Float>::epsilon();
    let schur = match nalgebra::linalg::Schur::try_new(mat, eps, 0) {
        Some(schur) => schur,
        None => return n as i32,
    };
    let (q, t) = schur.unpack();
    // A is overwritten with the Schur form; eigenvalues sit on its diagonal,
    // reported unsorted in factorization order.
    write_col_major(&t, a, lda);
    for i in 0..n {
        w[i] = t[(i, i)];
    }
    if jobvs == b'V' {
        write_col_major(&q, vs, ldvs);
    }
    0
}

// ---------------------------------------------------------------------------
// split-complex vector primitives
// ---------------------------------------------------------------------------

fn ctoz_ref<T: Float>(x: &[Complex<T>], incx: usize, re: &mut [T], im: &mut [T], incz: usize, n: usize) {
    for i in 0..n {
        let z = x[i * incx];
        re[i * incz] = z.re;
        im[i * incz] = z.im;
    }
}

fn ztoc_ref<T: Float>(re: &[T], im: &[T], incz: usize, y: &mut [Complex<T>], incy: usize, n: usize) {
    for i in 0..n {
        y[i * incy] = Complex::new(re[i * incz], im[i * incz]);
    }
}

fn zvabs_ref<T: Float>(re: &[T], im: &[T], inca: usize, out: &mut [T], incout: usize, n: usize) {
    for i in 0..n {
        out[i * incout] = re[i * inca].hypot(im[i * inca]);
    }
}

#[allow(clippy::too_many_arguments)]
fn zvconj_ref<T: Float>(
    are: &[T],
    aim: &[T],
    inca: usize,
    cre: &mut [T],
    cim: &mut [T],
    incc: usize,
    n: usize,
) {
    for i in 0..n {
        cre[i * incc] = are[i * inca];
        cim[i * incc] = -aim[i * inca];
    }
}

#[allow(clippy::too_many_arguments)]
fn zvmul_ref<T: Float>(
    are: &[T],
    aim: &[T],
    inca: usize,
    bre: &[T],
    bim: &[T],
    incb: usize,
    cre: &mut [T],
    cim: &mut [T],
    incc: usize,
    n: usize,
) {
    for i in 0..n {
        let (ar, ai) = (are[i * inca], aim[i * inca]);
        let (br, bi) = (bre[i * incb], bim[i * incb]);
        cre[i * incc] = ar * br - ai * bi;
        cim[i * incc] = ar * bi + ai * br;
    }
}

/// C = N / D. The denominator comes first, matching the native convention.
#[allow(clippy::too_many_arguments)]
fn zvdiv_ref<T: Float>(
    dre: &[T],
    dim: &[T],
    incd: usize,
    nre: &[T],
    nim: &[T],
    incn: usize,
    cre: &mut [T],
    cim: &mut [T],
    incc: usize,
    n: usize,
) {
    for i in 0..n {
        let num = Complex::new(nre[i * incn], nim[i * incn]);
        let den = Complex::new(dre[i * incd], dim[i * incd]);
        let q = num / den;
        cre[i * incc] = q.re;
        cim[i * incc] = q.im;
    }
}

// ---------------------------------------------------------------------------
// trait wiring
// ---------------------------------------------------------------------------

use std::slice::{from_raw_parts, from_raw_parts_mut};

/// Slice a matrix output argument, or an empty slice when the job flag says
/// the routine must not touch it (the pointer may then be a dummy).
#[inline]
unsafe fn opt_slice<'a, T>(wanted: bool, p: *mut T, span: usize) -> &'a mut [T] {
    if wanted {
        from_raw_parts_mut(p, span)
    } else {
        &mut []
    }
}

#[allow(clippy::too_many_arguments)]
impl NativeBackend for ReferenceBackend {
    fn name(&self) -> &'static str {
        "reference (pure Rust)"
    }

    // ---- level 1, single precision -------------------------------------

    unsafe fn scasum(&self, n: i32, x: *const Complex<f32>, incx: i32) -> f32 {
        let (n, incx) = (n.max(0) as usize, incx as usize);
        asum_ref(n, from_raw_parts(x, vec_span(n, incx)), incx)
    }

    unsafe fn scnrm2(&self, n: i32, x: *const Complex<f32>, incx: i32) -> f32 {
        let (n, incx) = (n.max(0) as usize, incx as usize);
        nrm2_ref(n, from_raw_parts(x, vec_span(n, incx)), incx)
    }

    unsafe fn cscal(&self, n: i32, alpha: Complex<f32>, x: *mut Complex<f32>, incx: i32) {
        let (n, incx) = (n.max(0) as usize, incx as usize);
        scal_ref(n, alpha, from_raw_parts_mut(x, vec_span(n, incx)), incx)
    }

    unsafe fn caxpby(
        &self,
        n: i32,
        alpha: Complex<f32>,
        x: *const Complex<f32>,
        incx: i32,
        beta: Complex<f32>,
        y: *mut Complex<f32>,
        incy: i32,
    ) {
        let (n, incx, incy) = (n.max(0) as usize, incx as usize, incy as usize);
        axpby_ref(
            n,
            alpha,
            from_raw_parts(x, vec_span(n, incx)),
            incx,
            beta,
            from_raw_parts_mut(y, vec_span(n, incy)),
            incy,
        )
    }

    unsafe fn icamax(&self, n: i32, x: *const Complex<f32>, incx: i32) -> usize {
        let (n, incx) = (n.max(0) as usize, incx as usize);
        icamax_ref(n, from_raw_parts(x, vec_span(n, incx)), incx)
    }

    unsafe fn isamax(&self, n: i32, x: *const f32, incx: i32) -> usize {
        let (n, incx) = (n.max(0) as usize, incx as usize);
        iamax_real_ref(n, from_raw_parts(x, vec_span(n, incx)), incx)
    }

    unsafe fn cdotu(
        &self,
        n: i32,
        x: *const Complex<f32>,
        incx: i32,
        y: *const Complex<f32>,
        incy: i32,
    ) -> Complex<f32> {
        let (n, incx, incy) = (n.max(0) as usize, incx as usize, incy as usize);
        dotu_ref(
            n,
            from_raw_parts(x, vec_span(n, incx)),
            incx,
            from_raw_parts(y, vec_span(n, incy)),
            incy,
        )
    }

    unsafe fn cdotc(
        &self,
        n: i32,
        x: *const Complex<f32>,
        incx: i32,
        y: *const Complex<f32>,
        incy: i32,
    ) -> Complex<f32> {
        let (n, incx, incy) = (n.max(0) as usize, incx as usize, incy as usize);
        dotc_ref(
            n,
            from_raw_parts(x, vec_span(n, incx)),
            incx,
            from_raw_parts(y, vec_span(n, incy)),
            incy,
        )
    }

    // ---- level 1, double precision -------------------------------------

    unsafe fn dzasum(&self, n: i32, x: *const Complex<f64>, incx: i32) -> f64 {
        let (n, incx) = (n.max(0) as usize, incx as usize);
        asum_ref(n, from_raw_parts(x, vec_span(n, incx)), incx)
    }

    unsafe fn dznrm2(&self, n: i32, x: *const Complex<f64>, incx: i32) -> f64 {
        let (n, incx) = (n.max(0) as usize, incx as usize);
        nrm2_ref(n, from_raw_parts(x, vec_span(n, incx)), incx)
    }

    unsafe fn zscal(&self, n: i32, alpha: Complex<f64>, x: *mut Complex<f64>, incx: i32) {
        let (n, incx) = (n.max(0) as usize, incx as usize);
        scal_ref(n, alpha, from_raw_parts_mut(x, vec_span(n, incx)), incx)
    }

    unsafe fn zaxpby(
        &self,
        n: i32,
        alpha: Complex<f64>,
        x: *const Complex<f64>,
        incx: i32,
        beta: Complex<f64>,
        y: *mut Complex<f64>,
        incy: i32,
    ) {
        let (n, incx, incy) = (n.max(0) as usize, incx as usize, incy as usize);
        axpby_ref(
            n,
            alpha,
            from_raw_parts(x, vec_span(n, incx)),
            incx,
            beta,
            from_raw_parts_mut(y, vec_span(n, incy)),
            incy,
        )
    }

    unsafe fn izamax(&self, n: i32, x: *const Complex<f64>, incx: i32) -> usize {
        let (n, incx) = (n.max(0) as usize, incx as usize);
        icamax_ref(n, from_raw_parts(x, vec_span(n, incx)), incx)
    }

    unsafe fn idamax(&self, n: i32, x: *const f64, incx: i32) -> usize {
        let (n, incx) = (n.max(0) as usize, incx as usize);
        iamax_real_ref(n, from_raw_parts(x, vec_span(n, incx)), incx)
    }

    unsafe fn zdotu(
        &self,
        n: i32,
        x: *const Complex<f64>,
        incx: i32,
        y: *const Complex<f64>,
        incy: i32,
    ) -> Complex<f64> {
        let (n, incx, incy) = (n.max(0) as usize, incx as usize, incy as usize);
        dotu_ref(
            n,
            from_raw_parts(x, vec_span(n, incx)),
            incx,
            from_raw_parts(y, vec_span(n, incy)),
            incy,
        )
    }

    unsafe fn zdotc(
        &self,
        n: i32,
        x: *const Complex<f64>,
        incx: i32,
        y: *const Complex<f64>,
        incy: i32,
    ) -> Complex<f64> {
        let (n, incx, incy) = (n.max(0) as usize, incx as usize, incy as usize);
        dotc_ref(
            n,
            from_raw_parts(x, vec_span(n, incx)),
            incx,
            from_raw_parts(y, vec_span(n, incy)),
            incy,
        )
    }

    // ---- level 2/3, single precision -----------------------------------

    unsafe fn cgemv(
        &self,
        order: Order,
        trans: Transpose,
        m: i32,
        n: i32,
        alpha: Complex<f32>,
        a: *const Complex<f32>,
        lda: i32,
        x: *const Complex<f32>,
        incx: i32,
        beta: Complex<f32>,
        y: *mut Complex<f32>,
        incy: i32,
    ) {
        let (m, n, lda, incx, incy) =
            (m as usize, n as usize, lda as usize, incx as usize, incy as usize);
        let (ylen, xlen) = match trans {
            Transpose::NoTrans => (m, n),
            _ => (n, m),
        };
        gemv_ref(
            order,
            trans,
            m,
            n,
            alpha,
            from_raw_parts(a, mat_span(order, m, n, lda)),
            lda,
            from_raw_parts(x, vec_span(xlen, incx)),
            incx,
            beta,
            from_raw_parts_mut(y, vec_span(ylen, incy)),
            incy,
        )
    }

    unsafe fn cgemm(
        &self,
        order: Order,
        transa: Transpose,
        transb: Transpose,
        m: i32,
        n: i32,
        k: i32,
        alpha: Complex<f32>,
        a: *const Complex<f32>,
        lda: i32,
        b: *const Complex<f32>,
        ldb: i32,
        beta: Complex<f32>,
        c: *mut Complex<f32>,
        ldc: i32,
    ) {
        let (m, n, k, lda, ldb, ldc) = (
            m as usize,
            n as usize,
            k as usize,
            lda as usize,
            ldb as usize,
            ldc as usize,
        );
        let (ar, ac) = if transa == Transpose::NoTrans { (m, k) } else { (k, m) };
        let (br, bc) = if transb == Transpose::NoTrans { (k, n) } else { (n, k) };
        gemm_ref(
            order,
            transa,
            transb,
            m,
            n,
            k,
            alpha,
            from_raw_parts(a, mat_span(order, ar, ac, lda)),
            lda,
            from_raw_parts(b, mat_span(order, br, bc, ldb)),
            ldb,
            beta,
            from_raw_parts_mut(c, mat_span(order, m, n, ldc)),
            ldc,
        )
    }

    unsafe fn cgeru(
        &self,
        order: Order,
        m: i32,
        n: i32,
        alpha: Complex<f32>,
        x: *const Complex<f32>,
        incx: i32,
        y: *const Complex<f32>,
        incy: i32,
        a: *mut Complex<f32>,
        lda: i32,
    ) {
        let (m, n, incx, incy, lda) =
            (m as usize, n as usize, incx as usize, incy as usize, lda as usize);
        ger_ref(
            order,
            false,
            m,
            n,
            alpha,
            from_raw_parts(x, vec_span(m, incx)),
            incx,
            from_raw_parts(y, vec_span(n, incy)),
            incy,
            from_raw_parts_mut(a, mat_span(order, m, n, lda)),
            lda,
        )
    }

    unsafe fn cgerc(
        &self,
        order: Order,
        m: i32,
        n: i32,
        alpha: Complex<f32>,
        x: *const Complex<f32>,
        incx: i32,
        y: *const Complex<f32>,
        incy: i32,
        a: *mut Complex<f32>,
        lda: i32,
    ) {
        let (m, n, incx, incy, lda) =
            (m as usize, n as usize, incx as usize, incy as usize, lda as usize);
        ger_ref(
            order,
            true,
            m,
            n,
            alpha,
            from_raw_parts(x, vec_span(m, incx)),
            incx,
            from_raw_parts(y, vec_span(n, incy)),
            incy,
            from_raw_parts_mut(a, mat_span(order, m, n, lda)),
            lda,
        )
    }

    // ---- level 2/3, double precision -----------------------------------

    unsafe fn zgemv(
        &self,
        order: Order,
        trans: Transpose,
        m: i32,
        n: i32,
        alpha: Complex<f64>,
        a: *const Complex<f64>,
        lda: i32,
        x: *const Complex<f64>,
        incx: i32,
        beta: Complex<f64>,
        y: *mut Complex<f64>,
        incy: i32,
    ) {
        let (m, n, lda, incx, incy) =
            (m as usize, n as usize, lda as usize, incx as usize, incy as usize);
        let (ylen, xlen) = match trans {
            Transpose::NoTrans => (m, n),
            _ => (n, m),
        };
        gemv_ref(
            order,
            trans,
            m,
            n,
            alpha,
            from_raw_parts(a, mat_span(order, m, n, lda)),
            lda,
            from_raw_parts(x, vec_span(xlen, incx)),
            incx,
            beta,
            from_raw_parts_mut(y, vec_span(ylen, incy)),
            incy,
        )
    }

    unsafe fn zgemm(
        &self,
        order: Order,
        transa: Transpose,
        transb: Transpose,
        m: i32,
        n: i32,
        k: i32,
        alpha: Complex<f64>,
        a: *const Complex<f64>,
        lda: i32,
        b: *const Complex<f64>,
        ldb: i32,
        beta: Complex<f64>,
        c: *mut Complex<f64>,
        ldc: i32,
    ) {
        let (m, n, k, lda, ldb, ldc) = (
            m as usize,
            n as usize,
            k as usize,
            lda as usize,
            ldb as usize,
            ldc as usize,
        );
        let (ar, ac) = if transa == Transpose::NoTrans { (m, k) } else { (k, m) };
        let (br, bc) = if transb == Transpose::NoTrans { (k, n) } else { (n, k) };
        gemm_ref(
            order,
            transa,
            transb,
            m,
            n,
            k,
            alpha,
            from_raw_parts(a, mat_span(order, ar, ac, lda)),
            lda,
            from_raw_parts(b, mat_span(order, br, bc, ldb)),
            ldb,
            beta,
            from_raw_parts_mut(c, mat_span(order, m, n, ldc)),
            ldc,
        )
    }

    unsafe fn zgeru(
        &self,
        order: Order,
        m: i32,
        n: i32,
        alpha: Complex<f64>,
        x: *const Complex<f64>,
        incx: i32,
        y: *const Complex<f64>,
        incy: i32,
        a: *mut Complex<f64>,
        lda: i32,
    ) {
        let (m, n, incx, incy, lda) =
            (m as usize, n as usize, incx as usize, incy as usize, lda as usize);
        ger_ref(
            order,
            false,
            m,
            n,
            alpha,
            from_raw_parts(x, vec_span(m, incx)),
            incx,
            from_raw_parts(y, vec_span(n, incy)),
            incy,
            from_raw_parts_mut(a, mat_span(order, m, n, lda)),
            lda,
        )
    }

    unsafe fn zgerc(
        &self,
        order: Order,
        m: i32,
        n: i32,
        alpha: Complex<f64>,
        x: *const Complex<f64>,
        incx: i32,
        y: *const Complex<f64>,
        incy: i32,
        a: *mut Complex<f64>,
        lda: i32,
    ) {
        let (m, n, incx, incy, lda) =
            (m as usize, n as usize, incx as usize, incy as usize, lda as usize);
        ger_ref(
            order,
            true,
            m,
            n,
            alpha,
            from_raw_parts(x, vec_span(m, incx)),
            incx,
            from_raw_parts(y, vec_span(n, incy)),
            incy,
            from_raw_parts_mut(a, mat_span(order, m, n, lda)),
            lda,
        )
    }

    // ---- factorizations, single precision ------------------------------

    unsafe fn cgesv(
        &self,
        n: i32,
        nrhs: i32,
        a: *mut Complex<f32>,
        lda: i32,
        ipiv: *mut i32,
        b: *mut Complex<f32>,
        ldb: i32,
    ) -> i32 {
        let (n, nrhs, lda, ldb) = (n as usize, nrhs as usize, lda as usize, ldb as usize);
        gesv_ref(
            n,
            nrhs,
            from_raw_parts_mut(a, col_span(n, n, lda)),
            lda,
            from_raw_parts_mut(ipiv, n),
            from_raw_parts_mut(b, col_span(n, nrhs, ldb)),
            ldb,
        )
    }

    unsafe fn cgels(
        &self,
        trans: u8,
        m: i32,
        n: i32,
        nrhs: i32,
        a: *mut Complex<f32>,
        lda: i32,
        b: *mut Complex<f32>,
        ldb: i32,
        work: *mut Complex<f32>,
        lwork: i32,
    ) -> i32 {
        let (m, n, nrhs, lda, ldb) =
            (m as usize, n as usize, nrhs as usize, lda as usize, ldb as usize);
        if lwork == -1 {
            *work = Complex::new(gels_lwork(m, n, nrhs) as f32, 0.0);
            return 0;
        }
        gels_ref(
            trans,
            m,
            n,
            nrhs,
            from_raw_parts(a, col_span(m, n, lda)),
            lda,
            from_raw_parts_mut(b, col_span(m.max(n), nrhs, ldb)),
            ldb,
            lwork as usize,
        )
    }

    unsafe fn cgesvd(
        &self,
        jobu: u8,
        jobvt: u8,
        m: i32,
        n: i32,
        a: *mut Complex<f32>,
        lda: i32,
        s: *mut f32,
        u: *mut Complex<f32>,
        ldu: i32,
        vt: *mut Complex<f32>,
        ldvt: i32,
        work: *mut Complex<f32>,
        lwork: i32,
        _rwork: *mut f32,
    ) -> i32 {
        let (m, n, lda, ldu, ldvt) =
            (m as usize, n as usize, lda as usize, ldu as usize, ldvt as usize);
        if lwork == -1 {
            *work = Complex::new(gesvd_lwork(m, n) as f32, 0.0);
            return 0;
        }
        let min_mn = m.min(n);
        let u_slice = opt_slice(jobu != b'N', u, col_span(m, min_mn, ldu));
        let vt_slice = opt_slice(jobvt != b'N', vt, col_span(min_mn, n, ldvt));
        gesvd_ref(
            jobu,
            jobvt,
            m,
            n,
            from_raw_parts(a, col_span(m, n, lda)),
            lda,
            from_raw_parts_mut(s, min_mn),
            u_slice,
            ldu,
            vt_slice,
            ldvt,
            lwork as usize,
        )
    }

    unsafe fn cheev(
        &self,
        jobz: u8,
        uplo: u8,
        n: i32,
        a: *mut Complex<f32>,
        lda: i32,
        w: *mut f32,
        work: *mut Complex<f32>,
        lwork: i32,
        _rwork: *mut f32,
    ) -> i32 {
        let (n, lda) = (n as usize, lda as usize);
        if lwork == -1 {
            *work = Complex::new(heev_lwork(n) as f32, 0.0);
            return 0;
        }
        heev_ref(
            jobz,
            uplo,
            n,
            from_raw_parts_mut(a, col_span(n, n, lda)),
            lda,
            from_raw_parts_mut(w, n),
            lwork as usize,
        )
    }

    unsafe fn cgees(
        &self,
        jobvs: u8,
        n: i32,
        a: *mut Complex<f32>,
        lda: i32,
        w: *mut Complex<f32>,
        vs: *mut Complex<f32>,
        ldvs: i32,
        work: *mut Complex<f32>,
        lwork: i32,
        _rwork: *mut f32,
    ) -> i32 {
        let (n, lda, ldvs) = (n as usize, lda as usize, ldvs as usize);
        if lwork == -1 {
            *work = Complex::new(gees_lwork(n) as f32, 0.0);
            return 0;
        }
        let vs_slice = opt_slice(jobvs != b'N', vs, col_span(n, n, ldvs));
        gees_ref(
            jobvs,
            n,
            from_raw_parts_mut(a, col_span(n, n, lda)),
            lda,
            from_raw_parts_mut(w, n),
            vs_slice,
            ldvs,
            lwork as usize,
        )
    }

    // ---- factorizations, double precision ------------------------------

    unsafe fn zgesv(
        &self,
        n: i32,
        nrhs: i32,
        a: *mut Complex<f64>,
        lda: i32,
        ipiv: *mut i32,
        b: *mut Complex<f64>,
        ldb: i32,
    ) -> i32 {
        let (n, nrhs, lda, ldb) = (n as usize, nrhs as usize, lda as usize, ldb as usize);
        gesv_ref(
            n,
            nrhs,
            from_raw_parts_mut(a, col_span(n, n, lda)),
            lda,
            from_raw_parts_mut(ipiv, n),
            from_raw_parts_mut(b, col_span(n, nrhs, ldb)),
            ldb,
        )
    }

    unsafe fn zgels(
        &self,
        trans: u8,
        m: i32,
        n: i32,
        nrhs: i32,
        a: *mut Complex<f64>,
        lda: i32,
        b: *mut Complex<f64>,
        ldb: i32,
        work: *mut Complex<f64>,
        lwork: i32,
    ) -> i32 {
        let (m, n, nrhs, lda, ldb) =
            (m as usize, n as usize, nrhs as usize, lda as usize, ldb as usize);
        if lwork == -1 {
            *work = Complex::new(gels_lwork(m, n, nrhs) as f64, 0.0);
            return 0;
        }
        gels_ref(
            trans,
            m,
            n,
            nrhs,
            from_raw_parts(a, col_span(m, n, lda)),
            lda,
            from_raw_parts_mut(b, col_span(m.max(n), nrhs, ldb)),
            ldb,
            lwork as usize,
        )
    }

    unsafe fn zgesvd(
        &self,
        jobu: u8,
        jobvt: u8,
        m: i32,
        n: i32,
        a: *mut Complex<f64>,
        lda: i32,
        s: *mut f64,
        u: *mut Complex<f64>,
        ldu: i32,
        vt: *mut Complex<f64>,
        ldvt: i32,
        work: *mut Complex<f64>,
        lwork: i32,
        _rwork: *mut f64,
    ) -> i32 {
        let (m, n, lda, ldu, ldvt) =
            (m as usize, n as usize, lda as usize, ldu as usize, ldvt as usize);
        if lwork == -1 {
            *work = Complex::new(gesvd_lwork(m, n) as f64, 0.0);
            return 0;
        }
        let min_mn = m.min(n);
        let u_slice = opt_slice(jobu != b'N', u, col_span(m, min_mn, ldu));
        let vt_slice = opt_slice(jobvt != b'N', vt, col_span(min_mn, n, ldvt));
        gesvd_ref(
            jobu,
            jobvt,
            m,
            n,
            from_raw_parts(a, col_span(m, n, lda)),
            lda,
            from_raw_parts_mut(s, min_mn),
            u_slice,
            ldu,
            vt_slice,
            ldvt,
            lwork as usize,
        )
    }

    unsafe fn zheev(
        &self,
        jobz: u8,
        uplo: u8,
        n: i32,
        a: *mut Complex<f64>,
        lda: i32,
        w: *mut f64,
        work: *mut Complex<f64>,
        lwork: i32,
        _rwork: *mut f64,
    ) -> i32 {
        let (n, lda) = (n as usize, lda as usize);
        if lwork == -1 {
            *work = Complex::new(heev_lwork(n) as f64, 0.0);
            return 0;
        }
        heev_ref(
            jobz,
            uplo,
            n,
            from_raw_parts_mut(a, col_span(n, n, lda)),
            lda,
            from_raw_parts_mut(w, n),
            lwork as usize,
        )
    }

    unsafe fn zgees(
        &self,
        jobvs: u8,
        n: i32,
        a: *mut Complex<f64>,
        lda: i32,
        w: *mut Complex<f64>,
        vs: *mut Complex<f64>,
        ldvs: i32,
        work: *mut Complex<f64>,
        lwork: i32,
        _rwork: *mut f64,
    ) -> i32 {
        let (n, lda, ldvs) = (n as usize, lda as usize, ldvs as usize);
        if lwork == -1 {
            *work = Complex::new(gees_lwork(n) as f64, 0.0);
            return 0;
        }
        let vs_slice = opt_slice(jobvs != b'N', vs, col_span(n, n, ldvs));
        gees_ref(
            jobvs,
            n,
            from_raw_parts_mut(a, col_span(n, n, lda)),
            lda,
            from_raw_parts_mut(w, n),
            vs_slice,
            ldvs,
            lwork as usize,
        )
    }

    // ---- split-complex primitives, single precision --------------------

    unsafe fn ctoz(
        &self,
        x: *const Complex<f32>,
        incx: usize,
        re: *mut f32,
        im: *mut f32,
        incz: usize,
        n: usize,
    ) {
        ctoz_ref(
            from_raw_parts(x, vec_span(n, incx)),
            incx,
            from_raw_parts_mut(re, vec_span(n, incz)),
            from_raw_parts_mut(im, vec_span(n, incz)),
            incz,
            n,
        )
    }

    unsafe fn ztoc(
        &self,
        re: *const f32,
        im: *const f32,
        incz: usize,
        y: *mut Complex<f32>,
        incy: usize,
        n: usize,
    ) {
        ztoc_ref(
            from_raw_parts(re, vec_span(n, incz)),
            from_raw_parts(im, vec_span(n, incz)),
            incz,
            from_raw_parts_mut(y, vec_span(n, incy)),
            incy,
            n,
        )
    }

    unsafe fn zvabs(
        &self,
        re: *const f32,
        im: *const f32,
        inca: usize,
        out: *mut f32,
        incout: usize,
        n: usize,
    ) {
        zvabs_ref(
            from_raw_parts(re, vec_span(n, inca)),
            from_raw_parts(im, vec_span(n, inca)),
            inca,
            from_raw_parts_mut(out, vec_span(n, incout)),
            incout,
            n,
        )
    }

    unsafe fn zvconj(
        &self,
        are: *const f32,
        aim: *const f32,
        inca: usize,
        cre: *mut f32,
        cim: *mut f32,
        incc: usize,
        n: usize,
    ) {
        zvconj_ref(
            from_raw_parts(are, vec_span(n, inca)),
            from_raw_parts(aim, vec_span(n, inca)),
            inca,
            from_raw_parts_mut(cre, vec_span(n, incc)),
            from_raw_parts_mut(cim, vec_span(n, incc)),
            incc,
            n,
        )
    }

    unsafe fn zvmul(
        &self,
        are: *const f32,
        aim: *const f32,
        inca: usize,
        bre: *const f32,
        bim: *const f32,
        incb: usize,
        cre: *mut f32,
        cim: *mut f32,
        incc: usize,
        n: usize,
    ) {
        zvmul_ref(
            from_raw_parts(are, vec_span(n, inca)),
            from_raw_parts(aim, vec_span(n, inca)),
            inca,
            from_raw_parts(bre, vec_span(n, incb)),
            from_raw_parts(bim, vec_span(n, incb)),
            incb,
            from_raw_parts_mut(cre, vec_span(n, incc)),
            from_raw_parts_mut(cim, vec_span(n, incc)),
            incc,
            n,
        )
    }

    unsafe fn zvdiv(
        &self,
        dre: *const f32,
        dim: *const f32,
        incd: usize,
        nre: *const f32,
        nim: *const f32,
        incn: usize,
        cre: *mut f32,
        cim: *mut f32,
        incc: usize,
        n: usize,
    ) {
        zvdiv_ref(
            from_raw_parts(dre, vec_span(n, incd)),
            from_raw_parts(dim, vec_span(n, incd)),
            incd,
            from_raw_parts(nre, vec_span(n, incn)),
            from_raw_parts(nim, vec_span(n, incn)),
            incn,
            from_raw_parts_mut(cre, vec_span(n, incc)),
            from_raw_parts_mut(cim, vec_span(n, incc)),
            incc,
            n,
        )
    }

    // ---- split-complex primitives, double precision --------------------

    unsafe fn ctoz_d(
        &self,
        x: *const Complex<f64>,
        incx: usize,
        re: *mut f64,
        im: *mut f64,
        incz: usize,
        n: usize,
    ) {
        ctoz_ref(
            from_raw_parts(x, vec_span(n, incx)),
            incx,
            from_raw_parts_mut(re, vec_span(n, incz)),
            from_raw_parts_mut(im, vec_span(n, incz)),
            incz,
            n,
        )
    }

    unsafe fn ztoc_d(
        &self,
        re: *const f64,
        im: *const f64,
        incz: usize,
        y: *mut Complex<f64>,
        incy: usize,
        n: usize,
    ) {
        ztoc_ref(
            from_raw_parts(re, vec_span(n, incz)),
            from_raw_parts(im, vec_span(n, incz)),
            incz,
            from_raw_parts_mut(y, vec_span(n, incy)),
            incy,
            n,
        )
    }

    unsafe fn zvabs_d(
        &self,
        re: *const f64,
        im: *const f64,
        inca: usize,
        out: *mut f64,
        incout: usize,
        n: usize,
    ) {
        zvabs_ref(
            from_raw_parts(re, vec_span(n, inca)),
            from_raw_parts(im, vec_span(n, inca)),
            inca,
            from_raw_parts_mut(out, vec_span(n, incout)),
            incout,
            n,
        )
    }

    unsafe fn zvconj_d(
        &self,
        are: *const f64,
        aim: *const f64,
        inca: usize,
        cre: *mut f64,
        cim: *mut f64,
        incc: usize,
        n: usize,
    ) {
        zvconj_ref(
            from_raw_parts(are, vec_span(n, inca)),
            from_raw_parts(aim, vec_span(n, inca)),
            inca,
            from_raw_parts_mut(cre, vec_span(n, incc)),
            from_raw_parts_mut(cim, vec_span(n, incc)),
            incc,
            n,
        )
    }

    unsafe fn zvmul_d(
        &self,
        are: *const f64,
        aim: *const f64,
        inca: usize,
        bre: *const f64,
        bim: *const f64,
        incb: usize,
        cre: *mut f64,
        cim: *mut f64,
        incc: usize,
        n: usize,
    ) {
        zvmul_ref(
            from_raw_parts(are, vec_span(n, inca)),
            from_raw_parts(aim, vec_span(n, inca)),
            inca,
            from_raw_parts(bre, vec_span(n, incb)),
            from_raw_parts(bim, vec_span(n, incb)),
            incb,
            from_raw_parts_mut(cre, vec_span(n, incc)),
            from_raw_parts_mut(cim, vec_span(n, incc)),
            incc,
            n,
        )
    }

    unsafe fn zvdiv_d(
        &self,
        dre: *const f64,
        dim: *const f64,
        incd: usize,
        nre: *const f64,
        nim: *const f64,
        incn: usize,
        cre: *mut f64,
        cim: *mut f64,
        incc: usize,
        n: usize,
    ) {
        zvdiv_ref(
            from_raw_parts(dre, vec_span(n, incd)),
            from_raw_parts(dim, vec_span(n, incd)),
            incd,
            from_raw_parts(nre, vec_span(n, incn)),
            from_raw_parts(nim, vec_span(n, incn)),
            incn,
            from_raw_parts_mut(cre, vec_span(n, incc)),
            from_raw_parts_mut(cim, vec_span(n, incc)),
            incc,
            n,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    #[test]
    fn gemm_matches_hand_computation() {
        // A = [[1+i, 2], [0, 1-i]], B = [[1, i], [1, 1]], column-major.
        let a = [z(1.0, 1.0), z(0.0, 0.0), z(2.0, 0.0), z(1.0, -1.0)];
        let b = [z(1.0, 0.0), z(1.0, 0.0), z(0.0, 1.0), z(1.0, 0.0)];
        let mut c = [z(0.0, 0.0); 4];
        gemm_ref(
            Order::ColMajor,
            Transpose::NoTrans,
            Transpose::NoTrans,
            2,
            2,
            2,
            z(1.0, 0.0),
            &a,
            2,
            &b,
            2,
            z(0.0, 0.0),
            &mut c,
            2,
        );
        // C[0,0] = (1+i)*1 + 2*1 = 3+i
        assert_eq!(c[0], z(3.0, 1.0));
        // C[1,0] = 0*1 + (1-i)*1 = 1-i
        assert_eq!(c[1], z(1.0, -1.0));
        // C[0,1] = (1+i)*i + 2*1 = 1+i
        assert_eq!(c[2], z(1.0, 1.0));
        // C[1,1] = 0*i + (1-i)*1 = 1-i
        assert_eq!(c[3], z(1.0, -1.0));
    }

    #[test]
    fn gemm_conjugate_transpose() {
        // A = [[i, 0], [1, 1]] col-major; op(A) = A^H = [[-i, 1], [0, 1]].
        let a = [z(0.0, 1.0), z(1.0, 0.0), z(0.0, 0.0), z(1.0, 0.0)];
        let b = [z(1.0, 0.0), z(2.0, 0.0), z(0.0, 0.0), z(0.0, 0.0)];
        let mut c = [z(0.0, 0.0); 4];
        gemm_ref(
            Order::ColMajor,
            Transpose::ConjTrans,
            Transpose::NoTrans,
            2,
            2,
            2,
            z(1.0, 0.0),
            &a,
            2,
            &b,
            2,
            z(0.0, 0.0),
            &mut c,
            2,
        );
        // C[:,0] = A^H * [1, 2] = [-i + 2, 2]
        assert_eq!(c[0], z(2.0, -1.0));
        assert_eq!(c[1], z(2.0, 0.0));
    }

    #[test]
    fn gesv_reports_singular_pivot() {
        // Second column is a multiple of the first.
        let mut a = [z(1.0, 0.0), z(2.0, 0.0), z(2.0, 0.0), z(4.0, 0.0)];
        let mut b = [z(1.0, 0.0), z(1.0, 0.0)];
        let mut ipiv = [0i32; 2];
        let info = gesv_ref(2, 1, &mut a, 2, &mut ipiv, &mut b, 2);
        assert_eq!(info, 2);
    }

    #[test]
    fn gesv_solves_small_system() {
        // A = [[2, 0], [0, 3i]], b = [2, 3i] -> x = [1, 1].
        let mut a = [z(2.0, 0.0), z(0.0, 0.0), z(0.0, 0.0), z(0.0, 3.0)];
        let mut b = [z(2.0, 0.0), z(0.0, 3.0)];
        let mut ipiv = [0i32; 2];
        let info = gesv_ref(2, 1, &mut a, 2, &mut ipiv, &mut b, 2);
        assert_eq!(info, 0);
        assert!((b[0] - z(1.0, 0.0)).norm() < 1e-14);
        assert!((b[1] - z(1.0, 0.0)).norm() < 1e-14);
        assert_eq!(ipiv, [1, 2]);
    }

    #[test]
    fn heev_sorts_eigenvalues_ascending() {
        // diag(3, 1) is Hermitian with eigenvalues {1, 3}.
        let mut a = [z(3.0, 0.0), z(0.0, 0.0), z(0.0, 0.0), z(1.0, 0.0)];
        let mut w = [0.0f64; 2];
        let info = heev_ref(b'V', b'L', 2, &mut a, 2, &mut w, heev_lwork(2));
        assert_eq!(info, 0);
        assert!(w[0] <= w[1]);
        assert!((w[0] - 1.0).abs() < 1e-12);
        assert!((w[1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn gees_rotation_matrix_has_unit_imaginary_pair() {
        // [[0, -1], [1, 0]] has eigenvalues +/- i.
        let mut a = [z(0.0, 0.0), z(1.0, 0.0), z(-1.0, 0.0), z(0.0, 0.0)];
        let mut w = [z(0.0, 0.0); 2];
        let mut vs = [z(0.0, 0.0); 4];
        let info = gees_ref(b'V', 2, &mut a, 2, &mut w, &mut vs, 2, gees_lwork(2));
        assert_eq!(info, 0);
        let mut ims: Vec<f64> = w.iter().map(|z| z.im).collect();
        ims.sort_by(|x, y| x.partial_cmp(y).unwrap());
        assert!((ims[0] + 1.0).abs() < 1e-10);
        assert!((ims[1] - 1.0).abs() < 1e-10);
        assert!(w.iter().all(|z| z.re.abs() < 1e-10));
    }

    #[test]
    fn zvdiv_takes_denominator_first() {
        let dre = [2.0f64];
        let dim = [0.0f64];
        let nre = [4.0f64];
        let nim = [0.0f64];
        let mut cre = [0.0f64];
        let mut cim = [0.0f64];
        zvdiv_ref(&dre, &dim, 1, &nre, &nim, 1, &mut cre, &mut cim, 1, 1);
        assert_eq!(cre[0], 2.0);
        assert_eq!(cim[0], 0.0);
    }

    #[test]
    fn axpby_with_zero_beta_overwrites() {
        let x = [z(1.0, 1.0), z(2.0, 0.0)];
        let mut y = [z(f64::NAN, f64::NAN), z(5.0, 5.0)];
        axpby_ref(2, z(2.0, 0.0), &x, 1, z(0.0, 0.0), &mut y, 1);
        assert_eq!(y[0], z(2.0, 2.0));
        assert_eq!(y[1], z(4.0, 0.0));
    }
}
