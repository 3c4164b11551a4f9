//! Precision-agnostic factorization adapter
//!
//! Wraps the backend's factorization routines behind one entry point each:
//! linear solve, least squares, singular value decomposition, Hermitian
//! eigendecomposition and the complex Schur decomposition. Matrices are
//! column-major with explicit leading dimensions, the native convention.
//!
//! Scratch workspace is call-scoped: allocated immediately before the
//! backend call, sized either by the fixed native formula (the real scratch
//! arrays: 5 min(m, n) for SVD, max(1, 3n - 2) for the Hermitian
//! eigendecomposition, n for Schur) or by the backend's own size query
//! (`lwork == -1`), and dropped when the call returns. Nothing is cached.
//!
//! For least squares the query is also exposed as an explicit two-step
//! protocol — [`lstsq_work_size`] then [`lstsq_with_work`] — so callers can
//! manage the workspace themselves; [`lstsq`] performs both steps.
//!
//! Status codes from the backend are propagated verbatim through
//! [`FactorError`]; a positive status (e.g. an exactly singular pivot) is a
//! failure, never a partial success.

use num_complex::Complex;
use num_traits::Float;

use crate::backend::{self, Transpose};
use crate::error::{check, FactorError};
use crate::layout;
use crate::precision::Precision;

/// Singular vector request for [`svd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvdJob {
    /// All m (resp. n) vectors.
    Full,
    /// The leading min(m, n) vectors.
    Economy,
    /// No vectors.
    Skip,
}

impl SvdJob {
    fn flag(self) -> u8 {
        match self {
            SvdJob::Full => b'A',
            SvdJob::Economy => b'S',
            SvdJob::Skip => b'N',
        }
    }
}

/// Whether an eigendecomposition or Schur call produces vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vectors {
    Compute,
    Skip,
}

impl Vectors {
    fn flag(self) -> u8 {
        match self {
            Vectors::Compute => b'V',
            Vectors::Skip => b'N',
        }
    }
}

/// Which triangle of a Hermitian matrix is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uplo {
    Upper,
    Lower,
}

impl Uplo {
    fn flag(self) -> u8 {
        match self {
            Uplo::Upper => b'U',
            Uplo::Lower => b'L',
        }
    }
}

#[inline]
fn col_len(rows: usize, cols: usize, ld: usize) -> usize {
    if rows == 0 || cols == 0 {
        0
    } else {
        (cols - 1) * ld + rows
    }
}

#[inline]
fn check_col<T>(name: &str, a: &[T], rows: usize, cols: usize, ld: usize) {
    assert!(ld >= rows.max(1), "{}: leading dimension {} below {}", name, ld, rows.max(1));
    assert!(
        a.len() >= col_len(rows, cols, ld),
        "{}: buffer of {} elements cannot hold a {}x{} column-major matrix with leading dimension {}",
        name,
        a.len(),
        rows,
        cols,
        ld
    );
}

#[inline]
fn as_i32(v: usize) -> i32 {
    assert!(v <= i32::MAX as usize, "dimension {} too large for the native LP64 interface", v);
    v as i32
}

/// Solve A X = B in place: on success B holds the solution and A its LU
/// factors, with 1-based pivot rows in `ipiv`.
///
/// A positive status means A is exactly singular at that pivot; the
/// contents of A and B are then unspecified and must not be used.
pub fn solve<T: Float + 'static>(
    n: usize,
    nrhs: usize,
    a: &mut [Complex<T>],
    lda: usize,
    ipiv: &mut [i32],
    b: &mut [Complex<T>],
    ldb: usize,
) -> Result<(), FactorError> {
    check_col("solve", a, n, n, lda);
    check_col("solve", b, n, nrhs, ldb);
    assert!(ipiv.len() >= n, "solve: pivot buffer of {} cannot hold {} indices", ipiv.len(), n);
    let backend = backend::current();
    let info = match Precision::of::<T>() {
        Precision::Single => {
            let a = layout::complex_cast_mut::<T, f32>(a);
            let b = layout::complex_cast_mut::<T, f32>(b);
            unsafe {
                backend.cgesv(
                    as_i32(n),
                    as_i32(nrhs),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    ipiv.as_mut_ptr(),
                    b.as_mut_ptr(),
                    as_i32(ldb),
                )
            }
        }
        Precision::Double => {
            let a = layout::complex_cast_mut::<T, f64>(a);
            let b = layout::complex_cast_mut::<T, f64>(b);
            unsafe {
                backend.zgesv(
                    as_i32(n),
                    as_i32(nrhs),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    ipiv.as_mut_ptr(),
                    b.as_mut_ptr(),
                    as_i32(ldb),
                )
            }
        }
    };
    check("gesv", info)
}

fn check_lstsq<T>(
    m: usize,
    n: usize,
    nrhs: usize,
    a: &[Complex<T>],
    lda: usize,
    b: &[Complex<T>],
    ldb: usize,
) {
    check_col("lstsq", a, m, n, lda);
    // B carries both the right-hand side and the solution, so it spans
    // max(m, n) rows whichever way the system is shaped.
    check_col("lstsq", b, m.max(n), nrhs, ldb);
}

/// Ask the backend how much complex workspace [`lstsq_with_work`] needs,
/// by issuing the native size query (`lwork == -1`). The buffers are not
/// modified.
pub fn lstsq_work_size<T: Float + 'static>(
    trans: Transpose,
    m: usize,
    n: usize,
    nrhs: usize,
    a: &mut [Complex<T>],
    lda: usize,
    b: &mut [Complex<T>],
    ldb: usize,
) -> Result<usize, FactorError> {
    check_lstsq(m, n, nrhs, a, lda, b, ldb);
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let a = layout::complex_cast_mut::<T, f32>(a);
            let b = layout::complex_cast_mut::<T, f32>(b);
            let mut probe = [Complex::new(0.0f32, 0.0)];
            let info = unsafe {
                backend.cgels(
                    trans.flag(),
                    as_i32(m),
                    as_i32(n),
                    as_i32(nrhs),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    b.as_mut_ptr(),
                    as_i32(ldb),
                    probe.as_mut_ptr(),
                    -1,
                )
            };
            check("gels", info)?;
            Ok(probe[0].re as usize)
        }
        Precision::Double => {
            let a = layout::complex_cast_mut::<T, f64>(a);
            let b = layout::complex_cast_mut::<T, f64>(b);
            let mut probe = [Complex::new(0.0f64, 0.0)];
            let info = unsafe {
                backend.zgels(
                    trans.flag(),
                    as_i32(m),
                    as_i32(n),
                    as_i32(nrhs),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    b.as_mut_ptr(),
                    as_i32(ldb),
                    probe.as_mut_ptr(),
                    -1,
                )
            };
            check("gels", info)?;
            Ok(probe[0].re as usize)
        }
    }
}

/// Least-squares solve with caller-supplied workspace: overwrites the
/// leading rows of B with the solution of min |op(A) X - B|.
///
/// `trans` selects op(A): [`Transpose::NoTrans`] or
/// [`Transpose::ConjTrans`]. An undersized workspace is reported by the
/// backend as a negative status, verbatim.
#[allow(clippy::too_many_arguments)]
pub fn lstsq_with_work<T: Float + 'static>(
    trans: Transpose,
    m: usize,
    n: usize,
    nrhs: usize,
    a: &mut [Complex<T>],
    lda: usize,
    b: &mut [Complex<T>],
    ldb: usize,
    work: &mut [Complex<T>],
) -> Result<(), FactorError> {
    check_lstsq(m, n, nrhs, a, lda, b, ldb);
    assert!(!work.is_empty(), "lstsq: workspace must hold at least one element");
    let backend = backend::current();
    let info = match Precision::of::<T>() {
        Precision::Single => {
            let a = layout::complex_cast_mut::<T, f32>(a);
            let b = layout::complex_cast_mut::<T, f32>(b);
            let work = layout::complex_cast_mut::<T, f32>(work);
            unsafe {
                backend.cgels(
                    trans.flag(),
                    as_i32(m),
                    as_i32(n),
                    as_i32(nrhs),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    b.as_mut_ptr(),
                    as_i32(ldb),
                    work.as_mut_ptr(),
                    as_i32(work.len()),
                )
            }
        }
        Precision::Double => {
            let a = layout::complex_cast_mut::<T, f64>(a);
            let b = layout::complex_cast_mut::<T, f64>(b);
            let work = layout::complex_cast_mut::<T, f64>(work);
            unsafe {
                backend.zgels(
                    trans.flag(),
                    as_i32(m),
                    as_i32(n),
                    as_i32(nrhs),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    b.as_mut_ptr(),
                    as_i32(ldb),
                    work.as_mut_ptr(),
                    as_i32(work.len()),
                )
            }
        }
    };
    check("gels", info)
}

/// Least-squares solve performing the workspace query and allocation
/// internally: the two steps of the native protocol in one call.
#[allow(clippy::too_many_arguments)]
pub fn lstsq<T: Float + 'static>(
    trans: Transpose,
    m: usize,
    n: usize,
    nrhs: usize,
    a: &mut [Complex<T>],
    lda: usize,
    b: &mut [Complex<T>],
    ldb: usize,
) -> Result<(), FactorError> {
    let lwork = lstsq_work_size(trans, m, n, nrhs, a, lda, b, ldb)?;
    let mut work = vec![Complex::new(T::zero(), T::zero()); lwork.max(1)];
    lstsq_with_work(trans, m, n, nrhs, a, lda, b, ldb, &mut work)
}

/// Singular value decomposition: A = U diag(s) V^H.
///
/// Singular values land in `s` (length min(m, n), descending). `u` and `vt`
/// receive vectors per their job flags and may be empty when skipped. A is
/// overwritten by the backend. The real scratch array the backend requires
/// is allocated here with the native sizing, 5 min(m, n); the complex
/// workspace is sized by the backend's own query.
#[allow(clippy::too_many_arguments)]
pub fn svd<T: Float + 'static>(
    jobu: SvdJob,
    jobvt: SvdJob,
    m: usize,
    n: usize,
    a: &mut [Complex<T>],
    lda: usize,
    s: &mut [T],
    u: &mut [Complex<T>],
    ldu: usize,
    vt: &mut [Complex<T>],
    ldvt: usize,
) -> Result<(), FactorError> {
    check_col("svd", a, m, n, lda);
    let min_mn = m.min(n);
    assert!(s.len() >= min_mn, "svd: singular value buffer of {} cannot hold {}", s.len(), min_mn);
    if jobu != SvdJob::Skip {
        let ucols = if jobu == SvdJob::Full { m } else { min_mn };
        check_col("svd", u, m, ucols, ldu);
    }
    if jobvt != SvdJob::Skip {
        let vrows = if jobvt == SvdJob::Full { n } else { min_mn };
        check_col("svd", vt, vrows, n, ldvt);
    }
    let backend = backend::current();
    let info = match Precision::of::<T>() {
        Precision::Single => {
            let a = layout::complex_cast_mut::<T, f32>(a);
            let s = layout::real_cast_mut::<T, f32>(s);
            let u = layout::complex_cast_mut::<T, f32>(u);
            let vt = layout::complex_cast_mut::<T, f32>(vt);
            let mut rwork = vec![0.0f32; (5 * min_mn).max(1)];
            let mut probe = [Complex::new(0.0f32, 0.0)];
            let info = unsafe {
                backend.cgesvd(
                    jobu.flag(),
                    jobvt.flag(),
                    as_i32(m),
                    as_i32(n),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    s.as_mut_ptr(),
                    u.as_mut_ptr(),
                    as_i32(ldu.max(1)),
                    vt.as_mut_ptr(),
                    as_i32(ldvt.max(1)),
                    probe.as_mut_ptr(),
                    -1,
                    rwork.as_mut_ptr(),
                )
            };
            check("gesvd", info)?;
            let mut work = vec![Complex::new(0.0f32, 0.0); (probe[0].re as usize).max(1)];
            unsafe {
                backend.cgesvd(
                    jobu.flag(),
                    jobvt.flag(),
                    as_i32(m),
                    as_i32(n),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    s.as_mut_ptr(),
                    u.as_mut_ptr(),
                    as_i32(ldu.max(1)),
                    vt.as_mut_ptr(),
                    as_i32(ldvt.max(1)),
                    work.as_mut_ptr(),
                    as_i32(work.len()),
                    rwork.as_mut_ptr(),
                )
            }
        }
        Precision::Double => {
            let a = layout::complex_cast_mut::<T, f64>(a);
            let s = layout::real_cast_mut::<T, f64>(s);
            let u = layout::complex_cast_mut::<T, f64>(u);
            let vt = layout::complex_cast_mut::<T, f64>(vt);
            let mut rwork = vec![0.0f64; (5 * min_mn).max(1)];
            let mut probe = [Complex::new(0.0f64, 0.0)];
            let info = unsafe {
                backend.zgesvd(
                    jobu.flag(),
                    jobvt.flag(),
                    as_i32(m),
                    as_i32(n),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    s.as_mut_ptr(),
                    u.as_mut_ptr(),
                    as_i32(ldu.max(1)),
                    vt.as_mut_ptr(),
                    as_i32(ldvt.max(1)),
                    probe.as_mut_ptr(),
                    -1,
                    rwork.as_mut_ptr(),
                )
            };
            check("gesvd", info)?;
            let mut work = vec![Complex::new(0.0f64, 0.0); (probe[0].re as usize).max(1)];
            unsafe {
                backend.zgesvd(
                    jobu.flag(),
                    jobvt.flag(),
                    as_i32(m),
                    as_i32(n),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    s.as_mut_ptr(),
                    u.as_mut_ptr(),
                    as_i32(ldu.max(1)),
                    vt.as_mut_ptr(),
                    as_i32(ldvt.max(1)),
                    work.as_mut_ptr(),
                    as_i32(work.len()),
                    rwork.as_mut_ptr(),
                )
            }
        }
    };
    check("gesvd", info)
}

/// Hermitian eigendecomposition: eigenvalues into `w` in ascending order
/// (the backend default); with [`Vectors::Compute`], eigenvectors overwrite
/// A. Only the `uplo` triangle of A is referenced. The real scratch array
/// uses the native sizing, max(1, 3n - 2).
pub fn eig_hermitian<T: Float + 'static>(
    jobz: Vectors,
    uplo: Uplo,
    n: usize,
    a: &mut [Complex<T>],
    lda: usize,
    w: &mut [T],
) -> Result<(), FactorError> {
    check_col("eig_hermitian", a, n, n, lda);
    assert!(w.len() >= n, "eig_hermitian: eigenvalue buffer of {} cannot hold {}", w.len(), n);
    let rwork_len = (3 * n).saturating_sub(2).max(1);
    let backend = backend::current();
    let info = match Precision::of::<T>() {
        Precision::Single => {
            let a = layout::complex_cast_mut::<T, f32>(a);
            let w = layout::real_cast_mut::<T, f32>(w);
            let mut rwork = vec![0.0f32; rwork_len];
            let mut probe = [Complex::new(0.0f32, 0.0)];
            let info = unsafe {
                backend.cheev(
                    jobz.flag(),
                    uplo.flag(),
                    as_i32(n),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    w.as_mut_ptr(),
                    probe.as_mut_ptr(),
                    -1,
                    rwork.as_mut_ptr(),
                )
            };
            check("heev", info)?;
            let mut work = vec![Complex::new(0.0f32, 0.0); (probe[0].re as usize).max(1)];
            unsafe {
                backend.cheev(
                    jobz.flag(),
                    uplo.flag(),
                    as_i32(n),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    w.as_mut_ptr(),
                    work.as_mut_ptr(),
                    as_i32(work.len()),
                    rwork.as_mut_ptr(),
                )
            }
        }
        Precision::Double => {
            let a = layout::complex_cast_mut::<T, f64>(a);
            let w = layout::real_cast_mut::<T, f64>(w);
            let mut rwork = vec![0.0f64; rwork_len];
            let mut probe = [Complex::new(0.0f64, 0.0)];
            let info = unsafe {
                backend.zheev(
                    jobz.flag(),
                    uplo.flag(),
                    as_i32(n),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    w.as_mut_ptr(),
                    probe.as_mut_ptr(),
                    -1,
                    rwork.as_mut_ptr(),
                )
            };
            check("heev", info)?;
            let mut work = vec![Complex::new(0.0f64, 0.0); (probe[0].re as usize).max(1)];
            unsafe {
                backend.zheev(
                    jobz.flag(),
                    uplo.flag(),
                    as_i32(n),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    w.as_mut_ptr(),
                    work.as_mut_ptr(),
                    as_i32(work.len()),
                    rwork.as_mut_ptr(),
                )
            }
        }
    };
    check("heev", info)
}

/// Complex Schur decomposition of a (real-coefficient) matrix stored as
/// complex: A is overwritten with the Schur form, `vs` receives the Schur
/// vectors when requested, and the eigenvalues' real and imaginary parts
/// land in `wr` and `wi`.
///
/// The backend is called with eigenvalue sorting disabled, a real scratch
/// array of size n and a complex eigenvalue workspace of size n. Splitting
/// that workspace into `wr`/`wi` element by element, in order, is adapter
/// logic — the backend hands back interleaved complex eigenvalues only.
#[allow(clippy::too_many_arguments)]
pub fn schur<T: Float + 'static>(
    jobvs: Vectors,
    n: usize,
    a: &mut [Complex<T>],
    lda: usize,
    vs: &mut [Complex<T>],
    ldvs: usize,
    wr: &mut [T],
    wi: &mut [T],
) -> Result<(), FactorError> {
    check_col("schur", a, n, n, lda);
    if jobvs == Vectors::Compute {
        check_col("schur", vs, n, n, ldvs);
    }
    assert!(wr.len() >= n, "schur: real-part buffer of {} cannot hold {}", wr.len(), n);
    assert!(wi.len() >= n, "schur: imaginary-part buffer of {} cannot hold {}", wi.len(), n);
    let backend = backend::current();
    match Precision::of::<T>() {
        Precision::Single => {
            let a = layout::complex_cast_mut::<T, f32>(a);
            let vs = layout::complex_cast_mut::<T, f32>(vs);
            let wr = layout::real_cast_mut::<T, f32>(wr);
            let wi = layout::real_cast_mut::<T, f32>(wi);
            let mut w = vec![Complex::new(0.0f32, 0.0); n.max(1)];
            let mut rwork = vec![0.0f32; n.max(1)];
            let mut probe = [Complex::new(0.0f32, 0.0)];
            let info = unsafe {
                backend.cgees(
                    jobvs.flag(),
                    as_i32(n),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    w.as_mut_ptr(),
                    vs.as_mut_ptr(),
                    as_i32(ldvs.max(1)),
                    probe.as_mut_ptr(),
                    -1,
                    rwork.as_mut_ptr(),
                )
            };
            check("gees", info)?;
            let mut work = vec![Complex::new(0.0f32, 0.0); (probe[0].re as usize).max(1)];
            let info = unsafe {
                backend.cgees(
                    jobvs.flag(),
                    as_i32(n),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    w.as_mut_ptr(),
                    vs.as_mut_ptr(),
                    as_i32(ldvs.max(1)),
                    work.as_mut_ptr(),
                    as_i32(work.len()),
                    rwork.as_mut_ptr(),
                )
            };
            check("gees", info)?;
            for (i, z) in w.iter().take(n).enumerate() {
                wr[i] = z.re;
                wi[i] = z.im;
            }
            Ok(())
        }
        Precision::Double => {
            let a = layout::complex_cast_mut::<T, f64>(a);
            let vs = layout::complex_cast_mut::<T, f64>(vs);
            let wr = layout::real_cast_mut::<T, f64>(wr);
            let wi = layout::real_cast_mut::<T, f64>(wi);
            let mut w = vec![Complex::new(0.0f64, 0.0); n.max(1)];
            let mut rwork = vec![0.0f64; n.max(1)];
            let mut probe = [Complex::new(0.0f64, 0.0)];
            let info = unsafe {
                backend.zgees(
                    jobvs.flag(),
                    as_i32(n),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    w.as_mut_ptr(),
                    vs.as_mut_ptr(),
                    as_i32(ldvs.max(1)),
                    probe.as_mut_ptr(),
                    -1,
                    rwork.as_mut_ptr(),
                )
            };
            check("gees", info)?;
            let mut work = vec![Complex::new(0.0f64, 0.0); (probe[0].re as usize).max(1)];
            let info = unsafe {
                backend.zgees(
                    jobvs.flag(),
                    as_i32(n),
                    a.as_mut_ptr(),
                    as_i32(lda),
                    w.as_mut_ptr(),
                    vs.as_mut_ptr(),
                    as_i32(ldvs.max(1)),
                    work.as_mut_ptr(),
                    as_i32(work.len()),
                    rwork.as_mut_ptr(),
                )
            };
            check("gees", info)?;
            for (i, z) in w.iter().take(n).enumerate() {
                wr[i] = z.re;
                wi[i] = z.im;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Order;
    use crate::kernels;

    fn z(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    #[test]
    fn solve_round_trip_double() {
        // Well-conditioned 2x2 complex system.
        let a0 = [z(4.0, 0.0), z(1.0, -1.0), z(1.0, 1.0), z(3.0, 0.0)];
        let b0 = [z(1.0, 2.0), z(-2.0, 1.0)];
        let mut a = a0;
        let mut b = b0;
        let mut ipiv = [0i32; 2];
        solve(2, 1, &mut a, 2, &mut ipiv, &mut b, 2).unwrap();

        // Verify A x == b through the kernel adapter.
        let mut ax = [z(0.0, 0.0); 2];
        kernels::gemv(
            Order::ColMajor,
            Transpose::NoTrans,
            2,
            2,
            z(1.0, 0.0),
            &a0,
            2,
            &b,
            1,
            z(0.0, 0.0),
            &mut ax,
            1,
        );
        for (got, want) in ax.iter().zip(b0.iter()) {
            assert!((got - want).norm() < 1e-12, "residual too large: {:?} vs {:?}", got, want);
        }
    }

    #[test]
    fn solve_round_trip_single_with_looser_tolerance() {
        let c = |re: f32, im: f32| Complex::new(re, im);
        let a0 = [c(4.0, 0.0), c(1.0, -1.0), c(1.0, 1.0), c(3.0, 0.0)];
        let b0 = [c(1.0, 2.0), c(-2.0, 1.0)];
        let mut a = a0;
        let mut b = b0;
        let mut ipiv = [0i32; 2];
        solve(2, 1, &mut a, 2, &mut ipiv, &mut b, 2).unwrap();

        let mut ax = [c(0.0, 0.0); 2];
        kernels::gemv(
            Order::ColMajor,
            Transpose::NoTrans,
            2,
            2,
            c(1.0, 0.0),
            &a0,
            2,
            &b,
            1,
            c(0.0, 0.0),
            &mut ax,
            1,
        );
        for (got, want) in ax.iter().zip(b0.iter()) {
            assert!((got - want).norm() < 1e-4);
        }
    }

    #[test]
    fn solve_reports_singular_matrix_as_failure() {
        let mut a = [z(1.0, 0.0), z(2.0, 0.0), z(2.0, 0.0), z(4.0, 0.0)];
        let mut b = [z(1.0, 0.0), z(1.0, 0.0)];
        let mut ipiv = [0i32; 2];
        let err = solve(2, 1, &mut a, 2, &mut ipiv, &mut b, 2).unwrap_err();
        assert!(err.status() > 0, "singularity must be a positive status");
        assert_eq!(err.routine, "gesv");
    }

    #[test]
    fn lstsq_two_step_protocol() {
        // Overdetermined 3x2 system with an exact solution x = [1, 2i].
        let a0 = [
            z(1.0, 0.0),
            z(0.0, 0.0),
            z(1.0, 0.0),
            z(0.0, 0.0),
            z(1.0, 0.0),
            z(1.0, 0.0),
        ];
        let x_true = [z(1.0, 0.0), z(0.0, 2.0)];
        // b = A x_true, rows of b = m = 3.
        let mut b = [z(0.0, 0.0); 3];
        kernels::gemv(
            Order::ColMajor,
            Transpose::NoTrans,
            3,
            2,
            z(1.0, 0.0),
            &a0,
            3,
            &x_true,
            1,
            z(0.0, 0.0),
            &mut b,
            1,
        );

        let mut a = a0;
        let lwork = lstsq_work_size(Transpose::NoTrans, 3, 2, 1, &mut a, 3, &mut b, 3).unwrap();
        assert!(lwork >= 2, "query must report at least min(m,n) + max(min(m,n), nrhs)");

        let mut work = vec![z(0.0, 0.0); lwork];
        lstsq_with_work(Transpose::NoTrans, 3, 2, 1, &mut a, 3, &mut b, 3, &mut work).unwrap();
        assert!((b[0] - x_true[0]).norm() < 1e-10);
        assert!((b[1] - x_true[1]).norm() < 1e-10);
    }

    #[test]
    fn lstsq_rejects_undersized_workspace_with_native_status() {
        let mut a = [z(1.0, 0.0), z(0.0, 0.0), z(0.0, 0.0), z(1.0, 0.0), z(0.0, 0.0), z(1.0, 0.0)];
        let mut b = [z(1.0, 0.0), z(1.0, 0.0), z(1.0, 0.0)];
        let mut work = [z(0.0, 0.0); 1];
        let err = lstsq_with_work(Transpose::NoTrans, 3, 2, 1, &mut a, 3, &mut b, 3, &mut work)
            .unwrap_err();
        assert!(err.status() < 0, "undersized lwork is an invalid-argument status");
    }

    #[test]
    fn lstsq_one_call_convenience() {
        let a0 = [z(2.0, 0.0), z(0.0, 0.0), z(0.0, 0.0), z(1.0, 0.0)];
        let x_true = [z(3.0, 0.0), z(0.0, -1.0)];
        let mut b = [z(6.0, 0.0), z(0.0, -1.0)];
        let mut a = a0;
        lstsq(Transpose::NoTrans, 2, 2, 1, &mut a, 2, &mut b, 2).unwrap();
        assert!((b[0] - x_true[0]).norm() < 1e-12);
        assert!((b[1] - x_true[1]).norm() < 1e-12);
    }

    #[test]
    fn svd_of_diagonal_matrix() {
        let mut a = [z(3.0, 0.0), z(0.0, 0.0), z(0.0, 0.0), z(1.0, 0.0)];
        let mut s = [0.0f64; 2];
        let mut u = [z(0.0, 0.0); 4];
        let mut vt = [z(0.0, 0.0); 4];
        svd(SvdJob::Economy, SvdJob::Economy, 2, 2, &mut a, 2, &mut s, &mut u, 2, &mut vt, 2)
            .unwrap();
        assert!((s[0] - 3.0).abs() < 1e-12);
        assert!((s[1] - 1.0).abs() < 1e-12);
        assert!(s[0] >= s[1], "singular values are descending");
    }

    #[test]
    fn svd_values_only() {
        let mut a = [z(0.0, 2.0), z(0.0, 0.0), z(0.0, 0.0), z(5.0, 0.0)];
        let mut s = [0.0f64; 2];
        let mut u: [Complex<f64>; 0] = [];
        let mut vt: [Complex<f64>; 0] = [];
        svd(SvdJob::Skip, SvdJob::Skip, 2, 2, &mut a, 2, &mut s, &mut u, 1, &mut vt, 1).unwrap();
        assert!((s[0] - 5.0).abs() < 1e-12);
        assert!((s[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn hermitian_eigenvalues_ascending() {
        // [[2, i], [-i, 2]] has eigenvalues 1 and 3.
        let mut a = [z(2.0, 0.0), z(0.0, -1.0), z(0.0, 1.0), z(2.0, 0.0)];
        let mut w = [0.0f64; 2];
        eig_hermitian(Vectors::Compute, Uplo::Lower, 2, &mut a, 2, &mut w).unwrap();
        assert!((w[0] - 1.0).abs() < 1e-10);
        assert!((w[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn schur_splits_conjugate_pair() {
        // Real-coefficient [[1, -2], [1, 3]] has eigenvalues 2 +/- i.
        let mut a = [z(1.0, 0.0), z(1.0, 0.0), z(-2.0, 0.0), z(3.0, 0.0)];
        let mut vs = [z(0.0, 0.0); 4];
        let mut wr = [0.0f64; 2];
        let mut wi = [0.0f64; 2];
        schur(Vectors::Compute, 2, &mut a, 2, &mut vs, 2, &mut wr, &mut wi).unwrap();
        assert!((wr[0] - 2.0).abs() < 1e-8, "matching real parts, got {:?}", wr);
        assert!((wr[1] - 2.0).abs() < 1e-8);
        assert!((wi[0] + wi[1]).abs() < 1e-8, "opposite-sign imaginary parts, got {:?}", wi);
        assert!((wi[0].abs() - 1.0).abs() < 1e-8);
    }

    #[test]
    fn schur_single_precision() {
        let c = |re: f32, im: f32| Complex::new(re, im);
        let mut a = [c(1.0, 0.0), c(1.0, 0.0), c(-2.0, 0.0), c(3.0, 0.0)];
        let mut vs: [Complex<f32>; 0] = [];
        let mut wr = [0.0f32; 2];
        let mut wi = [0.0f32; 2];
        schur(Vectors::Skip, 2, &mut a, 2, &mut vs, 1, &mut wr, &mut wi).unwrap();
        assert!((wr[0] - 2.0).abs() < 1e-3);
        assert!((wi[0] + wi[1]).abs() < 1e-3);
    }
}
