//! Native backend contract and runtime dispatcher
//!
//! The crate's boundary is a dense linear-algebra backend exposing, per
//! precision, BLAS-style kernels, LAPACK-style factorizations and vDSP-style
//! split-complex vector primitives. [`NativeBackend`] states that call
//! contract verbatim: raw pointers, explicit counts and strides, column-major
//! leading dimensions and flag bytes for the factorizations, integer status
//! codes returned unchanged.
//!
//! Method naming follows the native libraries: `c*`/`z*` for the
//! single/double complex BLAS and LAPACK entry points, `isamax`/`idamax` for
//! the real argmax kernels the infinity-norm policy is built from, and
//! vDSP-style names (`ctoz`, `ztoc`, `zvabs`, `zvconj`, `zvmul`, `zvdiv`)
//! with a `_d` suffix for the double-precision split primitives.
//!
//! A process-global dispatcher holds the active backend. The default is the
//! pure-Rust [`ReferenceBackend`](crate::reference::ReferenceBackend); a
//! binding to an external native library is installed by implementing the
//! trait and calling [`set_backend`]. Adapter operations read the dispatcher
//! exactly once at their entry point.

use num_complex::Complex;
use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use crate::reference::ReferenceBackend;

/// Memory order of a matrix argument, CBLAS numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Order {
    RowMajor = 101,
    ColMajor = 102,
}

/// Transpose flag of a matrix argument, CBLAS numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Transpose {
    NoTrans = 111,
    Trans = 112,
    ConjTrans = 113,
}

impl Transpose {
    /// The flag byte the LAPACK-family routines expect.
    pub(crate) fn flag(self) -> u8 {
        match self {
            Transpose::NoTrans => b'N',
            Transpose::Trans => b'T',
            Transpose::ConjTrans => b'C',
        }
    }
}

/// The native backend call contract, both precisions.
///
/// All methods are thin mirrors of the corresponding native entry points.
/// Pointer arguments must be valid for the counts, strides and leading
/// dimensions passed alongside them; that is the caller's contract exactly as
/// it is with the native libraries. LAPACK-family methods operate on
/// column-major storage and return the native status code: `0` success,
/// `> 0` numerical failure, `< 0` invalid argument (negated argument
/// position). Passing `lwork == -1` to a workspace-consuming routine performs
/// a size query: the optimal count is written to `work[0]` and nothing else
/// is touched.
#[allow(clippy::too_many_arguments, clippy::missing_safety_doc)]
pub trait NativeBackend: Send + Sync {
    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;

    // ---- level 1, single precision -------------------------------------

    unsafe fn scasum(&self, n: i32, x: *const Complex<f32>, incx: i32) -> f32;
    unsafe fn scnrm2(&self, n: i32, x: *const Complex<f32>, incx: i32) -> f32;
    unsafe fn cscal(&self, n: i32, alpha: Complex<f32>, x: *mut Complex<f32>, incx: i32);
    unsafe fn caxpby(
        &self,
        n: i32,
        alpha: Complex<f32>,
        x: *const Complex<f32>,
        incx: i32,
        beta: Complex<f32>,
        y: *mut Complex<f32>,
        incy: i32,
    );
    unsafe fn icamax(&self, n: i32, x: *const Complex<f32>, incx: i32) -> usize;
    unsafe fn isamax(&self, n: i32, x: *const f32, incx: i32) -> usize;
    unsafe fn cdotu(
        &self,
        n: i32,
        x: *const Complex<f32>,
        incx: i32,
        y: *const Complex<f32>,
        incy: i32,
    ) -> Complex<f32>;
    unsafe fn cdotc(
        &self,
        n: i32,
        x: *const Complex<f32>,
        incx: i32,
        y: *const Complex<f32>,
        incy: i32,
    ) -> Complex<f32>;

    // ---- level 1, double precision -------------------------------------

    unsafe fn dzasum(&self, n: i32, x: *const Complex<f64>, incx: i32) -> f64;
    unsafe fn dznrm2(&self, n: i32, x: *const Complex<f64>, incx: i32) -> f64;
    unsafe fn zscal(&self, n: i32, alpha: Complex<f64>, x: *mut Complex<f64>, incx: i32);
    unsafe fn zaxpby(
        &self,
        n: i32,
        alpha: Complex<f64>,
        x: *const Complex<f64>,
        incx: i32,
        beta: Complex<f64>,
        y: *mut Complex<f64>,
        incy: i32,
    );
    unsafe fn izamax(&self, n: i32, x: *const Complex<f64>, incx: i32) -> usize;
    unsafe fn idamax(&self, n: i32, x: *const f64, incx: i32) -> usize;
    unsafe fn zdotu(
        &self,
        n: i32,
        x: *const Complex<f64>,
        incx: i32,
        y: *const Complex<f64>,
        incy: i32,
    ) -> Complex<f64>;
    unsafe fn zdotc(
        &self,
        n: i32,
        x: *const Complex<f64>,
        incx: i32,
        y: *const Complex<f64>,
        incy: i32,
    ) -> Complex<f64>;

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
    );
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
    );
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
    );
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
    );

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
    );
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
    );
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
    );
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
    );

    // ---- factorizations, single precision (column-major) ---------------

    unsafe fn cgesv(
        &self,
        n: i32,
        nrhs: i32,
        a: *mut Complex<f32>,
        lda: i32,
        ipiv: *mut i32,
        b: *mut Complex<f32>,
        ldb: i32,
    ) -> i32;
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
    ) -> i32;
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
        rwork: *mut f32,
    ) -> i32;
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
        rwork: *mut f32,
    ) -> i32;
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
        rwork: *mut f32,
    ) -> i32;

    // ---- factorizations, double precision (column-major) ---------------

    unsafe fn zgesv(
        &self,
        n: i32,
        nrhs: i32,
        a: *mut Complex<f64>,
        lda: i32,
        ipiv: *mut i32,
        b: *mut Complex<f64>,
        ldb: i32,
    ) -> i32;
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
    ) -> i32;
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
        rwork: *mut f64,
    ) -> i32;
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
        rwork: *mut f64,
    ) -> i32;
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
        rwork: *mut f64,
    ) -> i32;

    // ---- split-complex vector primitives, single precision -------------
    //
    // Interleaved strides are in complex elements; split strides apply to
    // both halves of a (real, imaginary) pair, vDSP style. `zvdiv` takes the
    // denominator first, matching the native convention.

    unsafe fn ctoz(
        &self,
        x: *const Complex<f32>,
        incx: usize,
        re: *mut f32,
        im: *mut f32,
        incz: usize,
        n: usize,
    );
    unsafe fn ztoc(
        &self,
        re: *const f32,
        im: *const f32,
        incz: usize,
        y: *mut Complex<f32>,
        incy: usize,
        n: usize,
    );
    unsafe fn zvabs(
        &self,
        re: *const f32,
        im: *const f32,
        inca: usize,
        out: *mut f32,
        incout: usize,
        n: usize,
    );
    unsafe fn zvconj(
        &self,
        are: *const f32,
        aim: *const f32,
        inca: usize,
        cre: *mut f32,
        cim: *mut f32,
        incc: usize,
        n: usize,
    );
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
    );
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
    );

    // ---- split-complex vector primitives, double precision -------------

    unsafe fn ctoz_d(
        &self,
        x: *const Complex<f64>,
        incx: usize,
        re: *mut f64,
        im: *mut f64,
        incz: usize,
        n: usize,
    );
    unsafe fn ztoc_d(
        &self,
        re: *const f64,
        im: *const f64,
        incz: usize,
        y: *mut Complex<f64>,
        incy: usize,
        n: usize,
    );
    unsafe fn zvabs_d(
        &self,
        re: *const f64,
        im: *const f64,
        inca: usize,
        out: *mut f64,
        incout: usize,
        n: usize,
    );
    unsafe fn zvconj_d(
        &self,
        are: *const f64,
        aim: *const f64,
        inca: usize,
        cre: *mut f64,
        cim: *mut f64,
        incc: usize,
        n: usize,
    );
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
    );
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
    );
}

/// Global backend dispatcher (thread-safe).
static DISPATCHER: Lazy<RwLock<Arc<dyn NativeBackend>>> =
    Lazy::new(|| RwLock::new(Arc::new(ReferenceBackend)));

/// Install a backend for all subsequent adapter calls.
pub fn set_backend(backend: Arc<dyn NativeBackend>) {
    let mut guard = DISPATCHER.write().unwrap();
    *guard = backend;
}

/// Reset the dispatcher to the default pure-Rust reference backend.
pub fn reset_backend() {
    set_backend(Arc::new(ReferenceBackend));
}

/// Name of the currently installed backend.
pub fn backend_name() -> &'static str {
    DISPATCHER.read().unwrap().name()
}

/// Resolve the active backend once, at an adapter entry point.
pub(crate) fn current() -> Arc<dyn NativeBackend> {
    DISPATCHER.read().unwrap().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_is_reference() {
        assert_eq!(backend_name(), "reference (pure Rust)");
    }

    #[test]
    fn transpose_flags_match_lapack_bytes() {
        assert_eq!(Transpose::NoTrans.flag(), b'N');
        assert_eq!(Transpose::Trans.flag(), b'T');
        assert_eq!(Transpose::ConjTrans.flag(), b'C');
    }
}
