//! Backend registry swap, isolated in its own test binary because the
//! dispatcher is process-global.

use std::sync::Arc;

use complex_bridge::{backend_name, kernels, reset_backend, set_backend, NativeBackend, Order, Transpose};
use num_complex::Complex;

/// A stand-in for an external native library: the two magnitude-sum entry
/// points return sentinels, everything else is never reached by this test.
struct SentinelBackend;

#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
impl NativeBackend for SentinelBackend {
    fn name(&self) -> &'static str { "sentinel" }

    unsafe fn scasum(&self, _: i32, _: *const Complex<f32>, _: i32) -> f32 { 32.0 }
    unsafe fn scnrm2(&self, _: i32, _: *const Complex<f32>, _: i32) -> f32 { unimplemented!() }
    unsafe fn cscal(&self, _: i32, _: Complex<f32>, _: *mut Complex<f32>, _: i32) { unimplemented!() }
    unsafe fn caxpby(&self, _: i32, _: Complex<f32>, _: *const Complex<f32>, _: i32, _: Complex<f32>, _: *mut Complex<f32>, _: i32) { unimplemented!() }
    unsafe fn icamax(&self, _: i32, _: *const Complex<f32>, _: i32) -> usize { unimplemented!() }
    unsafe fn isamax(&self, _: i32, _: *const f32, _: i32) -> usize { unimplemented!() }
    unsafe fn cdotu(&self, _: i32, _: *const Complex<f32>, _: i32, _: *const Complex<f32>, _: i32) -> Complex<f32> { unimplemented!() }
    unsafe fn cdotc(&self, _: i32, _: *const Complex<f32>, _: i32, _: *const Complex<f32>, _: i32) -> Complex<f32> { unimplemented!() }

    unsafe fn dzasum(&self, _: i32, _: *const Complex<f64>, _: i32) -> f64 { 64.0 }
    unsafe fn dznrm2(&self, _: i32, _: *const Complex<f64>, _: i32) -> f64 { unimplemented!() }
    unsafe fn zscal(&self, _: i32, _: Complex<f64>, _: *mut Complex<f64>, _: i32) { unimplemented!() }
    unsafe fn zaxpby(&self, _: i32, _: Complex<f64>, _: *const Complex<f64>, _: i32, _: Complex<f64>, _: *mut Complex<f64>, _: i32) { unimplemented!() }
    unsafe fn izamax(&self, _: i32, _: *const Complex<f64>, _: i32) -> usize { unimplemented!() }
    unsafe fn idamax(&self, _: i32, _: *const f64, _: i32) -> usize { unimplemented!() }
    unsafe fn zdotu(&self, _: i32, _: *const Complex<f64>, _: i32, _: *const Complex<f64>, _: i32) -> Complex<f64> { unimplemented!() }
    unsafe fn zdotc(&self, _: i32, _: *const Complex<f64>, _: i32, _: *const Complex<f64>, _: i32) -> Complex<f64> { unimplemented!() }

    unsafe fn cgemv(&self, _: Order, _: Transpose, _: i32, _: i32, _: Complex<f32>, _: *const Complex<f32>, _: i32, _: *const Complex<f32>, _: i32, _: Complex<f32>, _: *mut Complex<f32>, _: i32) { unimplemented!() }
    unsafe fn cgemm(&self, _: Order, _: Transpose, _: Transpose, _: i32, _: i32, _: i32, _: Complex<f32>, _: *const Complex<f32>, _: i32, _: *const Complex<f32>, _: i32, _: Complex<f32>, _: *mut Complex<f32>, _: i32) { unimplemented!() }
    unsafe fn cgeru(&self, _: Order, _: i32, _: i32, _: Complex<f32>, _: *const Complex<f32>, _: i32, _: *const Complex<f32>, _: i32, _: *mut Complex<f32>, _: i32) { unimplemented!() }
    unsafe fn cgerc(&self, _: Order, _: i32, _: i32, _: Complex<f32>, _: *const Complex<f32>, _: i32, _: *const Complex<f32>, _: i32, _: *mut Complex<f32>, _: i32) { unimplemented!() }

    unsafe fn zgemv(&self, _: Order, _: Transpose, _: i32, _: i32, _: Complex<f64>, _: *const Complex<f64>, _: i32, _: *const Complex<f64>, _: i32, _: Complex<f64>, _: *mut Complex<f64>, _: i32) { unimplemented!() }
    unsafe fn zgemm(&self, _: Order, _: Transpose, _: Transpose, _: i32, _: i32, _: i32, _: Complex<f64>, _: *const Complex<f64>, _: i32, _: *const Complex<f64>, _: i32, _: Complex<f64>, _: *mut Complex<f64>, _: i32) { unimplemented!() }
    unsafe fn zgeru(&self, _: Order, _: i32, _: i32, _: Complex<f64>, _: *const Complex<f64>, _: i32, _: *const Complex<f64>, _: i32, _: *mut Complex<f64>, _: i32) { unimplemented!() }
    unsafe fn zgerc(&self, _: Order, _: i32, _: i32, _: Complex<f64>, _: *const Complex<f64>, _: i32, _: *const Complex<f64>, _: i32, _: *mut Complex<f64>, _: i32) { unimplemented!() }

    unsafe fn cgesv(&self, _: i32, _: i32, _: *mut Complex<f32>, _: i32, _: *mut i32, _: *mut Complex<f32>, _: i32) -> i32 { unimplemented!() }
    unsafe fn cgels(&self, _: u8, _: i32, _: i32, _: i32, _: *mut Complex<f32>, _: i32, _: *mut Complex<f32>, _: i32, _: *mut Complex<f32>, _: i32) -> i32 { unimplemented!() }
    unsafe fn cgesvd(&self, _: u8, _: u8, _: i32, _: i32, _: *mut Complex<f32>, _: i32, _: *mut f32, _: *mut Complex<f32>, _: i32, _: *mut Complex<f32>, _: i32, _: *mut Complex<f32>, _: i32, _: *mut f32) -> i32 { unimplemented!() }
    unsafe fn cheev(&self, _: u8, _: u8, _: i32, _: *mut Complex<f32>, _: i32, _: *mut f32, _: *mut Complex<f32>, _: i32, _: *mut f32) -> i32 { unimplemented!() }
    unsafe fn cgees(&self, _: u8, _: i32, _: *mut Complex<f32>, _: i32, _: *mut Complex<f32>, _: *mut Complex<f32>, _: i32, _: *mut Complex<f32>, _: i32, _: *mut f32) -> i32 { unimplemented!() }

    unsafe fn zgesv(&self, _: i32, _: i32, _: *mut Complex<f64>, _: i32, _: *mut i32, _: *mut Complex<f64>, _: i32) -> i32 { unimplemented!() }
    unsafe fn zgels(&self, _: u8, _: i32, _: i32, _: i32, _: *mut Complex<f64>, _: i32, _: *mut Complex<f64>, _: i32, _: *mut Complex<f64>, _: i32) -> i32 { unimplemented!() }
    unsafe fn zgesvd(&self, _: u8, _: u8, _: i32, _: i32, _: *mut Complex<f64>, _: i32, _: *mut f64, _: *mut Complex<f64>, _: i32, _: *mut Complex<f64>, _: i32, _: *mut Complex<f64>, _: i32, _: *mut f64) -> i32 { unimplemented!() }
    unsafe fn zheev(&self, _: u8, _: u8, _: i32, _: *mut Complex<f64>, _: i32, _: *mut f64, _: *mut Complex<f64>, _: i32, _: *mut f64) -> i32 { unimplemented!() }
    unsafe fn zgees(&self, _: u8, _: i32, _: *mut Complex<f64>, _: i32, _: *mut Complex<f64>, _: *mut Complex<f64>, _: i32, _: *mut Complex<f64>, _: i32, _: *mut f64) -> i32 { unimplemented!() }

    unsafe fn ctoz(&self, _: *const Complex<f32>, _: usize, _: *mut f32, _: *mut f32, _: usize, _: usize) { unimplemented!() }
    unsafe fn ztoc(&self, _: *const f32, _: *const f32, _: usize, _: *mut Complex<f32>, _: usize, _: usize) { unimplemented!() }
    unsafe fn zvabs(&self, _: *const f32, _: *const f32, _: usize, _: *mut f32, _: usize, _: usize) { unimplemented!() }
    unsafe fn zvconj(&self, _: *const f32, _: *const f32, _: usize, _: *mut f32, _: *mut f32, _: usize, _: usize) { unimplemented!() }
    unsafe fn zvmul(&self, _: *const f32, _: *const f32, _: usize, _: *const f32, _: *const f32, _: usize, _: *mut f32, _: *mut f32, _: usize, _: usize) { unimplemented!() }
    unsafe fn zvdiv(&self, _: *const f32, _: *const f32, _: usize, _: *const f32, _: *const f32, _: usize, _: *mut f32, _: *mut f32, _: usize, _: usize) { unimplemented!() }

    unsafe fn ctoz_d(&self, _: *const Complex<f64>, _: usize, _: *mut f64, _: *mut f64, _: usize, _: usize) { unimplemented!() }
    unsafe fn ztoc_d(&self, _: *const f64, _: *const f64, _: usize, _: *mut Complex<f64>, _: usize, _: usize) { unimplemented!() }
    unsafe fn zvabs_d(&self, _: *const f64, _: *const f64, _: usize, _: *mut f64, _: usize, _: usize) { unimplemented!() }
    unsafe fn zvconj_d(&self, _: *const f64, _: *const f64, _: usize, _: *mut f64, _: *mut f64, _: usize, _: usize) { unimplemented!() }
    unsafe fn zvmul_d(&self, _: *const f64, _: *const f64, _: usize, _: *const f64, _: *const f64, _: usize, _: *mut f64, _: *mut f64, _: usize, _: usize) { unimplemented!() }
    unsafe fn zvdiv_d(&self, _: *const f64, _: *const f64, _: usize, _: *const f64, _: *const f64, _: usize, _: *mut f64, _: *mut f64, _: usize, _: usize) { unimplemented!() }
}

#[test]
fn installed_backend_receives_precision_dispatched_calls() {
    assert_eq!(backend_name(), "reference (pure Rust)");

    set_backend(Arc::new(SentinelBackend));
    assert_eq!(backend_name(), "sentinel");

    // Each precision reaches its own entry point of the installed backend.
    let x32 = [Complex::new(1.0f32, 1.0)];
    let x64 = [Complex::new(1.0f64, 1.0)];
    assert_eq!(kernels::asum(1, &x32, 1), 32.0);
    assert_eq!(kernels::asum(1, &x64, 1), 64.0);

    // Back to the default: real results again.
    reset_backend();
    assert_eq!(backend_name(), "reference (pure Rust)");
    assert_eq!(kernels::asum(1, &x64, 1), 2.0);
}
