//! Least-squares walkthrough: the explicit two-step workspace protocol.
//!
//! Fits complex coefficients to an overdetermined system, querying the
//! backend for its workspace requirement before the real call.

use complex_bridge::{factor, kernels, Order, Transpose};
use num_complex::Complex;

fn main() {
    let z = |re: f64, im: f64| Complex::new(re, im);

    // 4x2 design matrix, column-major.
    let a0 = [
        z(1.0, 0.0),
        z(1.0, 0.0),
        z(1.0, 0.0),
        z(1.0, 0.0),
        z(0.0, 1.0),
        z(1.0, 1.0),
        z(2.0, 1.0),
        z(3.0, 1.0),
    ];
    let x_true = [z(0.5, -1.0), z(2.0, 0.25)];

    // Right-hand side b = A x, length max(m, n) rows.
    let mut b = [z(0.0, 0.0); 4];
    kernels::gemv(
        Order::ColMajor,
        Transpose::NoTrans,
        4,
        2,
        z(1.0, 0.0),
        &a0,
        4,
        &x_true,
        1,
        z(0.0, 0.0),
        &mut b,
        1,
    );

    let mut a = a0;
    let lwork = factor::lstsq_work_size(Transpose::NoTrans, 4, 2, 1, &mut a, 4, &mut b, 4)
        .expect("workspace query failed");
    println!("backend asks for {} workspace elements", lwork);

    let mut work = vec![z(0.0, 0.0); lwork];
    factor::lstsq_with_work(Transpose::NoTrans, 4, 2, 1, &mut a, 4, &mut b, 4, &mut work)
        .expect("least-squares solve failed");

    println!("recovered coefficients:");
    for (i, (got, want)) in b.iter().take(2).zip(x_true.iter()).enumerate() {
        println!("  x[{}] = {:.6} + {:.6}i   (true {} + {}i)", i, got.re, got.im, want.re, want.im);
    }
}
