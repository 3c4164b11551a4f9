//! Precision selection for generic entry points
//!
//! Public operations in this crate are generic over the real component type
//! of their complex buffers. The native backend only exists in two concrete
//! precisions, so every operation resolves its precision exactly once at the
//! call boundary and then dispatches statically within that branch.
//!
//! Instantiating an operation with anything other than `f32` or `f64` is a
//! configuration bug in the calling code; it is rejected with a panic on
//! first use rather than silently miscomputing.

use std::any::{type_name, TypeId};

/// The two precisions the native backend provides entry points for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// 32-bit real components (`Complex<f32>`, `c*` routines).
    Single,
    /// 64-bit real components (`Complex<f64>`, `z*` routines).
    Double,
}

impl Precision {
    /// Resolve the precision of a real component type.
    ///
    /// # Panics
    /// Panics if `T` is neither `f32` nor `f64`.
    pub fn of<T: 'static>() -> Precision {
        match Self::try_of::<T>() {
            Some(p) => p,
            None => panic!(
                "unsupported real component type {}: only f32 and f64 have native entry points",
                type_name::<T>()
            ),
        }
    }

    /// Resolve the precision of a real component type, or `None` if the type
    /// has no native entry points.
    pub fn try_of<T: 'static>() -> Option<Precision> {
        let id = TypeId::of::<T>();
        if id == TypeId::of::<f32>() {
            Some(Precision::Single)
        } else if id == TypeId::of::<f64>() {
            Some(Precision::Double)
        } else {
            None
        }
    }
}

/// Bit-copy a value between two types that have been proven identical.
///
/// Used after a `Precision` branch has established `T == f32` (or `f64`) to
/// move scalar results across the generic boundary without arithmetic
/// conversion.
///
/// # Panics
/// Panics if `A` and `B` are different types.
#[inline]
pub(crate) fn value_cast<A: Copy + 'static, B: Copy + 'static>(v: A) -> B {
    assert_eq!(
        TypeId::of::<A>(),
        TypeId::of::<B>(),
        "value_cast between distinct types"
    );
    unsafe { std::ptr::read(&v as *const A as *const B) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_both_supported_precisions() {
        assert_eq!(Precision::of::<f32>(), Precision::Single);
        assert_eq!(Precision::of::<f64>(), Precision::Double);
    }

    #[test]
    fn unsupported_type_is_rejected() {
        assert_eq!(Precision::try_of::<i32>(), None);
        assert_eq!(Precision::try_of::<half_stub::F16>(), None);
    }

    #[test]
    #[should_panic(expected = "unsupported real component type")]
    fn unsupported_type_panics_at_first_use() {
        let _ = Precision::of::<u8>();
    }

    #[test]
    fn value_cast_is_exact() {
        let x: f64 = 0.1f64;
        let y: f64 = value_cast(x);
        assert_eq!(x.to_bits(), y.to_bits());
    }

    mod half_stub {
        // Stand-in for a third float type a caller might wrongly instantiate with.
        #[derive(Clone, Copy)]
        pub struct F16(pub u16);
    }
}
