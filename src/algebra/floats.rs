#![allow(non_snake_case)]
use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for floating point types used in symsolve.
///
/// All floating point calculations are represented internally on values
/// implementing the `FloatT` trait, with implementations provided for f32
/// and f64 native types.   It should be possible to use any other floating
/// point type provided that it satisfies the trait bounds below.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent trait bounds.
pub trait FloatT:
    'static
    + Send
    + Float
    + FloatConst
    + NumAssign
    + Default
    + FromPrimitive
    + Display
    + LowerExp
    + Debug
    + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Float
        + FloatConst
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}

/// Trait for converting Rust primitives to [`FloatT`](crate::algebra::FloatT)
///
/// This convenience trait is implemented on f32/64 and u32/64/usize.  It is
/// used internally for converting constant primitives and loop indices
/// to [`FloatT`](crate::algebra::FloatT), and by the
/// [solver settings](crate::solver::IterativeSettings) for converting
/// defaults of primitive type.

// NB: `AsFloatT` lets us write (6.0).as_T() on constants,
// rather than T::from_f64(6.0).unwrap() everywhere
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: std::ops::Mul<T, Output = T> + FromPrimitive + 'static,
        {
            #[inline]
            fn as_T(&self) -> T {
                T::$ident(*self).unwrap()
            }
        }
    };
}
impl_as_FloatT!(u32, from_u32);
impl_as_FloatT!(u64, from_u64);
impl_as_FloatT!(usize, from_usize);
impl_as_FloatT!(f32, from_f32);
impl_as_FloatT!(f64, from_f64);

#[test]
fn test_as_float() {
    let x: f64 = (3usize).as_T();
    assert_eq!(x, 3.0);
    let y: f32 = (0.5f64).as_T();
    assert_eq!(y, 0.5f32);
}
