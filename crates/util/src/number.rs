//! Number predicates.
//!
//! Integer tests coerce through a signed 32-bit integer, so values outside
//! the `i32` range are never integers and parity looks at the wrapped
//! value.

const TWO_32: f64 = 4_294_967_296.0;

/// Wraps `n` into the `i32` range the way bitwise operators coerce numbers.
/// Non-finite inputs map to 0.
pub fn to_int32(n: f64) -> i32 {
    if !n.is_finite() || n == 0.0 {
        return 0;
    }
    let wrapped = n.trunc().rem_euclid(TWO_32);
    if wrapped >= TWO_32 / 2.0 {
        (wrapped - TWO_32) as i32
    } else {
        wrapped as i32
    }
}

pub fn is_integer(n: f64) -> bool {
    f64::from(to_int32(n)) == n
}

/// Anything that is not an [`is_integer`], `NaN` and infinities included.
pub fn is_float(n: f64) -> bool {
    !is_integer(n)
}

pub fn is_odd(n: f64) -> bool {
    to_int32(n) & 1 != 0
}

pub fn is_even(n: f64) -> bool {
    to_int32(n) & 1 == 0
}
