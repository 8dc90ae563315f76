//! Greatest common divisor and least common multiple.

use yum_value::ValueError;

/// Binary (Stein's) GCD. `gcd(u, 0)` is `u`, `gcd(0, v)` is `v`.
pub fn gcd(mut u: u64, mut v: u64) -> u64 {
    if u == 0 || v == 0 {
        return u | v;
    }
    let shift = (u | v).trailing_zeros();
    u >>= u.trailing_zeros();
    loop {
        v >>= v.trailing_zeros();
        if u > v {
            std::mem::swap(&mut u, &mut v);
        }
        v -= u;
        if v == 0 {
            break;
        }
    }
    u << shift
}

/// Least common multiple; 0 when either argument is 0.
pub fn lcm(u: u64, v: u64) -> Result<u64, ValueError> {
    if u == 0 || v == 0 {
        return Ok(0);
    }
    (u / gcd(u, v)).checked_mul(v).ok_or(ValueError::Overflow)
}

/// GCD folded over a sequence; 0 for an empty one.
pub fn gcd_all<I: IntoIterator<Item = u64>>(values: I) -> u64 {
    values.into_iter().fold(0, gcd)
}

/// LCM folded over a sequence; 1 for an empty one.
pub fn lcm_all<I: IntoIterator<Item = u64>>(values: I) -> Result<u64, ValueError> {
    values.into_iter().try_fold(1, lcm)
}
