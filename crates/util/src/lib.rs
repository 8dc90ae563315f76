//! yum-util - utility functions over yum values.
//!
//! - [`clone`] / [`clone_with`] - deep structural copies
//! - [`assign`] / [`assign_all`] - shallow merge of own properties
//! - [`number`] - integer, float and parity predicates
//! - [`math`] - binary GCD and LCM, pairwise and folded

pub mod assign;
pub mod deep_clone;
pub mod math;
pub mod number;

pub use assign::{assign, assign_all};
pub use deep_clone::{clone, clone_with};
pub use math::{gcd, gcd_all, lcm, lcm_all};
pub use number::{is_even, is_float, is_integer, is_odd};
