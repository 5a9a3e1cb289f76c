pub mod breaks;
pub mod hours;
pub mod rounding;
