mod cholesky;
mod core;
mod generators;
mod gemv;
pub use self::cholesky::*;
pub use self::core::*;
