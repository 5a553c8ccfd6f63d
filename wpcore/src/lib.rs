//! Boundary layer of the WP calculator: input validation, persisted configuration, and the
//! [`session::Calculator`] that turns raw program text and a postcondition into a
//! [`session::Report`].

pub mod conf;
pub mod error;
pub mod magic;
pub mod session;
pub mod validate;

pub use conf::CalculatorConfig;
pub use error::{CalcError, CalcResult};
pub use session::{Calculator, Report};
