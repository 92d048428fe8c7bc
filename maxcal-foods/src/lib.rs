//! Food catalog for the maximum-calorie selection problem.
//!
//! Everything the solvers consume and produce lives here: the catalog items,
//! the validated capacity, the selection returned by a solver, and the
//! plumbing around them (database loading, filtering, reporting,
//! verification and seeded catalog generation).

mod database;
pub use database::*;
mod generate;
pub use generate::*;
mod item;
pub use item::*;
mod selection;
pub use selection::*;
