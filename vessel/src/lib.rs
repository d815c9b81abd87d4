//! Two small value containers, [`Optional`] and [`Outcome`], which can also be consumed as
//! zero-or-one element sequences and rebuilt from a fold through the [`Builder`] protocol.
//!
//! [`Optional`]: optional::Optional
//! [`Outcome`]: outcome::Outcome
//! [`Builder`]: build::Builder
//!
//! ```
//! # #[cfg(feature = "macros")] {
//! use vessel::prelude::*;
//!
//! let product: Outcome<&str, i32> = comprehend!(Outcome::new() => x * y,
//!     for x in [1, 2, 3],
//!     for y in Outcome::success(2)?
//! );
//! assert_eq!(product, Outcome::success(6));
//!
//! let first: Outcome<&str, i32> = comprehend!(Outcome::new() => x,
//!     for x in [1, 2, 3],
//!     for _ in (if x == 2 { Outcome::failure("two") } else { Outcome::success(()) })?
//! );
//! assert_eq!(first, Outcome::failure("two"));
//! # }
//! ```

mod convert;

pub mod build;
pub mod error;
pub mod optional;
pub mod outcome;
pub mod sequence;
pub mod source;

#[cfg(feature = "macros")]
pub use vessel_macros as macros;

/// Useful exports to get started quickly
pub mod prelude {
    pub use crate::{
        build::{Absorb, Buildable, Builder, OptionalBuilder, OutcomeBuilder, Stop},
        error::DescriptorError,
        optional::Optional,
        outcome::{Fault, Outcome},
        sequence::SequenceView,
        source::{Source, Step},
    };
    #[cfg(feature = "macros")]
    pub use vessel_macros::*;
}
