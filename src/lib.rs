//! Stateless helpers for the sorting visualizer front-end.
//!
//! The UI layer owns the arrays being sorted and the colors used to draw
//! them; this crate only supplies the small pieces of logic it calls into:
//! shuffling and swapping bars, checking whether a range is already sorted,
//! and blending two colors.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`random`] | Injected uniform randomness via [`random::RandomSource`] |
//! | [`sequence`] | In-place [`sequence::shuffle`], [`sequence::swap`] and [`sequence::is_sorted`] |
//! | [`color`] | [`color::Color`] value type, [`color::mix_colors`] and hex interop |

pub mod color;
pub mod random;
pub mod sequence;

pub use color::{Color, ColorError, mix_colors};
pub use random::{RandomSource, seeded_source, thread_source};
pub use sequence::{is_sorted, shuffle, swap};
