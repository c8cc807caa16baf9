//! Library to calculate skill-based difficulty and performance attributes for
//! [osu!standard] maps.
//!
//! ## Description
//!
//! Instead of accumulating strains per skill, `rosu-skill-pp` models how
//! likely a player of a given skill level is to hit each note and solves for
//! the skill level that is required to play a map with a given amount of
//! misses.
//!
//! - **Aim** models the aim error as a bivariate normal distribution whose
//!   deviation grows with the movement and shrinks with the available time.
//!   The skill level is found through root finding.
//! - **Tap** is an exponentially decaying strain over the time between notes.
//! - **Accuracy** estimates the player's hit-timing deviation from their
//!   judgments through maximum likelihood.
//!
//! Aim and tap star ratings are combined through a 3-norm, and the
//! performance points are the sum of all three skills.
//!
//! ## Usage
//!
//! ```no_run
//! use rosu_skill_pp::{Difficulty, NoteSequence, Performance};
//!
//! // Decode the map
//! let map = NoteSequence::from_path("./resources/test.osu").unwrap();
//!
//! // Calculate difficulty attributes
//! let diff_attrs = Difficulty::new()
//!     .mods(16) // HR
//!     .calculate(&map);
//!
//! let stars = diff_attrs.stars();
//!
//! // Calculate performance attributes
//! let perf_attrs = Performance::new(&map)
//!     .mods(16) // HR, same as before
//!     .n100(3)
//!     .n50(1)
//!     .calculate();
//!
//! let pp = perf_attrs.pp();
//!
//! // Re-use the previous attributes for a full combo on the same settings
//! let max_pp = perf_attrs.performance()
//!     .mods(16)
//!     .calculate()
//!     .pp();
//!
//! println!("Stars: {stars} | PP: {pp}/{max_pp}");
//! ```
//!
//! ## Mod variants
//!
//! [`variants::calculate_all`] evaluates the nine combinations of
//! HT/NM/DT and EZ/NM/HR in parallel.
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Solved skill levels and fitted deviations are logged through `tracing::debug`, convergence failures through `tracing::warn`. Errors encountered during beatmap decoding are logged as well. | [`tracing`]
//!
//! [osu!standard]: https://osu.ppy.sh/home
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::cast_possible_wrap,
    clippy::doc_markdown
)]

#[macro_use]
mod util;

#[doc(inline)]
pub use self::{
    difficulty::{Calibration, Difficulty, DifficultyAttributes},
    model::{
        beatmap::{ConvertError, NoteSequence},
        mods::GameMods,
        note::Note,
    },
    performance::{Judgments, Performance, PerformanceAttributes},
};

/// Types for difficulty calculation.
pub mod difficulty;

/// Types for performance calculation.
pub mod performance;

/// Types used in and around this crate.
pub mod model;

pub mod variants;
