//! Lomdim - progress engine for a children's learning game suite
//!
//! Two parts are exposed to the game screens:
//!
//! 1. **Progress** ([`progress`]): player profiles with XP, daily activity,
//!    accuracy per subject, unlocked levels and trophies, persisted through a
//!    key-value storage port. Ranks and trophies are derived from static
//!    tables that can be replaced through [`config`].
//!
//! 2. **Content** ([`content`]): generators for arithmetic questions, answer
//!    options, number sequences, comparisons, memory decks, vocabulary,
//!    sorting and feeding rounds. All randomness comes from a caller-supplied
//!    `rand::Rng`.

pub mod config;
pub mod content;
pub mod fsutil;
pub mod progress;
