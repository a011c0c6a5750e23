//! Course Content
//!
//! Static subject and topic catalogues.

pub mod maths;

pub use maths::{Difficulty, Subject, Topic, MATHS, MATHS_TOPICS};
