//! Procedurally generated linear-equation challenges for the balance scale.
//!
//! A [`Challenge`] is an equation `a·x + b = m·x + n` together with its integer solution. Each of
//! the five [`Level`]s has a [`ChallengeGenerator`] that produces well-formed, non-degenerate
//! challenges of increasing difficulty, and never the same solution twice in a row.
//!
//! ```
//! use balance_challenge::{Challenge, ChallengeGenerator, Level};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut generator = Level::Three.generator(StdRng::seed_from_u64(0));
//! let challenge = generator.next_challenge();
//! assert!(challenge.is_balanced());
//!
//! let debug = Challenge::from_debug_str("-7,2,4,1,0,1,-17,1,6").unwrap();
//! assert_eq!(debug.to_string(), "-7/2x + 4 = -17");
//! ```

pub mod challenge;
pub mod error;
pub mod generator;
pub mod random;

pub use challenge::Challenge;
pub use generator::{ChallengeGenerator, GeneratorState, Level};
pub use random::RandomSource;
