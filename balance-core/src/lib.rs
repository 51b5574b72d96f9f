//! The term model and universal-operation engine behind a balance-scale view of a linear
//! equation.
//!
//! Each side of the equation is a [`Plate`] holding at most one combined variable term and one
//! combined constant term, each in the slot of a [`TermCreator`]. A [`UniversalOperation`] such as
//! `× 2` or `- 3x` is applied to every creator on both sides by the [`Engine`], which rolls the
//! whole scale back if any resulting numerator or denominator grows past the configured limit.
//!
//! All arithmetic is exact; see [`Fraction`].
//!
//! ```
//! use balance_core::{Engine, EngineConfig, Operator, Scale, Side, Term, UniversalOperation, Variable};
//!
//! // 2x + 3 = 11
//! let x = Variable::new("x", 4);
//! let mut scale = Scale::new(&x);
//! scale.plate_mut(Side::Left).add_term(Term::variable(2, &x));
//! scale.plate_mut(Side::Left).add_term(Term::constant(3));
//! scale.plate_mut(Side::Right).add_term(Term::constant(11));
//!
//! let mut engine = Engine::new(scale, EngineConfig::default());
//! engine.apply(UniversalOperation::new(Operator::Minus, Term::constant(3)), &mut ()).unwrap();
//! engine.apply(UniversalOperation::new(Operator::Divide, Term::constant(2)), &mut ()).unwrap();
//! assert_eq!(engine.scale().to_string(), "x = 4");
//! ```

pub mod config;
pub mod creator;
pub mod engine;
pub mod error;
pub mod fmt;
pub mod fraction;
pub mod operation;
pub mod primitive;
pub mod scale;
pub mod snapshot;
pub mod term;
pub mod variable;

pub use config::{EngineConfig, EngineConfigBuilder};
pub use creator::{CreatorId, CreatorKind, CreatorOutcome, Side, TermCreator};
pub use engine::{Applied, ApplyError, Engine, EngineEvent, EventCollector};
pub use fraction::Fraction;
pub use operation::{check_supported, is_supported_operation, Operator, UniversalOperation};
pub use scale::{Plate, Scale};
pub use snapshot::{Snapshot, SnapshotCollection};
pub use term::{ConstantTerm, ObjectTerm, Term, VariableTerm};
pub use variable::{ObjectVariable, Variable};
