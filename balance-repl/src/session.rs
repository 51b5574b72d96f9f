//! The state of the host: the engine, the current challenge and the generator it came from.

use balance_challenge::{Challenge, ChallengeGenerator, Level};
use balance_core::{Engine, EngineConfig, EngineEvent, Scale, Term, UniversalOperation, Variable};
use balance_core::scale::VARIABLE_CREATOR;
use balance_error::Error;
use crate::command::Command;
use crate::error::{ChallengeTooLarge, NoSnapshot, SnapshotsFull};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{cmp::Ordering, ops::Range, rc::Rc};
use tracing::info;

/// The commands understood by the host.
pub const HELP: &str = "\
operations, applied to both sides:
  + 3, - 2x, * -1/2, / 4    the operand is a number or a multiple of x
commands:
  new                       generate the next challenge
  level <1-5>               switch level and generate a challenge
  challenge <9 integers>    load a debug challenge: a_num,a_den,b_num,b_den,m_num,m_den,n_num,n_den,x
  x <value>                 set the value of x
  show                      show the scale
  derivation                show how the challenge was generated
  save                      save a snapshot of the scale
  restore <place>           restore a saved snapshot
  history                   list the operations applied so far
  clear                     put the current challenge back on the scale
  help                      show this message
  quit                      leave
";

/// What the host should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the output and read the next command.
    Continue(String),

    /// Leave the host.
    Quit,
}

/// A balance scale holding the current challenge, and the generator producing the next ones.
pub struct Session {
    variable: Rc<Variable>,
    engine: Engine,
    rng: StdRng,
    generator: Box<dyn ChallengeGenerator>,
    challenge: Challenge,
}

impl Session {
    /// Creates a session at the given level, with the scale holding its first challenge.
    pub fn new(level: Level, mut rng: StdRng, config: EngineConfig) -> Result<Self, Error> {
        let variable = Variable::new("x", 0);
        let mut generator = generator_for(level, &mut rng);
        let challenge = generator.next_challenge();
        let mut session = Self {
            engine: Engine::new(Scale::new(&variable), config),
            variable,
            rng,
            generator,
            challenge: challenge.clone(),
        };
        session.load(challenge, vec![])?;
        Ok(session)
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn level(&self) -> Level {
        self.generator.level()
    }

    /// Puts a challenge on the scale, forgetting the history and the saved snapshots. `spans`
    /// locate the challenge in the input for error reports.
    ///
    /// A challenge with a coefficient past the overflow limit is rejected and the current one is
    /// kept.
    pub fn load(&mut self, challenge: Challenge, spans: Vec<Range<usize>>) -> Result<(), Error> {
        let max_integer = &self.engine.config().max_integer;
        let coefficients = [("a", challenge.a()), ("b", challenge.b()), ("m", challenge.m()), ("n", challenge.n())];
        if let Some((coefficient, _)) = coefficients.into_iter().find(|(_, value)| value.exceeds(max_integer)) {
            return Err(Error::new(spans, ChallengeTooLarge {
                coefficient,
                max_integer: max_integer.to_string(),
            }));
        }

        self.engine.reset();
        challenge.seed_scale(self.engine.scale_mut())
            .map_err(|err| Error::new(spans, err))?;
        info!(%challenge, x = challenge.x(), "loaded challenge");
        self.challenge = challenge;
        Ok(())
    }

    /// The challenge and the state of the scale.
    pub fn banner(&self) -> String {
        format!(
            "{} challenge ({}): {}\n{}",
            self.level(),
            self.challenge.description(),
            self.challenge,
            self.status(),
        )
    }

    /// The scale, which way it tilts, and whether the equation is solved.
    pub fn status(&self) -> String {
        let relation = match self.engine.balance() {
            Ordering::Less => "<",
            Ordering::Equal => "=",
            Ordering::Greater => ">",
        };
        let solved = match self.engine.scale().solution() {
            Some(value) => format!("solved: x = {}", value),
            None => "unsolved".to_string(),
        };
        format!(
            "{}\nweights: {} {} {} at x = {}\n{}\n",
            self.engine.scale(),
            self.engine.left_weight(),
            relation,
            self.engine.right_weight(),
            self.variable.value(),
            solved,
        )
    }

    /// Runs a command.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, Error> {
        let output = match command {
            Command::Apply { operator, operand, span } => {
                let term = if operand.variable {
                    Term::variable(operand.coefficient, &self.variable)
                } else {
                    Term::constant(operand.coefficient)
                };

                let mut events = Vec::new();
                self.engine.apply(UniversalOperation::new(operator, term), &mut events)
                    .map_err(|err| err.into_error(vec![span]))?;

                let mut output = String::new();
                for event in events {
                    match event {
                        EngineEvent::SummedToZero(ids) => ids.iter().for_each(|id| {
                            let kind = if id.index == VARIABLE_CREATOR { "x" } else { "constant" };
                            output.push_str(&format!("the {} terms on the {} summed to zero\n", kind, id.side));
                        }),
                        EngineEvent::OperationCompleted(operation) => {
                            output.push_str(&format!("applied {} to both sides\n", operation));
                        },
                    }
                }
                output + &self.status()
            },
            Command::New => {
                let challenge = self.generator.next_challenge();
                self.load(challenge, vec![])?;
                self.banner()
            },
            Command::Level(level) => {
                self.generator = generator_for(level, &mut self.rng);
                let challenge = self.generator.next_challenge();
                self.load(challenge, vec![])?;
                self.banner()
            },
            Command::Challenge { challenge, span } => {
                self.load(challenge, vec![span])?;
                self.banner()
            },
            Command::SetVariable { value, span } => {
                self.variable.set_value(value)
                    .map_err(|err| Error::new(vec![span], err))?;
                self.status()
            },
            Command::Show => self.status(),
            Command::Derivation => {
                let mut output = format!("{}: {}\n", self.challenge.description(), self.challenge);
                for line in self.challenge.derivation() {
                    output.push_str(&format!("  {}\n", line));
                }
                output.push_str(&format!("debug: {}\n", self.challenge.debug_string()));
                output
            },
            Command::Save => {
                let capacity = self.engine.snapshots().capacity();
                let index = self.engine.save_snapshot()
                    .ok_or_else(|| Error::new(vec![], SnapshotsFull { capacity }))?;
                format!("saved snapshot {}\n", index)
            },
            Command::Restore { index, span } => {
                if !self.engine.restore_snapshot(index) {
                    return Err(Error::new(vec![span], NoSnapshot { index }));
                }
                format!("restored snapshot {}\n{}", index, self.status())
            },
            Command::History => {
                let history = self.engine.history();
                if history.is_empty() {
                    "no operations applied\n".to_string()
                } else {
                    history.iter()
                        .enumerate()
                        .map(|(i, operation)| format!("{}. {}\n", i + 1, operation))
                        .collect()
                }
            },
            Command::Clear => {
                self.load(self.challenge.clone(), vec![])?;
                self.banner()
            },
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(output))
    }
}

/// Creates a generator for the level, seeded from the session's random number generator.
fn generator_for(level: Level, rng: &mut StdRng) -> Box<dyn ChallengeGenerator> {
    level.generator(StdRng::seed_from_u64(rng.gen()))
}
