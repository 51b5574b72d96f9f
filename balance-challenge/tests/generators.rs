use balance_challenge::{Challenge, ChallengeGenerator, Level};
use balance_core::{Engine, EngineConfig, Fraction, Operator, Scale, Term, UniversalOperation, Variable};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

const CHALLENGES_PER_LEVEL: usize = 1000;

fn generate(level: Level, seed: u64, count: usize) -> Vec<Challenge> {
    let mut generator = level.generator(StdRng::seed_from_u64(seed));
    (0..count).map(|_| generator.next_challenge()).collect()
}

#[test]
fn challenges_are_valid() {
    for level in Level::ALL {
        let challenges = generate(level, 2024, CHALLENGES_PER_LEVEL);
        for (i, challenge) in challenges.iter().enumerate() {
            assert!(challenge.is_balanced(), "{}: `{}` is not balanced", level, challenge);
            assert_ne!(challenge.x(), 0, "{}: `{}` has x = 0", level, challenge);
            if i == 0 {
                continue;
            }

            // x/d = c may repeat x after exhausting its retries
            let repeat_allowed = challenge.description() == "x/d = c";
            if !repeat_allowed {
                assert_ne!(
                    challenge.x(),
                    challenges[i - 1].x(),
                    "{}: challenge {} repeats the previous x",
                    level,
                    i,
                );
            }
        }
    }
}

#[test]
fn level_five_bounds() {
    for challenge in generate(Level::Five, 7, CHALLENGES_PER_LEVEL) {
        let (a, m) = (challenge.a(), challenge.m());
        assert!(!m.is_zero());
        assert_ne!(a, m);
        assert!((a - m).abs() <= Fraction::from(10));
    }
}

#[test]
fn level_four_coefficient_is_fractional() {
    for challenge in generate(Level::Four, 8, CHALLENGES_PER_LEVEL) {
        assert!(!challenge.a().is_integer(), "`{}` has an integer coefficient", challenge);
    }
}

#[test]
fn x_stays_in_range() {
    for level in Level::ALL {
        for challenge in generate(level, 9, CHALLENGES_PER_LEVEL) {
            assert!((-40..=40).contains(&challenge.x()), "{}: x = {}", level, challenge.x());
        }
    }
}

#[test]
fn generators_are_independent() {
    let mut one = Level::One.generator(StdRng::seed_from_u64(1));
    let mut five = Level::Five.generator(StdRng::seed_from_u64(1));
    one.next_challenge();
    one.next_challenge();
    assert_eq!(one.number_of_challenges(), 2);
    assert_eq!(five.number_of_challenges(), 0);
    five.next_challenge();
    assert_eq!(five.number_of_challenges(), 1);
}

#[test]
fn reproducible_with_seed() {
    for level in Level::ALL {
        let first = generate(level, 99, 50);
        let second = generate(level, 99, 50);
        assert_eq!(first, second);
    }
}

/// Solves a level three challenge on the engine by subtracting `b`, then dividing by `a`.
#[test]
fn solve_on_scale() {
    let x = Variable::new("x", 0);
    for challenge in generate(Level::Three, 3, 100) {
        let mut scale = Scale::new(&x);
        challenge.seed_scale(&mut scale).unwrap();
        assert!(scale.is_balanced());

        let mut engine = Engine::new(scale, EngineConfig::default());
        engine.apply(UniversalOperation::new(Operator::Minus, Term::constant(challenge.b().clone())), &mut ())
            .unwrap();
        engine.apply(UniversalOperation::new(Operator::Divide, Term::constant(challenge.a().clone())), &mut ())
            .unwrap();
        assert_eq!(engine.scale().solution(), Some(Fraction::from(challenge.x())));
    }
}

proptest! {
    #[test]
    fn debug_string_reads_back(seed in any::<u64>(), level in 1u8..=5) {
        let level = Level::from_number(level).unwrap();
        let mut generator = level.generator(StdRng::seed_from_u64(seed));
        for _ in 0..10 {
            let challenge = generator.next_challenge();
            let read = Challenge::from_debug_str(&challenge.debug_string()).unwrap();
            prop_assert_eq!(read.a(), challenge.a());
            prop_assert_eq!(read.b(), challenge.b());
            prop_assert_eq!(read.m(), challenge.m());
            prop_assert_eq!(read.n(), challenge.n());
            prop_assert_eq!(read.x(), challenge.x());
        }
    }
}
