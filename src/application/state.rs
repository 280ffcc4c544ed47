//! # Wizard State
//!
//! The questionnaire as an explicit state machine. `WizardState::apply` takes
//! the current state and an event and returns the next state together with
//! what happened, so the terminal layer never mutates answers directly.

use crate::application::strategy;
use crate::domain::error::StrategyError;
use crate::domain::types::{Answers, Field, LookupPolicy, Strategy};

/// Steps 1 through 6. `Results` is terminal until Back or Reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Basics,
    Market,
    Resources,
    Differentiator,
    Goal,
    Results,
}

/// Steps that collect input, excluding results.
pub const INPUT_STEPS: u8 = 5;

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Basics => 1,
            WizardStep::Market => 2,
            WizardStep::Resources => 3,
            WizardStep::Differentiator => 4,
            WizardStep::Goal => 5,
            WizardStep::Results => 6,
        }
    }

    /// Fields that must be present before leaving this step.
    pub fn fields(self) -> &'static [Field] {
        match self {
            WizardStep::Basics => &[Field::ProductName, Field::ProductType, Field::BusinessModel],
            WizardStep::Market => &[Field::TargetMarket, Field::ProductStage],
            WizardStep::Resources => &[Field::Budget, Field::Timeline],
            WizardStep::Differentiator => &[Field::Differentiator],
            WizardStep::Goal => &[Field::PrimaryGoal],
            WizardStep::Results => &[],
        }
    }

    fn next(self) -> Self {
        match self {
            WizardStep::Basics => WizardStep::Market,
            WizardStep::Market => WizardStep::Resources,
            WizardStep::Resources => WizardStep::Differentiator,
            WizardStep::Differentiator => WizardStep::Goal,
            WizardStep::Goal | WizardStep::Results => WizardStep::Results,
        }
    }

    fn previous(self) -> Self {
        match self {
            WizardStep::Basics | WizardStep::Market => WizardStep::Basics,
            WizardStep::Resources => WizardStep::Market,
            WizardStep::Differentiator => WizardStep::Resources,
            WizardStep::Goal => WizardStep::Differentiator,
            WizardStep::Results => WizardStep::Goal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Set { field: Field, value: String },
    Next,
    Back,
    Reset,
}

#[derive(Debug)]
pub enum Outcome {
    Updated,
    /// The event does not apply in the current step.
    Ignored,
    Advanced(WizardStep),
    Blocked { missing: Vec<Field> },
    /// Carries a copy of the strategy now held by the state.
    Generated(Strategy),
    Failed(StrategyError),
    Retreated(WizardStep),
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    step: WizardStep,
    answers: Answers,
    strategy: Option<Strategy>,
}

pub struct Transition {
    pub state: WizardState,
    pub outcome: Outcome,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn strategy(&self) -> Option<&Strategy> {
        self.strategy.as_ref()
    }

    /// Required-field predicate for the current step. Always false on results.
    pub fn can_proceed(&self) -> bool {
        self.step != WizardStep::Results && self.answers.missing(self.step.fields()).is_empty()
    }

    pub fn apply(mut self, event: WizardEvent, policy: LookupPolicy) -> Transition {
        let outcome = match event {
            WizardEvent::Set { field, value } => {
                if self.step.fields().contains(&field) {
                    self.answers.set(field, value);
                    Outcome::Updated
                } else {
                    Outcome::Ignored
                }
            }
            WizardEvent::Next if self.step == WizardStep::Results => Outcome::Ignored,
            WizardEvent::Next if !self.can_proceed() => Outcome::Blocked {
                missing: self.answers.missing(self.step.fields()),
            },
            WizardEvent::Next if self.step == WizardStep::Goal => {
                match strategy::generate_checked(&self.answers, policy) {
                    Ok(generated) => {
                        self.strategy = Some(generated.clone());
                        self.step = WizardStep::Results;
                        Outcome::Generated(generated)
                    }
                    Err(err) => Outcome::Failed(err),
                }
            }
            WizardEvent::Next => {
                self.step = self.step.next();
                Outcome::Advanced(self.step)
            }
            WizardEvent::Back if self.step == WizardStep::Basics => Outcome::Ignored,
            WizardEvent::Back => {
                self.step = self.step.previous();
                Outcome::Retreated(self.step)
            }
            WizardEvent::Reset => {
                self = Self::default();
                Outcome::Reset
            }
        };

        Transition {
            state: self,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(state: WizardState, field: Field, value: &str) -> WizardState {
        state
            .apply(
                WizardEvent::Set {
                    field,
                    value: value.to_string(),
                },
                LookupPolicy::Lenient,
            )
            .state
    }

    fn next(state: WizardState) -> Transition {
        state.apply(WizardEvent::Next, LookupPolicy::Lenient)
    }

    fn completed_to_goal() -> WizardState {
        let mut state = WizardState::new();
        state = set(state, Field::ProductName, "Acme");
        state = set(state, Field::ProductType, "saas");
        state = set(state, Field::BusinessModel, "b2b");
        state = next(state).state;
        state = set(state, Field::TargetMarket, "smb");
        state = set(state, Field::ProductStage, "mvp");
        state = next(state).state;
        state = set(state, Field::Budget, "low");
        state = set(state, Field::Timeline, "short");
        state = next(state).state;
        state = set(state, Field::Differentiator, "fast onboarding");
        state = next(state).state;
        set(state, Field::PrimaryGoal, "leads")
    }

    #[test]
    fn test_step_one_gating() {
        let fields = [Field::ProductName, Field::ProductType, Field::BusinessModel];
        for mask in 0..8u8 {
            let mut state = WizardState::new();
            for (i, field) in fields.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    state = set(state, *field, "x");
                }
            }
            assert_eq!(state.can_proceed(), mask == 0b111, "mask {mask:03b}");
        }
    }

    #[test]
    fn test_blocked_next_reports_missing_and_stays() {
        let state = set(WizardState::new(), Field::ProductName, "Acme");
        let transition = next(state);
        assert_eq!(transition.state.step(), WizardStep::Basics);
        match transition.outcome {
            Outcome::Blocked { missing } => {
                assert_eq!(missing, vec![Field::ProductType, Field::BusinessModel]);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_fields_outside_current_step_are_ignored() {
        let transition = WizardState::new().apply(
            WizardEvent::Set {
                field: Field::Budget,
                value: "low".to_string(),
            },
            LookupPolicy::Lenient,
        );
        assert!(matches!(transition.outcome, Outcome::Ignored));
        assert!(transition.state.answers().budget.is_empty());
    }

    #[test]
    fn test_full_walk_generates_and_freezes_answers() {
        let state = completed_to_goal();
        assert_eq!(state.step(), WizardStep::Goal);
        assert_eq!(state.step().number(), INPUT_STEPS);

        let transition = next(state);
        let generated = match transition.outcome {
            Outcome::Generated(generated) => generated,
            other => panic!("unexpected outcome {other:?}"),
        };
        let state = transition.state;
        assert_eq!(state.strategy(), Some(&generated));
        assert_eq!(state.step(), WizardStep::Results);
        assert_eq!(state.strategy().map(|s| s.icp.size.as_str()), Some("10-200 employees"));
        assert!(!state.can_proceed());

        let transition = state.apply(
            WizardEvent::Set {
                field: Field::PrimaryGoal,
                value: "revenue".to_string(),
            },
            LookupPolicy::Lenient,
        );
        assert!(matches!(transition.outcome, Outcome::Ignored));
        assert_eq!(transition.state.answers().primary_goal, "leads");

        let transition = next(transition.state);
        assert!(matches!(transition.outcome, Outcome::Ignored));
    }

    #[test]
    fn test_strict_policy_keeps_goal_step_on_miss() {
        let state = set(completed_to_goal(), Field::PrimaryGoal, "fame");
        let transition = state.apply(WizardEvent::Next, LookupPolicy::Strict);
        assert!(matches!(transition.outcome, Outcome::Failed(StrategyError::UnmatchedLookup { .. })));
        assert_eq!(transition.state.step(), WizardStep::Goal);
        assert!(transition.state.strategy().is_none());
    }

    #[test]
    fn test_back_is_floored_and_reset_clears() {
        let transition = WizardState::new().apply(WizardEvent::Back, LookupPolicy::Lenient);
        assert!(matches!(transition.outcome, Outcome::Ignored));
        assert_eq!(transition.state.step(), WizardStep::Basics);

        let generated = next(completed_to_goal()).state;
        let transition = generated.clone().apply(WizardEvent::Back, LookupPolicy::Lenient);
        assert!(matches!(transition.outcome, Outcome::Retreated(WizardStep::Goal)));
        assert_eq!(transition.state.answers(), generated.answers());

        let transition = generated.apply(WizardEvent::Reset, LookupPolicy::Lenient);
        assert!(matches!(transition.outcome, Outcome::Reset));
        assert_eq!(transition.state, WizardState::new());
    }
}
