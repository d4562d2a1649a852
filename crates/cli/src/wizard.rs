//! Three-step dream submission flow. All state lives here, the agent only sees the final
//! `DreamRequest`.

use somnia_core::{validate_dream_text, DreamRequest, DreamType, MIN_DREAM_CHARS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Describe,
    ChooseType,
    Review,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            Self::Describe => 1,
            Self::ChooseType => 2,
            Self::Review => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Continue,
    Rejected(String),
    Submit(DreamRequest),
    Quit,
}

#[derive(Debug, Clone)]
pub struct WizardState {
    step: WizardStep,
    text: String,
    dream_type: Option<DreamType>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Describe,
            text: String::new(),
            dream_type: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn dream_type(&self) -> Option<DreamType> {
        self.dream_type
    }

    pub fn prompt(&self) -> String {
        match self.step {
            WizardStep::Describe => {
                format!("Step 1/3: describe your dream (at least {MIN_DREAM_CHARS} characters).")
            }
            WizardStep::ChooseType => {
                let options = DreamType::ALL
                    .iter()
                    .enumerate()
                    .map(|(idx, dream_type)| format!("  {}) {}", idx + 1, dream_type))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    "Step 2/3: pick a dream type if you already know it, or press enter to let the analyzer decide.\n{options}"
                )
            }
            WizardStep::Review => format!(
                "Step 3/3: review.\n  Dream: {}\n  Dream type: {}\nType 'submit' to analyze or 'back' to edit.",
                self.text,
                self.dream_type
                    .map(|dream_type| dream_type.label())
                    .unwrap_or("decided by analyzer"),
            ),
        }
    }

    /// Feeds one line of user input to the current step.
    pub fn advance(&mut self, input: &str) -> WizardOutcome {
        let input = input.trim();

        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            return WizardOutcome::Quit;
        }

        if input.eq_ignore_ascii_case("back") {
            self.step = match self.step {
                WizardStep::Describe => WizardStep::Describe,
                WizardStep::ChooseType => WizardStep::Describe,
                WizardStep::Review => WizardStep::ChooseType,
            };
            return WizardOutcome::Continue;
        }

        match self.step {
            WizardStep::Describe => {
                if let Err(err) = validate_dream_text(Some(input)) {
                    return WizardOutcome::Rejected(err.to_string());
                }
                self.text = input.to_string();
                self.step = WizardStep::ChooseType;
                WizardOutcome::Continue
            }
            WizardStep::ChooseType => match parse_choice(input) {
                Ok(choice) => {
                    self.dream_type = choice;
                    self.step = WizardStep::Review;
                    WizardOutcome::Continue
                }
                Err(message) => WizardOutcome::Rejected(message),
            },
            WizardStep::Review => {
                if input.eq_ignore_ascii_case("submit") || input.is_empty() {
                    WizardOutcome::Submit(
                        DreamRequest::new(self.text.clone()).with_override(self.dream_type),
                    )
                } else {
                    WizardOutcome::Rejected("Type 'submit' or 'back'.".to_string())
                }
            }
        }
    }
}

fn parse_choice(input: &str) -> Result<Option<DreamType>, String> {
    if input.is_empty() {
        return Ok(None);
    }

    if let Ok(number) = input.parse::<usize>() {
        return DreamType::ALL
            .get(number.wrapping_sub(1))
            .copied()
            .map(Some)
            .ok_or_else(|| format!("Choose a number between 1 and {}.", DreamType::ALL.len()));
    }

    DreamType::parse(input)
        .map(Some)
        .ok_or_else(|| format!("Unknown dream type: {input}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DREAM: &str = "I walked across a bridge made of glass at night";

    #[test]
    fn walks_all_three_steps() {
        let mut wizard = WizardState::new();

        assert_eq!(wizard.advance(DREAM), WizardOutcome::Continue);
        assert_eq!(wizard.step(), WizardStep::ChooseType);
        assert_eq!(wizard.advance("5"), WizardOutcome::Continue);
        assert_eq!(wizard.dream_type(), Some(DreamType::Lucid));
        assert_eq!(wizard.step(), WizardStep::Review);

        match wizard.advance("submit") {
            WizardOutcome::Submit(request) => {
                assert_eq!(request.text.as_deref(), Some(DREAM));
                assert_eq!(request.dream_type_override, Some(DreamType::Lucid));
            }
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn short_description_stays_on_step_one() {
        let mut wizard = WizardState::new();
        assert!(matches!(wizard.advance("tiny"), WizardOutcome::Rejected(_)));
        assert_eq!(wizard.step(), WizardStep::Describe);
    }

    #[test]
    fn blank_choice_leaves_type_to_the_analyzer() {
        let mut wizard = WizardState::new();
        wizard.advance(DREAM);
        wizard.advance("");
        assert_eq!(wizard.dream_type(), None);
        assert!(wizard.prompt().contains("decided by analyzer"));
    }

    #[test]
    fn rejects_out_of_range_choices() {
        let mut wizard = WizardState::new();
        wizard.advance(DREAM);
        assert!(matches!(wizard.advance("0"), WizardOutcome::Rejected(_)));
        assert!(matches!(wizard.advance("8"), WizardOutcome::Rejected(_)));
        assert_eq!(wizard.advance("nightmare"), WizardOutcome::Continue);
        assert_eq!(wizard.dream_type(), Some(DreamType::Nightmare));
    }

    #[test]
    fn back_returns_one_step_and_keeps_text() {
        let mut wizard = WizardState::new();
        wizard.advance(DREAM);
        wizard.advance("");
        assert_eq!(wizard.advance("back"), WizardOutcome::Continue);
        assert_eq!(wizard.step(), WizardStep::ChooseType);
        assert_eq!(wizard.advance("BACK"), WizardOutcome::Continue);
        assert_eq!(wizard.step(), WizardStep::Describe);
        assert_eq!(wizard.text(), DREAM);
        assert_eq!(wizard.advance("quit"), WizardOutcome::Quit);
    }
}
