//! Interactive variable prompts.

use kiln_core::application::Prompter;

use crate::error::CliResult;

#[cfg(feature = "interactive")]
mod term {
    use console::Term;
    use dialoguer::Input;

    use kiln_core::{
        application::{ApplicationError, Prompter},
        error::KilnResult,
    };

    /// Reads answers from the controlling terminal.
    pub struct TermPrompter {
        term: Term,
    }

    impl TermPrompter {
        pub fn new() -> Self {
            Self { term: Term::stderr() }
        }
    }

    impl Prompter for TermPrompter {
        fn ask(&self, key: &str, default: &str) -> KilnResult<String> {
            let mut input = Input::<String>::new().with_prompt(key).allow_empty(true);
            if !default.is_empty() {
                input = input.default(default.to_string());
            }
            let answer = input
                .interact_on(&self.term)
                .map_err(|e| ApplicationError::PromptFailed {
                    reason: e.to_string(),
                })?;
            Ok(keep_default(&answer, default))
        }
    }

    /// An empty answer keeps the shown default.
    pub(super) fn keep_default(answer: &str, default: &str) -> String {
        match answer.trim() {
            "" => default.to_string(),
            trimmed => trimmed.to_string(),
        }
    }
}

/// The prompter for `--interactive`, or `None` when not requested.
pub fn prompter(interactive: bool) -> CliResult<Option<Box<dyn Prompter>>> {
    if !interactive {
        return Ok(None);
    }

    #[cfg(feature = "interactive")]
    {
        Ok(Some(Box::new(term::TermPrompter::new())))
    }

    #[cfg(not(feature = "interactive"))]
    {
        Err(crate::error::CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}
