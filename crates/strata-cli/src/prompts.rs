//! Terminal implementations of the core `Prompter` port.
//!
//! With the `interactive` feature (default) and a terminal on stdin, prompts
//! are drawn with dialoguer. Otherwise [`NonInteractive`] refuses every
//! prompt, so a missing argument becomes an error instead of a hang.

use std::io::IsTerminal as _;

use strata_core::{
    application::{
        ApplicationError,
        ports::{Prompter, SelectOption},
    },
    error::StrataResult,
};

/// Best prompter for the current build and terminal.
pub fn terminal_prompter() -> Box<dyn Prompter> {
    if !std::io::stdin().is_terminal() {
        return Box::new(NonInteractive::new("stdin is not a terminal"));
    }

    #[cfg(feature = "interactive")]
    {
        Box::new(dialog::DialoguerPrompter::default())
    }
    #[cfg(not(feature = "interactive"))]
    {
        Box::new(NonInteractive::new(
            "this build has no interactive prompts (feature `interactive`)",
        ))
    }
}

/// Prompter that fails every question with [`ApplicationError::Prompt`].
#[derive(Debug, Clone)]
pub struct NonInteractive {
    reason: String,
}

impl NonInteractive {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn refuse<T>(&self, question: &str) -> StrataResult<T> {
        Err(ApplicationError::Prompt {
            reason: format!("cannot ask \"{question}\": {}", self.reason),
        }
        .into())
    }
}

impl Prompter for NonInteractive {
    fn ask_text(&self, prompt: &str) -> StrataResult<Option<String>> {
        self.refuse(prompt)
    }

    fn ask_multi_select(
        &self,
        placeholder: &str,
        _options: &[SelectOption],
    ) -> StrataResult<Option<Vec<usize>>> {
        self.refuse(placeholder)
    }
}

#[cfg(feature = "interactive")]
mod dialog {
    use std::io;

    use dialoguer::{Input, MultiSelect, theme::ColorfulTheme};
    use tracing::debug;

    use super::*;

    #[derive(Default)]
    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
    }

    /// Ctrl-C surfaces as an interrupted read; that is a dismissal.
    fn dismissed<T>(err: dialoguer::Error) -> StrataResult<Option<T>> {
        let dialoguer::Error::IO(err) = err;
        if err.kind() == io::ErrorKind::Interrupted {
            debug!("prompt dismissed");
            return Ok(None);
        }
        Err(ApplicationError::Prompt {
            reason: err.to_string(),
        }
        .into())
    }

    impl Prompter for DialoguerPrompter {
        fn ask_text(&self, prompt: &str) -> StrataResult<Option<String>> {
            match Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt.trim_end_matches(':'))
                .allow_empty(true)
                .interact_text()
            {
                Ok(text) => Ok(Some(text)),
                Err(err) => dismissed(err),
            }
        }

        fn ask_multi_select(
            &self,
            placeholder: &str,
            options: &[SelectOption],
        ) -> StrataResult<Option<Vec<usize>>> {
            let items: Vec<String> = options
                .iter()
                .map(|o| format!("{} - {}", o.label, o.description))
                .collect();

            MultiSelect::with_theme(&self.theme)
                .with_prompt(placeholder)
                .items(&items)
                .interact_opt()
                .or_else(dismissed)
        }
    }
}
