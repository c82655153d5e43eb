mod run;

use crate::{config::Config, month::DateRange};

/// Action enum representing each possible command
#[derive(Debug)]
pub enum Action {
    Create {
        config: Config,
        range: DateRange,
    },
    Drop {
        config: Config,
        range: DateRange,
        service: Option<String>,
        dry_run: bool,
    },
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if the action fails to execute
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
