use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("Configuration file error")]
    #[diagnostic(
        code(config::parse_error),
        help("Check {path} for syntax errors, or delete it to be asked for the settings again")
    )]
    ConfigParseError {
        path: Utf8PathBuf,
        #[source]
        source: pfw_pack::Error,
    },

    #[error("Invalid configuration: {field} is empty")]
    #[diagnostic(
        code(config::invalid),
        help("Both the Minecraft version and the modloader must be set (e.g. 1.20.1 and forge)")
    )]
    InvalidConfig { field: &'static str },

    #[error("Could not determine the install directory")]
    #[diagnostic(
        code(install::root_unknown),
        help("Pass the directory that holds beta/, mod/ and framework/ with --root <DIR>")
    )]
    InstallRootUnknown,

    #[error("Install directory is not valid UTF-8: {}", path.display())]
    #[diagnostic(code(install::non_utf8))]
    InstallRootNotUtf8 { path: std::path::PathBuf },

    #[error("Prompt cancelled")]
    #[diagnostic(code(prompt::cancelled))]
    PromptCancelled,

    #[error("Prompt failed")]
    #[diagnostic(code(prompt::failed))]
    PromptFailed {
        #[source]
        source: inquire::InquireError,
    },

    #[error("Pack operation failed")]
    #[diagnostic(code(pack::operation_failed))]
    PackError {
        #[source]
        source: pfw_pack::Error,
    },
}

impl CliError {
    /// Map library errors to the diagnostic that explains them best.
    pub fn from_pack(error: pfw_pack::Error) -> Self {
        match error {
            pfw_pack::Error::ConfigParse { path, source } => Self::ConfigParseError {
                path: path.clone(),
                source: pfw_pack::Error::ConfigParse { path, source },
            },
            pfw_pack::Error::InvalidConfig { field } => Self::InvalidConfig { field },
            other => Self::PackError { source: other },
        }
    }

    pub fn from_prompt(error: inquire::InquireError) -> Self {
        match error {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => Self::PromptCancelled,
            source => Self::PromptFailed { source },
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::PromptCancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_is_mapped() {
        let err = CliError::from_pack(pfw_pack::Error::InvalidConfig { field: "modloader" });
        assert!(matches!(err, CliError::InvalidConfig { field: "modloader" }));
    }

    #[test]
    fn other_pack_errors_are_wrapped() {
        let err = CliError::from_pack(pfw_pack::Error::Other("boom".to_string()));
        assert!(matches!(err, CliError::PackError { .. }));
    }

    #[test]
    fn interrupted_prompt_is_cancellation() {
        let err = CliError::from_prompt(inquire::InquireError::OperationInterrupted);
        assert!(err.is_cancelled());
        let err = CliError::from_prompt(inquire::InquireError::OperationCanceled);
        assert!(err.is_cancelled());
    }
}
