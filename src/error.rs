use colored::Colorize;
use std::fmt;

use crate::charset::{CharacterClass, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Raised by the generator when the requested options cannot produce a password
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    LengthOutOfRange {
        length: usize,
    },
    MinimumsExceedLength {
        minimum_digits: usize,
        minimum_special_characters: usize,
        length: usize,
    },
    NoCharacterSource,
    EmptyCharacterPool {
        class: CharacterClass,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthOutOfRange { .. } => write!(
                f,
                "Password length must be between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH} characters."
            ),
            Self::MinimumsExceedLength { .. } => write!(
                f,
                "Cannot have more digits or special characters than the password length."
            ),
            Self::NoCharacterSource => write!(
                f,
                "Password options must include at least one of: uppercase letters, lowercase \
                 letters, digits, or special characters."
            ),
            Self::EmptyCharacterPool { class } => write!(
                f,
                "No {class} are left to choose from after removing ambiguous characters."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    Clipboard {
        tool: Option<String>,
        message: String,
    },
    Terminal {
        message: String,
    },
    Io {
        operation: String,
        path: Option<String>,
        source: std::io::Error,
    },
    Other(anyhow::Error),
}

impl AppError {
    pub fn clipboard(tool: Option<String>, message: impl Into<String>) -> Self {
        Self::Clipboard {
            tool,
            message: message.into(),
        }
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn io_error(
        operation: impl Into<String>,
        path: Option<String>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            operation: operation.into(),
            path,
            source,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => {
                writeln!(f, "{} Invalid password options", "✗".red().bold())?;
                writeln!(f, "  {} {}", "→".blue(), err)?;
                Ok(())
            }
            Self::Clipboard { tool, message } => {
                writeln!(f, "{} Clipboard error", "✗".red().bold())?;
                if let Some(tool) = tool {
                    writeln!(f, "  {} Tool: {}", "→".blue(), tool.yellow())?;
                }
                writeln!(f, "  {} Error: {}", "→".blue(), message)?;
                Ok(())
            }
            Self::Terminal { message } => {
                writeln!(f, "{} Terminal error", "✗".red().bold())?;
                writeln!(f, "  {} {}", "→".blue(), message)?;
                Ok(())
            }
            Self::Io {
                operation,
                path,
                source,
            } => {
                writeln!(
                    f,
                    "{} I/O error during: {}",
                    "✗".red().bold(),
                    operation.yellow()
                )?;
                if let Some(path) = path {
                    writeln!(f, "  {} Path: {}", "→".blue(), path)?;
                }
                writeln!(f, "  {} Error: {}", "→".blue(), source)?;
                Ok(())
            }
            Self::Other(err) => write!(f, "{} {}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            operation: "unknown".to_string(),
            path: None,
            source: err,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Terminal {
            message: format!("Dialog error: {err}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::LengthOutOfRange { length: 4 }.to_string(),
            "Password length must be between 5 and 128 characters."
        );
        assert!(ValidationError::MinimumsExceedLength {
            minimum_digits: 6,
            minimum_special_characters: 6,
            length: 10,
        }
        .to_string()
        .contains("more digits or special characters"));
        assert!(ValidationError::NoCharacterSource
            .to_string()
            .contains("at least one of"));
        assert!(ValidationError::EmptyCharacterPool {
            class: CharacterClass::Special
        }
        .to_string()
        .contains("No special characters"));
    }

    #[test]
    fn test_app_error_wraps_validation() {
        let err: AppError = ValidationError::NoCharacterSource.into();
        let display = err.to_string();
        assert!(display.contains("Invalid password options"));
        assert!(display.contains("at least one of"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_clipboard_error_display() {
        let err = AppError::clipboard(Some("xclip".to_string()), "exited with status 1");
        let display = err.to_string();
        assert!(display.contains("Clipboard error"));
        assert!(display.contains("xclip"));
        assert!(display.contains("exited with status 1"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AppError = io.into();
        match &err {
            AppError::Io { operation, .. } => assert_eq!(operation, "unknown"),
            other => panic!("unexpected variant: {other:?}"),
        }
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_with_path() {
        let err = AppError::io_error(
            "open log file",
            Some("/tmp/pwgen.log".to_string()),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let display = err.to_string();
        assert!(display.contains("open log file"));
        assert!(display.contains("/tmp/pwgen.log"));
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: AppError = anyhow::anyhow!("something broke").into();
        assert!(err.to_string().contains("something broke"));
    }
}
