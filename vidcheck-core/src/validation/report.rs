use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Validation severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationLevel {
    Info,
    Warning,
    Error,
}

impl Display for ValidationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationLevel::Info => write!(f, "INFO"),
            ValidationLevel::Warning => write!(f, "WARNING"),
            ValidationLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// A validation message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationMessage {
    /// Message text
    pub message: String,

    /// Validation severity level
    pub level: ValidationLevel,

    /// Validation category
    pub category: String,
}

impl ValidationMessage {
    /// Create a new info message
    pub fn info<S: Into<String>, C: Into<String>>(message: S, category: C) -> Self {
        Self {
            message: message.into(),
            level: ValidationLevel::Info,
            category: category.into(),
        }
    }

    /// Create a new warning message
    pub fn warning<S: Into<String>, C: Into<String>>(message: S, category: C) -> Self {
        Self {
            message: message.into(),
            level: ValidationLevel::Warning,
            category: category.into(),
        }
    }

    /// Create a new error message
    pub fn error<S: Into<String>, C: Into<String>>(message: S, category: C) -> Self {
        Self {
            message: message.into(),
            level: ValidationLevel::Error,
            category: category.into(),
        }
    }
}

impl Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.category, self.message)
    }
}

/// Verification report collecting messages from every check stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Validation messages
    pub messages: Vec<ValidationMessage>,

    /// Whether verification passed (no errors)
    pub passed: bool,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    /// Create a new validation report
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            passed: true,
        }
    }

    /// Add a validation message with immediate logging
    pub fn add_message(&mut self, message: ValidationMessage) {
        match message.level {
            ValidationLevel::Info => log::info!("{}", message),
            ValidationLevel::Warning => log::warn!("{}", message),
            ValidationLevel::Error => log::error!("{}", message),
        }

        if message.level == ValidationLevel::Error {
            self.passed = false;
        }
        self.messages.push(message);
    }

    /// Add an info message
    pub fn add_info<S: Into<String>, C: Into<String>>(&mut self, message: S, category: C) {
        self.add_message(ValidationMessage::info(message, category));
    }

    /// Add a warning message
    pub fn add_warning<S: Into<String>, C: Into<String>>(&mut self, message: S, category: C) {
        self.add_message(ValidationMessage::warning(message, category));
    }

    /// Add an error message
    pub fn add_error<S: Into<String>, C: Into<String>>(&mut self, message: S, category: C) {
        self.add_message(ValidationMessage::error(message, category));
    }

    /// Get all error messages
    pub fn errors(&self) -> Vec<&ValidationMessage> {
        self.messages
            .iter()
            .filter(|m| m.level == ValidationLevel::Error)
            .collect()
    }

    /// Get all warning messages
    pub fn warnings(&self) -> Vec<&ValidationMessage> {
        self.messages
            .iter()
            .filter(|m| m.level == ValidationLevel::Warning)
            .collect()
    }

    /// Get all info messages
    pub fn infos(&self) -> Vec<&ValidationMessage> {
        self.messages
            .iter()
            .filter(|m| m.level == ValidationLevel::Info)
            .collect()
    }
}
