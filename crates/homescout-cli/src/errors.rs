use console::style;
use homescout_core::HomescoutError;
use std::fmt;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for missing or unreadable model artifacts
pub fn model_unavailable(error: &HomescoutError) -> CliError {
    CliError::new("Price model unavailable")
        .with_context(format!("The model or column configuration could not be loaded.\n\nError: {}", error))
        .with_suggestion("Run from the repository root so artifacts/ is found")
        .with_suggestion("Or pass --model and --columns explicitly")
        .with_suggestion("Or set HOMESCOUT_MODEL_PATH and HOMESCOUT_COLUMNS_PATH")
        .with_help("Run: homescout doctor")
}

/// Create error for a location or house type the model has never seen
pub fn unknown_category(kind: &str, value: &str) -> CliError {
    CliError::new(format!("Unknown {}", kind))
        .with_context(format!("The model has no {} named '{}'.", kind, value))
        .with_suggestion("List accepted values: homescout options")
        .with_help("Run: homescout predict --help")
}

/// Create error for database connection failure
pub fn database_connection_failed(error: &str) -> CliError {
    CliError::new("Cannot connect to PostgreSQL")
        .with_context(format!("DATABASE_URL is not set or connection failed.\n\nError: {}", error))
        .with_suggestion("Set DATABASE_URL: export DATABASE_URL=\"postgresql://localhost/homescout\"")
        .with_suggestion("Or use the in-memory log: --storage memory")
        .with_help("Run: homescout doctor")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    if let Some(domain) = error.downcast_ref::<HomescoutError>() {
        match domain {
            HomescoutError::UnknownCategory { kind, value } => return unknown_category(kind, value),
            HomescoutError::InvalidInput { .. } => {
                return CliError::new(domain.to_string())
                    .with_suggestion("List accepted ranges: homescout options")
            }
            HomescoutError::Persistence(message) => return database_connection_failed(message),
            e if e.is_configuration() => return model_unavailable(e),
            _ => {}
        }
    }

    let message = format!("{:#}", error);
    if message.contains("Connection refused") || message.contains("could not connect") {
        database_connection_failed(&message)
    } else {
        CliError::new(message)
    }
}
