use colored::*;
use crate::error::MathError;

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub error: MathError,
    pub invocation: Option<String>, // Command that produced the error
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn new(error: MathError) -> Self {
        let suggestion = suggestion_for(&error);
        Diagnostic {
            error,
            invocation: None,
            suggestion,
        }
    }

    pub fn with_invocation(mut self, invocation: impl Into<String>) -> Self {
        self.invocation = Some(invocation.into());
        self
    }
}

fn suggestion_for(error: &MathError) -> Option<String> {
    match error {
        MathError::DivisionByZero => Some("the divisor must be non-zero".to_string()),
        MathError::UndefinedFunction(_) => {
            Some("run `codymath functions` to list available functions".to_string())
        }
        MathError::UndefinedConstant(_) => {
            Some("run `codymath constants` to list available constants".to_string())
        }
        MathError::UndefinedLetter(_) => {
            Some("letter names are lowercase English, e.g. `alpha`".to_string())
        }
        MathError::ArgumentMismatch(_) | MathError::ValueError(_) => None,
    }
}

#[derive(Default)]
pub struct DiagnosticEngine {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticEngine {
    pub fn new() -> Self {
        DiagnosticEngine {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn emit_all(&self) -> bool {
        for diagnostic in &self.diagnostics {
            eprint!("{}", render(diagnostic));
        }
        self.has_errors()
    }
}

/// Format a diagnostic the way it is printed to stderr
pub fn render(diagnostic: &Diagnostic) -> String {
    let mut out = format!("{}: {}\n", "error".bright_red(), diagnostic.error);

    if let Some(invocation) = &diagnostic.invocation {
        out.push_str(&format!("  --> {}\n", invocation));
    }

    if let Some(suggestion) = &diagnostic.suggestion {
        out.push_str(&format!("{} {}\n", "help:".bright_cyan(), suggestion));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_message_invocation_and_help() {
        colored::control::set_override(false);
        let diagnostic = Diagnostic::new(MathError::DivisionByZero).with_invocation("divide 1 0");
        assert_eq!(
            render(&diagnostic),
            "error: Division by zero is not allowed.\n  --> divide 1 0\nhelp: the divisor must be non-zero\n"
        );
    }

    #[test]
    fn argument_errors_have_no_hint() {
        let diagnostic = Diagnostic::new(MathError::ArgumentMismatch("x".to_string()));
        assert!(diagnostic.suggestion.is_none());
    }

    #[test]
    fn engine_tracks_errors() {
        let mut engine = DiagnosticEngine::new();
        assert!(!engine.has_errors());
        engine.add(Diagnostic::new(MathError::UndefinedConstant("tau".to_string())));
        assert!(engine.has_errors());
    }
}
