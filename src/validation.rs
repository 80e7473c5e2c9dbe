//! Input validation for simulation runs.
//!
//! Checks structural integrity of process descriptors before a run.
//! Detects:
//! - Zero pids (valid pids start at 1)
//! - Duplicate pids
//! - Zero burst times (a process must need at least 1 unit of CPU)
//! - Zero priorities (valid priorities start at 1)
//!
//! Arrival times are unsigned and therefore cannot violate the
//! non-negativity rule by construction.

use crate::models::{Pid, Process};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Pid of the offending descriptor.
    pub pid: Pid,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A descriptor carries pid 0.
    ZeroPid,
    /// Two descriptors share the same pid.
    DuplicatePid,
    /// A descriptor has a burst time of 0.
    ZeroBurst,
    /// A descriptor has a priority of 0.
    ZeroPriority,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, pid: Pid, message: impl Into<String>) -> Self {
        Self {
            kind,
            pid,
            message: message.into(),
        }
    }
}

/// Validates the descriptors for a simulation run.
///
/// Checks:
/// 1. Every pid is at least 1
/// 2. No two descriptors share a pid
/// 3. Every burst time is at least 1
/// 4. Every priority is at least 1
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen: HashSet<Pid> = HashSet::new();

    for p in processes {
        if p.pid == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroPid,
                p.pid,
                "process ids start at 1",
            ));
        } else if !seen.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                p.pid,
                format!("duplicate pid {}", p.pid),
            ));
        }

        if p.burst == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                p.pid,
                "burst time must be at least 1",
            ));
        }

        if p.priority == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroPriority,
                p.pid,
                "priority must be at least 1",
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 0, 10).with_priority(3),
            Process::new(2, 1, 5).with_priority(1),
            Process::new(3, 2, 2).with_priority(4),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample()).is_ok());
    }

    #[test]
    fn test_empty_input_is_structurally_valid() {
        // Emptiness is the engine's precondition, not a structural defect.
        assert!(validate_input(&[]).is_ok());
    }

    #[test]
    fn test_zero_pid() {
        let processes = vec![Process::new(0, 0, 5)];
        let errors = validate_input(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroPid));
    }

    #[test]
    fn test_duplicate_pid() {
        let processes = vec![Process::new(1, 0, 5), Process::new(1, 2, 3)];
        let errors = validate_input(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePid && e.pid == 1));
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new(1, 0, 0)];
        let errors = validate_input(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBurst && e.pid == 1));
    }

    #[test]
    fn test_zero_priority() {
        let processes = vec![Process::new(1, 0, 5).with_priority(0)];
        let errors = validate_input(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroPriority));
    }

    #[test]
    fn test_multiple_errors_collected() {
        // Zero burst + zero priority on one descriptor, duplicate on another
        let processes = vec![
            Process::new(1, 0, 0).with_priority(0),
            Process::new(2, 1, 5),
            Process::new(2, 3, 4),
        ];
        let errors = validate_input(&processes).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
