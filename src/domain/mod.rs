//! Domain layer: core entities and business rules.

pub mod events;
pub mod shell_state;
pub mod timer;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
