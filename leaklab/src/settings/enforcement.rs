use std::sync::atomic::{AtomicBool, Ordering};

// Enforcement always starts disabled so a fresh process demonstrates the
// vulnerable behavior first. The flag is deliberately not persisted.
static VALIDATION_ENABLED: AtomicBool = AtomicBool::new(false);

/// Whether access-control checks are currently applied
pub fn is_enforced() -> bool {
    VALIDATION_ENABLED.load(Ordering::SeqCst)
}

/// Toggle access-control checks process-wide
pub fn set_enforcement(enabled: bool) {
    VALIDATION_ENABLED.store(enabled, Ordering::SeqCst);
}
