//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `dayplan_core` linkage.
//! - Keep output deterministic enough for quick local sanity checks.

use dayplan_core::DateKey;

fn main() {
    println!("dayplan_core version={}", dayplan_core::core_version());
    println!("dayplan_core today={}", DateKey::today());
}
