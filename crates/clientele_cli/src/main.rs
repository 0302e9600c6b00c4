//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `clientele_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("clientele_core ping={}", clientele_core::ping());
    println!("clientele_core version={}", clientele_core::core_version());
}
