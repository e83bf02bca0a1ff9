/*!
 * Process Module
 * Process records and single-step execution
 */

pub mod record;

// Re-export for convenience
pub use record::Process;
