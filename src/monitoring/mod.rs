/*!
 * Monitoring
 * Structured logging setup and per-run tracing spans
 */

mod tracer;

pub use tracer::{generate_run_id, init_tracing, run_span};
