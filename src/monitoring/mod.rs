/*!
 * Monitoring
 * Tracing subscriber setup for library consumers, tests and benchmarks
 */

mod tracer;

pub use tracer::{init_tracing, TRACE_JSON_ENV};
