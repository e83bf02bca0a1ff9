/*!
 * I/O tests entry point
 */

#[path = "io/loader_test.rs"]
mod loader_test;

#[path = "io/report_test.rs"]
mod report_test;
