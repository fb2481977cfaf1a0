//! Helpers shared by the integration suites.

/// Routes `log` output through the test harness. Run with `RUST_LOG=trace`
/// to see the library's diagnostics for a failing test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
