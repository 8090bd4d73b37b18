pub use log::trace;

/// Installs `env_logger` as the log backend, filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = env_logger::try_init();
}
