/// Developer-facing message sink (on-screen debug text, logs).
///
/// Injected per call instead of reached through a global so hosts and tests
/// decide where messages go. Nothing sent here is ever shown to players.
pub trait Diagnostics {
    fn debug_message(&mut self, message: &str);
}
