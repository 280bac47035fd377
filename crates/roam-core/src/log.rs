/// Open (or create) a file in append mode for diagnostic output.
///
/// A program that owns the terminal in raw mode cannot print diagnostics to
/// stdout or stderr without corrupting its display. Hand the returned file to
/// a `tracing` subscriber instead.
///
/// ```no_run
/// use roam_core::log::log_to_file;
/// use std::io::Write;
///
/// let mut f = log_to_file("focus.log").unwrap();
/// writeln!(f, "focus moved").unwrap();
/// ```
pub fn log_to_file(path: impl AsRef<std::path::Path>) -> Result<std::fs::File, std::io::Error> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}
