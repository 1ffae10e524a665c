//! Shared helpers for sda tests.
//!
//! Keeping these in a workspace-only crate avoids copy-paste across the
//! container property tests and the interpreter transcript tests.

pub mod proptest;

/// Runs an interpreter over `script` and returns everything it printed.
///
/// `run` receives the script bytes as its input and a buffer for its output,
/// matching the shape of every `sda_repl` exercise entry point.
///
/// ```
/// let out = sda_testkit::run_script("hello", |input, out| {
///     out.extend_from_slice(input);
///     Ok::<(), std::io::Error>(())
/// });
/// assert_eq!(out, "hello");
/// ```
pub fn run_script<E, F>(script: &str, run: F) -> String
where
    E: std::fmt::Debug,
    F: FnOnce(&[u8], &mut Vec<u8>) -> Result<(), E>,
{
    let mut out = Vec::new();
    if let Err(err) = run(script.as_bytes(), &mut out) {
        panic!("script failed: {err:?}\n--- script ---\n{script}");
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Builds a script from lines, terminating each with a newline.
pub fn script<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().fold(String::new(), |mut acc, line| {
        acc.push_str(line.as_ref());
        acc.push('\n');
        acc
    })
}

/// Renders an edge list as the `a b` lines read by the graph exercises.
pub fn edge_lines(edges: &[(usize, usize)]) -> Vec<String> {
    edges.iter().map(|(a, b)| format!("{a} {b}")).collect()
}
