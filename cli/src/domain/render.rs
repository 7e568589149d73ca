//! Rendering of one target's captured output.

/// Split captured output at newlines, keeping each `\n` with its line.
///
/// Empty segments never appear; a final line without a newline is returned
/// as-is.
pub fn output_segments(output: &[u8]) -> impl Iterator<Item = &[u8]> {
    output
        .split_inclusive(|b| *b == b'\n')
        .filter(|segment| !segment.is_empty())
}

/// Render captured output for display.
///
/// Without `prefix` the bytes are returned untouched. With `prefix` every line
/// is tagged `[<target>] ` and is guaranteed to end with a newline.
#[must_use]
pub fn render_output(target: &str, output: &[u8], prefix: bool) -> Vec<u8> {
    if !prefix {
        return output.to_vec();
    }

    let tag = format!("[{target}] ");
    let mut rendered = Vec::with_capacity(output.len() + tag.len() * 4);
    for segment in output_segments(output) {
        rendered.extend_from_slice(tag.as_bytes());
        rendered.extend_from_slice(segment);
        if !segment.ends_with(b"\n") {
            rendered.push(b'\n');
        }
    }
    rendered
}
