//! The line-splitting rules, kept free of any I/O.

/// Apply the splitting rule to every line, returning the emitted output
/// lines in order.
///
/// Per line, after trimming surrounding whitespace:
///
/// 1. empty lines are dropped;
/// 2. lines without a `"> "` boundary pass through unchanged;
/// 3. other lines are divided at the first `"> "` and the first `" <"`
///    into an opening tag fragment, the inner text, and a closing tag
///    fragment, emitted as three lines.
///
/// Splitting is bounded to the first delimiter site, so lines with
/// repeated delimiters keep the remainder intact: `a> b> c <d` becomes
/// `a>` / `b> c` / `<d`. A line with a `"> "` boundary but no `" <"`
/// afterwards emits the remainder unchanged as its second line.
#[must_use]
pub fn reformat_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Vec::new();
    for line in lines {
        reformat_line(line, &mut out);
    }
    out
}

fn reformat_line(line: &str, out: &mut Vec<String>) {
    let stripped = line.trim();
    if stripped.is_empty() {
        return;
    }
    let Some((prefix, rest)) = stripped.split_once("> ") else {
        out.push(stripped.to_string());
        return;
    };
    out.push(format!("{prefix}>"));
    if let Some((middle, tail)) = rest.split_once(" <") {
        out.push(middle.to_string());
        out.push(format!("<{tail}"));
    } else {
        tracing::debug!(line = stripped, "opening tag fragment without a closing fragment");
        out.push(rest.to_string());
    }
}
