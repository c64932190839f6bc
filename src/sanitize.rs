/// Elements whose body is never visible text and is dropped together with the tags.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Remove markup tags from untrusted text, keeping the visible text content.
///
/// Best effort: a `<` that does not open a tag (e.g. `a < b`) is kept as text,
/// comments are dropped, `<script>`/`<style>` bodies are dropped, and a tag left
/// open at the end of the input is discarded. Never fails.
///
/// Passes repeat until the text stops changing, so pieces left around a removed
/// tag cannot join into a new one. Each pass only removes characters.
pub fn strip_tags(input: &str) -> String {
    let mut current = strip_pass(input);
    loop {
        let next = strip_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_pass(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        if tail.starts_with("<!--") {
            rest = match tail.find("-->") {
                Some(end) => &tail[end + 3..],
                None => "",
            };
            continue;
        }

        if !opens_tag(tail) {
            out.push('<');
            rest = &tail[1..];
            continue;
        }

        let Some(end) = tag_end(tail) else {
            // Unterminated tag: nothing visible follows.
            rest = "";
            break;
        };

        let tag = &tail[1..end];
        rest = &tail[end + 1..];

        if let Some(name) = raw_text_element(tag) {
            rest = skip_past_closing(rest, name);
        }
    }

    out.push_str(rest);
    out
}

/// A `<` opens a tag when followed by a letter, `/`, `!` or `?`.
fn opens_tag(s: &str) -> bool {
    matches!(
        s[1..].chars().next(),
        Some(c) if c.is_ascii_alphabetic() || c == '/' || c == '!' || c == '?'
    )
}

/// Index of the `>` closing the tag at the start of `tail`. A `>` inside a
/// quoted attribute value does not count.
fn tag_end(tail: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut after_eq = false;
    for (i, c) in tail.char_indices().skip(1) {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '>' => return Some(i),
            '"' | '\'' if after_eq => quote = Some(c),
            _ => {}
        }
        if c == '=' {
            after_eq = true;
        } else if !c.is_whitespace() {
            after_eq = false;
        }
    }
    None
}

fn raw_text_element(tag: &str) -> Option<&'static str> {
    let name: String = tag
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    RAW_TEXT_ELEMENTS.iter().copied().find(|el| *el == name)
}

fn skip_past_closing<'a>(s: &'a str, name: &str) -> &'a str {
    let closing = format!("</{name}");
    let lower = s.to_ascii_lowercase();
    match lower.find(&closing) {
        Some(pos) => match s[pos..].find('>') {
            Some(end) => &s[pos + end + 1..],
            None => "",
        },
        None => "",
    }
}
