//! Shared helpers for the integration tests. Each test binary uses a
//! different subset, hence the `dead_code` allowances.

const VOID_ELEMENTS: [&str; 2] = ["br", "img"];

/// Asserts that every tag in `html` is closed, in reverse order of opening.
///
/// # Panics
/// Panics with the offending tag and the open stack if nesting is broken.
#[allow(dead_code)]
pub fn assert_well_formed(html: &str) {
    let mut open: Vec<&str> = Vec::new();
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        let Some(len) = rest[start..].find('>') else {
            panic!("unterminated tag in {html:?}");
        };
        let tag = &rest[start + 1..start + len];
        rest = &rest[start + len + 1..];

        if let Some(name) = tag.strip_prefix('/') {
            let expected = open.pop();
            assert_eq!(
                expected,
                Some(name),
                "closing </{name}> does not match open stack {open:?} in {html:?}"
            );
            continue;
        }

        let name = tag.split_whitespace().next().unwrap_or(tag);
        if !VOID_ELEMENTS.contains(&name) {
            open.push(name);
        }
    }

    assert!(open.is_empty(), "unclosed tags {open:?} in {html:?}");
}

/// Reads a fixture from `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("could not read {path}: {e}"))
}
