use std::fs;

use hebnum::convert;
use walkdir::WalkDir;

/// One `phrase = expected` line from a fixture file.
#[derive(Debug)]
struct Case {
    line:     usize,
    phrase:   String,
    expected: Option<f64>,
}

#[test]
fn fixture_cases_hold() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/fixtures").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for case in parse_cases(&content) {
            count += 1;
            match (convert(&case.phrase), case.expected) {
                (Ok(value), Some(expected)) => {
                    let tolerance = 1e-10 * expected.abs().max(1.0);
                    assert!((value - expected).abs() <= tolerance,
                            "{path:?}:{} '{}' converted to {value}, expected {expected}",
                            case.line,
                            case.phrase);
                },
                (Ok(value), None) => panic!("{path:?}:{} '{}' converted to {value} but was \
                                             expected to fail",
                                            case.line,
                                            case.phrase),
                (Err(e), Some(_)) => panic!("{path:?}:{} '{}' failed: {e}", case.line, case.phrase),
                (Err(_), None) => {},
            }
        }
    }

    assert!(count > 0, "No cases found in tests/fixtures");
}

fn parse_cases(content: &str) -> Vec<Case> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .map(|(index, line)| {
               let (phrase, expected) = line.rsplit_once('=')
                                            .unwrap_or_else(|| panic!("line {}: missing '='",
                                                                      index + 1));
               let expected = match expected.trim() {
                   "error" => None,
                   value => Some(value.parse()
                                      .unwrap_or_else(|e| panic!("line {}: {e}", index + 1))),
               };
               Case { line: index + 1,
                      phrase: phrase.trim().to_string(),
                      expected }
           })
           .collect()
}
