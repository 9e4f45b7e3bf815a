use strcalc::{calculate, compute, parse, Error, ParseError};

const SAMPLES: [&str; 8] = ["a", "ab", "hello", "aaa", "x y", "привет", "abcdefghij", "+-*/"];

fn quoted(s: &str) -> String {
    format!("\"{}\"", s)
}

#[test]
fn scenarios() -> std::result::Result<(), Box<dyn std::error::Error>> {
    assert_eq!(calculate("\"hello\" + \"world\"")?, "helloworld");
    assert_eq!(calculate("\"hello\" - \"l\"")?, "heo");
    assert_eq!(calculate("\"ab\" * 3")?, "ababab");
    assert_eq!(calculate("\"hello\" / 2")?, "he");

    assert!(matches!(calculate("\"\" + \"x\""), Err(Error::Parse(_))));
    let e = calculate("\"hello\" * \"world\"").unwrap_err();
    assert!(e.to_string().contains("requires a numeric operand"));

    Ok(())
}

#[test]
fn concat_joins_in_order() -> std::result::Result<(), Box<dyn std::error::Error>> {
    for s in SAMPLES {
        for t in SAMPLES {
            let input = format!("{} + {}", quoted(s), quoted(t));
            let result = compute(&parse(&input)?)?;
            assert_eq!(result, format!("{}{}", s, t));

            // results short enough to be operands parse back unchanged
            if let Some(again) = (result.chars().count() <= 10).then(|| quoted(&result)) {
                let input = format!("{} + \"!\"", again);
                assert_eq!(compute(&parse(&input)?)?, format!("{}!", result));
            }
        }
    }
    Ok(())
}

#[test]
fn remove_deletes_occurrences() -> std::result::Result<(), Box<dyn std::error::Error>> {
    for s in SAMPLES {
        for t in SAMPLES {
            let input = format!("{} - {}", quoted(s), quoted(t));
            let result = compute(&parse(&input)?)?;
            assert_eq!(result, s.replace(t, ""));
            if !s.contains(t) {
                assert_eq!(result, s);
            }
        }
    }
    Ok(())
}

#[test]
fn repeat_multiplies_length() -> std::result::Result<(), Box<dyn std::error::Error>> {
    for s in SAMPLES {
        for n in 1..=10 {
            let result = compute(&parse(&format!("{} * {}", quoted(s), n))?)?;
            assert_eq!(result.chars().count(), n * s.chars().count());
            assert_eq!(result, s.repeat(n));
        }
    }
    Ok(())
}

#[test]
fn truncate_keeps_proportional_prefix() -> std::result::Result<(), Box<dyn std::error::Error>> {
    for s in SAMPLES {
        let len = s.chars().count();
        for n in 1..=10 {
            let result = compute(&parse(&format!("{} / {}", quoted(s), n))?)?;
            assert_eq!(result.chars().count(), len / n);
            assert!(s.starts_with(&result));
            if n > len {
                assert_eq!(result, "");
            }
        }
    }
    Ok(())
}

#[test]
fn long_results_are_cut_for_display() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let shown = calculate("\"abcdefghij\" * 5")?;
    assert_eq!(shown, format!("{}...", "abcdefghij".repeat(4)));
    assert_eq!(shown.chars().count(), 43);

    assert_eq!(calculate("\"abcdefghij\" * 4")?, "abcdefghij".repeat(4));
    assert_eq!(
        calculate("\"abcdefghij\" + \"k\"")?,
        "abcdefghijk"
    );
    Ok(())
}

#[test]
fn invalid_input_is_reported_not_fatal() {
    for input in [
        "",
        "exit",
        "hello",
        "\"a\" * 11",
        "\"a\" / 0",
        "\"a\" + 1",
        "\"a\" & \"b\"",
        "\"abcdefghijk\" + \"b\"",
        "\"a\" + \"b\" \"c\"",
    ] {
        assert!(calculate(input).is_err(), "{:?} should fail", input);
    }
    assert_eq!(calculate("   "), Err(Error::Parse(ParseError::EmptyInput)));
}
