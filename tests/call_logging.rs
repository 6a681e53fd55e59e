mod common;

use layerlog::{layered_info, layered_warn, logged_fn, CapturedLine, Level};

#[derive(Debug, PartialEq)]
struct Parsed {
    port: u16,
}

logged_fn! {
    /// Innermost call of the nesting scenario.
    fn inner() -> u32 {
        42
    }

    fn outer() -> u32 {
        inner() + 1
    }

    pub fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    fn parse_port(text: &str) -> Result<Parsed, std::num::ParseIntError> {
        let port = text.trim().parse::<u16>()?;
        Ok(Parsed { port })
    }

    fn load(path: &str) -> anyhow::Result<String> {
        if path.is_empty() {
            anyhow::bail!("empty path");
        }
        layered_info!("reading {}", path);
        Ok(format!("contents of {}", path))
    }

    fn early_return(limit: usize) -> usize {
        if limit == 0 {
            return 0;
        }
        limit - 1
    }

    fn touch() {}

    fn lookup(key: u8) -> Result<u8, ()> {
        if key == 0 {
            Err(())
        } else {
            Ok(key)
        }
    }

    fn decode(byte: u8) -> Result<char, DecodeError> {
        char::from_u32(u32::from(byte))
            .filter(char::is_ascii_graphic)
            .ok_or(DecodeError { byte })
    }
}

#[derive(Debug, PartialEq)]
struct DecodeError {
    byte: u8,
}

fn line(level: Level, depth: usize, message: &str) -> CapturedLine {
    CapturedLine {
        level,
        depth,
        message: message.to_string(),
    }
}

#[test]
fn test_nested_calls_emit_in_order() {
    common::install();

    assert_eq!(outer(), 43);

    let lines = common::take();
    assert_eq!(
        lines,
        vec![
            line(Level::Debug, 0, "⎡call_logging::outer()"),
            line(Level::Debug, 1, "⎡call_logging::inner()"),
            line(Level::Debug, 1, "⎣call_logging::inner -> 42"),
            line(Level::Debug, 0, "⎣call_logging::outer -> 43"),
        ]
    );
    assert_eq!(
        common::rendered(&lines),
        vec![
            "⎡call_logging::outer()",
            "⎢⎡call_logging::inner()",
            "⎢⎣call_logging::inner -> 42",
            "⎣call_logging::outer -> 43",
        ]
    );
    assert_eq!(layerlog::depth(), 0);
}

#[test]
fn test_arguments_rendered_by_name() {
    common::install();

    assert_eq!(add(2, 3), 5);

    assert_eq!(
        common::take(),
        vec![
            line(Level::Debug, 0, "⎡call_logging::add(a=2, b=3)"),
            line(Level::Debug, 0, "⎣call_logging::add -> 5"),
        ]
    );
}

#[test]
fn test_question_mark_error_propagates_unchanged() {
    common::install();

    let expected = "http".parse::<u16>().unwrap_err();
    let err = parse_port("http").unwrap_err();
    assert_eq!(err, expected);

    let lines = common::take();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        line(
            Level::Error,
            0,
            &format!("Error in call_logging::parse_port: {}", expected)
        )
    );
}

#[test]
fn test_ok_value_is_logged_as_exit() {
    common::install();

    assert_eq!(parse_port(" 8080 "), Ok(Parsed { port: 8080 }));

    let lines = common::take();
    assert_eq!(lines[0].message, "⎡call_logging::parse_port(text=\" 8080 \")");
    assert_eq!(
        lines[1].message,
        "⎣call_logging::parse_port -> Parsed { port: 8080 }"
    );
}

#[test]
fn test_adapter_lines_pick_up_call_depth() {
    common::install();

    let contents = load("a.txt").unwrap();
    assert_eq!(contents, "contents of a.txt");
    layered_warn!("after load");

    assert_eq!(
        common::rendered(&common::take()),
        vec![
            "⎡call_logging::load(path=\"a.txt\")",
            "⎢reading a.txt",
            "⎣call_logging::load -> \"contents of a.txt\"",
            "after load",
        ]
    );
}

#[test]
fn test_anyhow_error_is_the_same_error() {
    common::install();

    let err = load("").unwrap_err();
    assert_eq!(err.to_string(), "empty path");

    let errors: Vec<CapturedLine> = common::take()
        .into_iter()
        .filter(|l| l.level == Level::Error)
        .collect();
    assert_eq!(
        errors,
        vec![line(Level::Error, 0, "Error in call_logging::load: empty path")]
    );
}

#[test]
fn test_early_return_inside_body() {
    common::install();

    assert_eq!(early_return(0), 0);
    assert_eq!(early_return(5), 4);

    let lines = common::take();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1].message, "⎣call_logging::early_return -> 0");
    assert_eq!(layerlog::depth(), 0);
}

#[test]
fn test_unit_return() {
    common::install();

    touch();

    assert_eq!(
        common::rendered(&common::take()),
        vec!["⎡call_logging::touch()", "⎣call_logging::touch -> ()"]
    );
}

#[test]
fn test_log_callable_wraps_function_items() {
    common::install();

    fn square(x: u64) -> u64 {
        x * x
    }

    let logged = layerlog::log_callable(square);
    let twice = layerlog::log_callable(|x: u64| logged(x) * 2);

    assert_eq!(twice(3), 18);

    let lines = common::take();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines.iter().map(|l| l.depth).collect::<Vec<_>>(),
        vec![0, 1, 1, 0]
    );
    assert!(lines[1].message.ends_with("square(args=3)"));
    assert!(lines[2].message.ends_with("square -> 9"));
    assert!(lines[3].message.ends_with(" -> 18"));
}

#[test]
fn test_log_fallible_reports_errors() {
    common::install();

    let checked_div = layerlog::log_fallible(|(a, b): (u32, u32)| {
        a.checked_div(b).ok_or("division by zero")
    });

    assert_eq!(checked_div((8, 2)), Ok(4));
    assert_eq!(checked_div((1, 0)), Err("division by zero"));

    let lines = common::take();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3].level, Level::Error);
    assert!(lines[3].message.ends_with(": division by zero"));
}

#[test]
fn test_panicking_call_restores_depth() {
    common::install();

    logged_fn! {
        fn explode(code: u8) -> u8 {
            if code > 0 {
                panic!("code {}", code);
            }
            code
        }
    }

    let caught = std::panic::catch_unwind(|| explode(7));
    assert!(caught.is_err());
    assert_eq!(layerlog::depth(), 0);

    let lines = common::take();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].level, Level::Error);
    assert!(lines[1].message.ends_with("::explode: panicked"));
}

#[test]
fn test_unit_error_is_logged_as_failure() {
    common::install();

    assert_eq!(lookup(0), Err(()));

    assert_eq!(
        common::take(),
        vec![
            line(Level::Debug, 0, "⎡call_logging::lookup(key=0)"),
            line(Level::Error, 0, "Error in call_logging::lookup: ()"),
        ]
    );
}

#[test]
fn test_debug_only_error_is_logged_as_failure() {
    common::install();

    assert_eq!(decode(b'a'), Ok('a'));
    assert_eq!(decode(7), Err(DecodeError { byte: 7 }));

    let lines = common::take();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1].message, "⎣call_logging::decode -> 'a'");
    assert_eq!(
        lines[3],
        line(
            Level::Error,
            0,
            "Error in call_logging::decode: DecodeError { byte: 7 }"
        )
    );
}

#[test]
fn test_log_callable_reports_err_returns() {
    common::install();

    fn open(path: &str) -> Result<u32, String> {
        Err(format!("no such file: {}", path))
    }

    let logged = layerlog::log_callable(open);
    assert_eq!(logged("a.cfg"), Err("no such file: a.cfg".to_string()));

    let lines = common::take();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].level, Level::Error);
    assert!(lines[1].message.ends_with("open: no such file: a.cfg"));
}
