//! Capturing `log` backend for integration tests.
//!
//! Lines are kept per test thread, so tests running in parallel only see
//! their own output.

use std::cell::RefCell;
use std::sync::Once;

use layerlog::{record_depth, CapturedLine};
use log::{LevelFilter, Log, Metadata, Record};

struct ThreadCapture;

thread_local! {
    static LINES: RefCell<Vec<CapturedLine>> = const { RefCell::new(Vec::new()) };
    static PLAIN: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

impl Log for ThreadCapture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        match record_depth(record) {
            Some(depth) => LINES.with(|lines| {
                lines.borrow_mut().push(CapturedLine {
                    level: record.level(),
                    depth,
                    message: record.args().to_string(),
                })
            }),
            // Plain records from other crates are skipped.
            None if record.target().starts_with("layerlog") => {
                PLAIN.with(|plain| plain.borrow_mut().push(record.args().to_string()))
            }
            None => {}
        }
    }

    fn flush(&self) {}
}

static CAPTURE: ThreadCapture = ThreadCapture;

pub fn install() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).expect("no other logger in tests");
        log::set_max_level(LevelFilter::Trace);
    });
    take();
    take_plain();
}

pub fn take() -> Vec<CapturedLine> {
    LINES.with(|lines| std::mem::take(&mut *lines.borrow_mut()))
}

#[allow(dead_code)]
pub fn rendered(lines: &[CapturedLine]) -> Vec<String> {
    lines.iter().map(|line| line.render('⎢')).collect()
}

/// Records from this crate that carried no depth.
#[allow(dead_code)]
pub fn take_plain() -> Vec<String> {
    PLAIN.with(|plain| std::mem::take(&mut *plain.borrow_mut()))
}
