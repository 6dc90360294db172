use std::io;
use std::sync::{Arc, Mutex};

use stimcolor::{AdvancedColor, CalibrationMatrix, Color, Space, DEFAULT_LMS_MATRIX};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct MockLogWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MockLogWriter {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl io::Write for MockLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MockLogWriter {
    type Writer = MockLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
    let writer = MockLogWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, writer.contents())
}

#[test]
fn uncalibrated_lms_warns_but_resolves() {
    let (color, logs) = capture(|| AdvancedColor::new((0.1, 0.2, 0.1), Space::Lms, None));
    assert!(color.is_valid());
    assert!(logs.contains("WARN"));
    assert!(logs.contains("has not been color-calibrated"));
    assert!(logs.contains("LMS"));
}

#[test]
fn calibrated_lms_is_quiet() {
    let calibration = CalibrationMatrix::from_rows(DEFAULT_LMS_MATRIX);
    let (color, logs) =
        capture(|| AdvancedColor::new((0.1, 0.2, 0.1), Space::Lms, calibration));
    assert!(color.is_valid());
    assert!(!logs.contains("calibrated"));
}

#[test]
fn unresolvable_values_are_logged() {
    let (color, logs) = capture(|| Color::new("octarine", None));
    assert!(!color.is_valid());
    assert!(logs.contains("ERROR"));
    assert!(logs.contains("octarine"));
}

#[test]
fn space_mismatch_is_a_warning() {
    let (color, logs) = capture(|| Color::new("#ff0000", Space::Rgb255));
    assert!(color.is_valid());
    assert!(logs.contains("WARN"));
    assert!(logs.contains("detecting its space"));
    assert!(!logs.contains("ERROR"));
}

#[test]
fn dkl_from_rgb_is_an_error() {
    let color = AdvancedColor::new((0.1, 0.2, 0.3), Space::Rgb, None);
    let (dkl, logs) = capture(|| color.dkl());
    assert_eq!(dkl, None);
    assert!(logs.contains("ERROR"));
}

#[test]
fn candidates_are_logged_for_diagnostics() {
    let raw = stimcolor::RawValue::from((0.5, 0.5, 0.5));
    let (candidates, logs) = capture(|| stimcolor::space::detect_candidates(&raw));
    assert_eq!(candidates[0], Space::Rgb);
    assert!(candidates.contains(&Space::Rgb1));
    assert!(candidates.contains(&Space::Hsv));
    assert!(logs.contains("Candidate spaces"));
}
