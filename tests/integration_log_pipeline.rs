use anyhow::Result;
use duolog::{vals, Logger};
use std::fs;

/// Check one log line against `[YYYY-MM-DD HH:MM:SS] [LABEL] content`.
fn assert_line_shape(line: &str, label: &str, content: &str) {
    let expected_tail = format!("] [{}] {}", label, content);
    assert!(
        line.ends_with(&expected_tail),
        "line {:?} does not end with {:?}",
        line,
        expected_tail
    );

    let ts = &line[1..line.len() - expected_tail.len()];
    assert_eq!(ts.len(), 19, "timestamp {:?} is not second-resolution", ts);
    for (i, b) in ts.bytes().enumerate() {
        match i {
            4 | 7 => assert_eq!(b, b'-'),
            10 => assert_eq!(b, b' '),
            13 | 16 => assert_eq!(b, b':'),
            _ => assert!(b.is_ascii_digit(), "timestamp {:?} malformed", ts),
        }
    }
}

/// Setting a file target and logging appends exactly one well-formed line
/// per call, identical to the console format minus color.
#[test]
fn file_receives_formatted_lines() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let log = Logger::with_log_dir(dir.path());

    log.set_file_logger("test.log", false);
    log.info("hello", vals![]);
    log.debug("%s-%d", vals!["x", 5]);
    log.stop_file_logging();

    let content = fs::read_to_string(dir.path().join("test.log"))?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_line_shape(lines[0], "INFO", "hello");
    assert_line_shape(lines[1], "DEBUG", "x-5");
    Ok(())
}

/// Switching targets closes the first file intact; only the second receives
/// subsequent writes.
#[test]
fn switching_targets_closes_previous_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let log = Logger::with_log_dir(dir.path());

    log.set_file_logger("first.log", false);
    log.warn("before the switch", vals![]);

    log.set_file_logger("second.log", false);
    log.warn("after the switch", vals![]);
    log.stop_file_logging();

    // The first file is readable and holds exactly the pre-switch write.
    let first = fs::read_to_string(dir.path().join("first.log"))?;
    let first_lines: Vec<&str> = first.lines().collect();
    assert_eq!(first_lines.len(), 1);
    assert_line_shape(first_lines[0], "WARN", "before the switch");

    let second = fs::read_to_string(dir.path().join("second.log"))?;
    let second_lines: Vec<&str> = second.lines().collect();
    assert_eq!(second_lines.len(), 1);
    assert_line_shape(second_lines[0], "WARN", "after the switch");
    Ok(())
}

/// After stopping file logging, calls keep working and write no files.
#[test]
fn logging_after_stop_is_console_only() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let log = Logger::with_log_dir(dir.path());

    log.set_file_logger("stopped.log", false);
    log.info("recorded", vals![]);
    log.stop_file_logging();
    log.info("not recorded", vals![]);

    let content = fs::read_to_string(dir.path().join("stopped.log"))?;
    assert_eq!(content.lines().count(), 1);

    // Stopping again is a no-op, not an error.
    log.stop_file_logging();
    Ok(())
}

/// All five severity entry points write their own label.
#[test]
fn all_severities_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let log = Logger::with_log_dir(dir.path());

    log.set_file_logger("levels.log", false);
    log.info("an %s message", vals!["info"]);
    log.debug("a %s message", vals!["debug"]);
    log.warn("a %s message", vals!["warn"]);
    log.critical("a %s message", vals!["critical"]);
    log.fatal("a %s message", vals!["fatal"]);
    log.stop_file_logging();

    let content = fs::read_to_string(dir.path().join("levels.log"))?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_line_shape(lines[0], "INFO", "an info message");
    assert_line_shape(lines[1], "DEBUG", "a debug message");
    assert_line_shape(lines[2], "WARN", "a warn message");
    assert_line_shape(lines[3], "CRITICAL", "a critical message");
    assert_line_shape(lines[4], "FATAL", "a fatal message");
    Ok(())
}

/// The date option prefixes the file name with the current local date.
#[test]
fn date_prefixed_file_name() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let log = Logger::with_log_dir(dir.path());

    log.set_file_logger("daily.log", true);
    let target = log.file_target().expect("file sink should be active");
    log.stop_file_logging();

    // YYYY-MM-DD_daily.log
    assert_eq!(target.len(), "0000-00-00_daily.log".len());
    assert!(target.ends_with("_daily.log"));
    let date = &target[..10];
    for (i, b) in date.bytes().enumerate() {
        if i == 4 || i == 7 {
            assert_eq!(b, b'-');
        } else {
            assert!(b.is_ascii_digit());
        }
    }
    assert!(dir.path().join(&target).exists());
    Ok(())
}

/// An unopenable target degrades to console-only logging; nothing panics
/// and later reconfiguration still works.
#[test]
fn open_failure_leaves_logger_usable() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let log = Logger::with_log_dir(dir.path());

    // Occupy the target path with a directory so the open must fail.
    fs::create_dir_all(dir.path().join("blocked.log"))?;
    log.set_file_logger("blocked.log", false);
    assert_eq!(log.file_target(), None);

    log.info("still alive", vals![]);

    // A valid target afterwards works normally.
    log.set_file_logger("recovered.log", false);
    log.info("back on disk", vals![]);
    log.stop_file_logging();
    let content = fs::read_to_string(dir.path().join("recovered.log"))?;
    assert_eq!(content.lines().count(), 1);
    Ok(())
}
