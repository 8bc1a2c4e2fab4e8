#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

struct Broken;

impl Write for Broken {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_string_emitter() {
    let mut emitter = StringEmitter::new();
    emitter.emit("ns {");
    emitter.emit_newline();
    emitter.emit_indent(4);
    emitter.emit("x = 1");
    assert_eq!(emitter.as_str(), "ns {\n    x = 1");
    assert_eq!(emitter.output(), "ns {\n    x = 1");
}

#[test]
fn test_io_emitter_writes_through() {
    let mut emitter = IoEmitter::new(Vec::new());
    emitter.emit("a");
    emitter.emit_indent(2);
    emitter.emit("b");
    emitter.emit_newline();
    assert_eq!(emitter.finish().unwrap(), b"a  b\n");
}

#[test]
fn test_io_emitter_reports_first_error() {
    let mut emitter = IoEmitter::new(Broken);
    emitter.emit("lost");
    emitter.emit_newline();
    let err = emitter.finish().err().unwrap();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}
