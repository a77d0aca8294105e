use melodies::{melody::*, runtime::*};

#[test]
fn prints_the_six_lines() {
    let mut out = Vec::new();
    run(&mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "4\n<type 'function'>\n4\n<type 'function'>\n[0, 1, 2, 3, 4]\n[0, 1, 4, 9, 16]\n"
    );
}

#[test]
fn fixed_inputs() {
    assert_eq!(SQUARE_INPUT, 2);
    assert_eq!(RANGE_END, 5);
}

#[test]
fn write_failures_surface_as_io_errors() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = run(&mut Broken).unwrap_err();
    assert!(matches!(err, MelodyError::Io(_)));
}
