use super::*;

fn solid(width: u32, height: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: px.repeat((width * height) as usize),
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_sink").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn frame_file_names_are_zero_padded() {
    assert_eq!(PngDirSink::frame_file_name(0), "00.png");
    assert_eq!(PngDirSink::frame_file_name(7), "07.png");
    assert_eq!(PngDirSink::frame_file_name(59), "59.png");
    assert_eq!(PngDirSink::frame_file_name(123), "123.png");
}

#[test]
fn in_memory_sink_captures_config_and_frames() {
    let mut sink = InMemorySink::new();
    assert!(sink.config().is_none());

    let cfg = SinkConfig {
        width: 2,
        height: 2,
        frame_count: 2,
    };
    sink.begin(cfg).unwrap();
    sink.push_frame(0, &solid(2, 2, [1, 2, 3, 255])).unwrap();
    sink.push_frame(1, &solid(2, 2, [4, 5, 6, 255])).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(cfg));
    assert_eq!(sink.frames().len(), 2);
    assert_eq!(sink.frames()[1].0, 1);
    assert_eq!(sink.frames()[1].1.pixel(1, 1), Some([4, 5, 6, 255]));

    sink.begin(cfg).unwrap();
    assert!(sink.frames().is_empty());
}

#[test]
fn png_dir_sink_creates_directory_and_writes_pngs() {
    let dir = scratch_dir("writes").join("nested");
    let mut sink = PngDirSink::new(&dir);
    sink.begin(SinkConfig {
        width: 4,
        height: 3,
        frame_count: 2,
    })
    .unwrap();
    sink.push_frame(0, &solid(4, 3, [0, 255, 255, 255])).unwrap();
    sink.push_frame(1, &solid(4, 3, [255, 0, 255, 0])).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.dir(), dir.as_path());
    assert_eq!(
        sink.written(),
        &[dir.join("00.png"), dir.join("01.png")][..]
    );

    let img = image::open(dir.join("00.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 3));
    assert_eq!(img.get_pixel(3, 2).0, [0, 255, 255, 255]);

    let img = image::open(dir.join("01.png")).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
}

#[test]
fn png_dir_sink_reports_io_errors() {
    let root = scratch_dir("blocked");
    std::fs::create_dir_all(&root).unwrap();
    let file = root.join("not_a_dir");
    std::fs::write(&file, b"x").unwrap();

    let mut sink = PngDirSink::new(file.join("frames"));
    let err = sink
        .begin(SinkConfig {
            width: 1,
            height: 1,
            frame_count: 1,
        })
        .unwrap_err();
    assert!(matches!(err, BorderError::Io(_)));
    assert!(err.to_string().starts_with("io error: "));
}
