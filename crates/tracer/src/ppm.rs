use std::io;

use render::rgb;

/// Writes `buf` as a plain text (`P3`) portable pixmap.
pub(crate) fn write_ppm(buf: &rgb::Buf, w: &mut dyn io::Write) -> io::Result<()> {
    let magic_number = "P3";
    let max_color = 255;
    write!(w, "{}\n{} {}\n{}\n", magic_number, buf.width(), buf.height(), max_color)?;

    for (y, row) in buf.rows().enumerate() {
        if y > 0 {
            writeln!(w)?;
        }
        for (x, color) in row.iter().enumerate() {
            if x > 0 {
                write!(w, " ")?;
            }
            write!(w, "{color}")?;
        }
    }
    Ok(())
}

#[test]
fn test_layout() {
    let mut storage = vec![rgb::Color::default(); 4];
    let mut buf = rgb::Buf::new([2, 2], &mut storage);
    buf[[1, 0]] = rgb::Color::new(255, 0, 10);
    buf[[0, 1]] = rgb::Color::new(1, 2, 3);

    let mut out = Vec::new();
    write_ppm(&buf, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out, "P3\n2 2\n255\n0 0 0 255 0 10\n1 2 3 0 0 0");
}
