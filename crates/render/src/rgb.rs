mod color;

use std::ops;

pub use self::color::Color;

/// Pixel coordinates, `[x, y]` with `y` growing downwards.
pub type Idx = [u32; 2];

/// A row-major pixel grid over caller-provided storage.
pub struct Buf<'m> {
    dim: [u32; 2],
    buf: &'m mut [Color],
}

impl<'m> Buf<'m> {
    pub fn new(dim @ [dx, dy]: Idx, buf: &'m mut [Color]) -> Buf<'m> {
        assert!(dx as usize * dy as usize == buf.len());
        Buf { dim, buf }
    }
    pub fn by_row(&self) -> impl Iterator<Item = Idx> {
        let [dx, dy] = self.dim;
        (0..dy).flat_map(move |y| (0..dx).map(move |x| [x, y]))
    }
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        // `chunks(0)` panics, and a zero-width image has no pixels anyway.
        self.buf.chunks(self.dim[0].max(1) as usize)
    }
    pub fn buf(&self) -> &[Color] {
        &*self.buf
    }
    pub fn buf_mut(&mut self) -> &mut [Color] {
        &mut *self.buf
    }
    pub fn dim(&self) -> Idx {
        self.dim
    }
    pub fn width(&self) -> u32 {
        self.dim[0]
    }
    pub fn height(&self) -> u32 {
        self.dim[1]
    }
    fn linear(&self, idx: Idx) -> Option<usize> {
        if !(idx[0] < self.dim[0] && idx[1] < self.dim[1]) {
            return None;
        }
        Some(idx[0] as usize + idx[1] as usize * self.dim[0] as usize)
    }
}

impl<'m> ops::Index<Idx> for Buf<'m> {
    type Output = Color;

    fn index(&self, index: Idx) -> &Self::Output {
        let l = self.linear(index).unwrap();
        &self.buf()[l]
    }
}

impl<'m> ops::IndexMut<Idx> for Buf<'m> {
    fn index_mut(&mut self, index: Idx) -> &mut Self::Output {
        let l = self.linear(index).unwrap();
        &mut self.buf_mut()[l]
    }
}

#[test]
fn test_row_major() {
    let mut storage = vec![Color::default(); 6];
    let mut buf = Buf::new([3, 2], &mut storage);
    buf[[2, 0]] = Color::new(1, 2, 3);
    buf[[0, 1]] = Color::new(4, 5, 6);
    assert_eq!(buf.buf()[2], Color::new(1, 2, 3));
    assert_eq!(buf.buf()[3], Color::new(4, 5, 6));
    assert_eq!(buf.rows().count(), 2);
    assert_eq!(buf.by_row().nth(3), Some([0, 1]));
}
