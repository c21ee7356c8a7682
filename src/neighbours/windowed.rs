use super::Counter;
use crate::{CellState, Grid};

/// Counts neighbours by adding whole shifted rows of the alive bitmap.
///
/// The bitmap holds one byte per cell. Every row is first summed with its
/// two horizontal shifts (a 3-wide window), then each output row is the sum
/// of the window rows above, at and below it, minus the cell itself.
/// Additions are done on `u64` words holding 8 cells each; a byte never
/// exceeds 9, so lanes never carry into each other.
#[derive(Clone, Debug, Default)]
pub struct Windowed {
    plane: Vec<u8>,
    sums: Vec<u8>,
}

const LANES: usize = std::mem::size_of::<u64>();

impl Windowed {
    /// `sums[x] = row[x - 1] + row[x] + row[x + 1]`, indices modulo `row.len()`.
    fn window_row(row: &[u8], sums: &mut [u8]) {
        let w = row.len();
        sums.copy_from_slice(row);
        for shift in [1, w - 1] {
            let shift = shift % w;
            add_lanes(&mut sums[..w - shift], &row[shift..]);
            add_lanes(&mut sums[w - shift..], &row[..shift]);
        }
    }
}

impl Counter for Windowed {
    const VECTORIZED: bool = true;

    fn count<C: CellState>(&mut self, grid: &Grid<C>, dst: &mut [u8]) {
        let (w, h) = (grid.width(), grid.height());
        assert_eq!(dst.len(), w * h);

        self.plane.clear();
        self.plane
            .extend(grid.cells().iter().map(|c| c.is_alive() as u8));
        self.sums.resize(w * h, 0);
        for (row, sums) in self
            .plane
            .chunks_exact(w)
            .zip(self.sums.chunks_exact_mut(w))
        {
            Self::window_row(row, sums);
        }

        for (y, dst_row) in dst.chunks_exact_mut(w).enumerate() {
            let y1 = if y == 0 { h - 1 } else { y - 1 };
            let y2 = if y == h - 1 { 0 } else { y + 1 };
            dst_row.copy_from_slice(&self.sums[y1 * w..(y1 + 1) * w]);
            add_lanes(dst_row, &self.sums[y * w..(y + 1) * w]);
            add_lanes(dst_row, &self.sums[y2 * w..(y2 + 1) * w]);
            sub_lanes(dst_row, &self.plane[y * w..(y + 1) * w]);
        }
    }
}

fn load(bytes: &[u8]) -> u64 {
    let mut buf = [0; LANES];
    buf.copy_from_slice(bytes);
    u64::from_ne_bytes(buf)
}

/// `dst[i] += src[i]`; no lane may overflow a byte.
fn add_lanes(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());
    let mut dst_chunks = dst.chunks_exact_mut(LANES);
    let mut src_chunks = src.chunks_exact(LANES);
    for (d, s) in (&mut dst_chunks).zip(&mut src_chunks) {
        let sum = load(d) + load(s);
        d.copy_from_slice(&sum.to_ne_bytes());
    }
    for (d, s) in dst_chunks
        .into_remainder()
        .iter_mut()
        .zip(src_chunks.remainder())
    {
        *d += s;
    }
}

/// `dst[i] -= src[i]`; requires `dst[i] >= src[i]` for every lane.
fn sub_lanes(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());
    let mut dst_chunks = dst.chunks_exact_mut(LANES);
    let mut src_chunks = src.chunks_exact(LANES);
    for (d, s) in (&mut dst_chunks).zip(&mut src_chunks) {
        let diff = load(d) - load(s);
        d.copy_from_slice(&diff.to_ne_bytes());
    }
    for (d, s) in dst_chunks
        .into_remainder()
        .iter_mut()
        .zip(src_chunks.remainder())
    {
        *d -= s;
    }
}
