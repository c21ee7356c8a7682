use super::ParseRleError;

/// Live cells of a pattern together with its bounding box from the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RlePattern {
    pub width: usize,
    pub height: usize,
    /// `(x, y)` of every live cell in row-major order.
    pub cells: Vec<(usize, usize)>,
}

/// Parses a pattern in RLE format: `#` comment lines, an `x = .., y = ..`
/// header, then runs of `b` (dead), `o` (alive) and `$` (end of row)
/// terminated by `!`.
pub fn parse_rle(data: &[u8]) -> Result<RlePattern, ParseRleError> {
    let parse_next_number = |i: &mut usize| -> Result<Option<usize>, ParseRleError> {
        while *i < data.len() && !data[*i].is_ascii_digit() {
            if data[*i] == b'\n' {
                return Ok(None);
            }
            *i += 1;
        }
        let start = *i;
        while *i < data.len() && data[*i].is_ascii_digit() {
            *i += 1;
        }
        if start == *i {
            return Ok(None);
        }
        // digits only, so the slice is valid utf-8
        std::str::from_utf8(&data[start..*i])
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .map(Some)
            .ok_or(ParseRleError::BadNumber(start))
    };

    let mut i = 0;
    // skipping comment and blank lines
    while i < data.len() && matches!(data[i], b'#' | b'\n' | b'\r') {
        while i < data.len() && data[i] != b'\n' {
            i += 1;
        }
        i += 1;
    }
    // header line must start with 'x'
    if i >= data.len() || data[i] != b'x' {
        return Err(ParseRleError::MissingHeader);
    }
    let width = parse_next_number(&mut i)?.ok_or(ParseRleError::MissingHeader)?;
    let height = parse_next_number(&mut i)?.ok_or(ParseRleError::MissingHeader)?;
    while i < data.len() && data[i] != b'\n' {
        i += 1;
    }

    let out_of_bounds = |x, y| ParseRleError::OutOfBounds {
        x,
        y,
        width,
        height,
    };

    let mut cells = vec![];
    let (mut x, mut y, mut cnt) = (0, 0, 1);
    while i < data.len() {
        match data[i] {
            b'\n' | b'\r' | b' ' | b'\t' => i += 1,
            b'0'..=b'9' => {
                // cannot be `None`: the current byte is a digit
                cnt = parse_next_number(&mut i)?.unwrap_or(1);
            }
            b'o' => {
                for _ in 0..cnt {
                    if x >= width || y >= height {
                        return Err(out_of_bounds(x, y));
                    }
                    cells.push((x, y));
                    x += 1;
                }
                (i, cnt) = (i + 1, 1);
            }
            b'b' => {
                x = x
                    .checked_add(cnt)
                    .filter(|&x| x <= width)
                    .ok_or(out_of_bounds(x.saturating_add(cnt), y))?;
                (i, cnt) = (i + 1, 1);
            }
            b'$' => {
                // a trailing `$` may step just past the last row
                y = y
                    .checked_add(cnt)
                    .filter(|&y| y <= height)
                    .ok_or(out_of_bounds(0, y.saturating_add(cnt)))?;
                (x, i, cnt) = (0, i + 1, 1);
            }
            b'!' => break,
            symbol => {
                return Err(ParseRleError::UnexpectedSymbol {
                    symbol: symbol as char,
                    pos: i,
                })
            }
        }
    }
    Ok(RlePattern {
        width,
        height,
        cells,
    })
}
