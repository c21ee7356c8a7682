/// Integer printed with `'` between groups of three digits (`1'048'576`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NiceInt(u128);

impl NiceInt {
    pub fn new(value: impl Into<u128>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as u128)
    }

    /// Truncates towards zero; negative and NaN values become zero.
    pub fn from_f64(value: f64) -> Self {
        Self(value as u128)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let head = digits.len() % 3;
        f.write_str(&digits[..head])?;
        for (i, group) in digits.as_bytes()[head..].chunks(3).enumerate() {
            if head != 0 || i != 0 {
                f.write_str("'")?;
            }
            f.write_str(std::str::from_utf8(group).map_err(|_| std::fmt::Error)?)?;
        }
        Ok(())
    }
}
