//! Text encoding
//!
//! A region is written as comma-separated fields:
//!
//! ```text
//! <width>,<height>,<word 0>,<word 1>,...
//! ```
//!
//! Dimensions are decimal. Words follow in storage order (column-major,
//! `width * ceil(height / 64)` of them) as lowercase hexadecimal without a
//! prefix. A region with no storage is just `<width>,<height>`.

use std::fmt::Write as _;
use std::io::{Read, Write};
use std::str::FromStr;

use super::Region;
use crate::bits::{tail_mask, words_for};
use crate::error::{Error, Result};

impl Region {
    /// Encode as text.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitregion::{Coord, Region};
    ///
    /// let region = Region::from_points(2, 70, [Coord::new(0, 1), Coord::new(1, 64)]);
    /// let text = region.to_text();
    /// assert_eq!(text, "2,70,2,0,0,1");
    /// assert_eq!(Region::from_text(&text).unwrap(), region);
    /// ```
    pub fn to_text(&self) -> String {
        let mut text = format!("{},{}", self.width, self.height);
        for word in &self.data {
            // Writing into a String cannot fail
            let _ = write!(text, ",{:x}", word);
        }
        text
    }

    /// Decode text produced by [`Region::to_text`].
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingField`] if the width or height is absent
    /// - [`Error::InvalidDimension`] if a dimension is not a number or the
    ///   region would be too large to store
    /// - [`Error::WordCount`] if the number of words does not match the
    ///   dimensions
    /// - [`Error::InvalidWord`] if a word is not hexadecimal
    /// - [`Error::TailBitsSet`] if a word has bits set beyond the height
    pub fn from_text(text: &str) -> Result<Self> {
        let result = parse(text.trim());
        if let Err(e) = &result {
            tracing::debug!(error = %e, "rejected region text");
        }
        result
    }

    /// Write the text encoding to `writer`.
    pub fn write_text<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(self.to_text().as_bytes())?;
        Ok(())
    }

    /// Read the text encoding from `reader`, consuming it to the end.
    pub fn read_text<R: Read>(reader: &mut R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_text(&text)
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

fn parse_dimension(field: Option<&str>, name: &'static str) -> Result<usize> {
    let value = field
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(Error::MissingField(name))?;
    unsigned(value)
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| Error::InvalidDimension {
            field: name,
            value: value.to_string(),
        })
}

/// `value` if it has no sign prefix, which `to_text` never writes.
fn unsigned(value: &str) -> Option<&str> {
    (!value.starts_with('+')).then_some(value)
}

fn parse(text: &str) -> Result<Region> {
    let mut fields = text.split(',');
    let width = parse_dimension(fields.next(), "width")?;
    let height = parse_dimension(fields.next(), "height")?;
    let wpc = words_for(height);
    let expected = width
        .checked_mul(wpc)
        .filter(|&n| n.checked_mul(8).is_some())
        .ok_or_else(|| Error::InvalidDimension {
            field: "width",
            value: width.to_string(),
        })?;

    let fields: Vec<&str> = fields.collect();
    if fields.len() != expected {
        return Err(Error::WordCount {
            expected,
            actual: fields.len(),
        });
    }
    let words = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let field = field.trim();
            unsigned(field)
                .and_then(|f| u64::from_str_radix(f, 16).ok())
                .ok_or_else(|| Error::InvalidWord {
                    index,
                    value: field.to_string(),
                })
        })
        .collect::<Result<Vec<u64>>>()?;

    if wpc > 0 {
        let mask = tail_mask(height);
        if let Some(column) = words
            .chunks_exact(wpc)
            .position(|column| column[wpc - 1] & !mask != 0)
        {
            return Err(Error::TailBitsSet { column });
        }
    }
    Region::from_words(width, height, words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;

    #[test]
    fn test_round_trip() {
        let mut region = Region::new(5, 130);
        region.insert(0, 0).insert(4, 129).insert_rectangle(1, 60, 2, 10);
        let text = region.to_text();
        let parsed: Region = text.parse().unwrap();
        assert_eq!(parsed, region);
        assert_eq!(parsed.words(), region.words());
    }

    #[test]
    fn test_empty_regions() {
        assert_eq!(Region::new(0, 0).to_text(), "0,0");
        assert_eq!(Region::from_text("7,0").unwrap(), Region::new(7, 0));
        assert_eq!(Region::from_text("0,9").unwrap(), Region::new(0, 9));
        assert_eq!(Region::from_text(" 1,1,0\n").unwrap(), Region::new(1, 1));
    }

    #[test]
    fn test_hex_words() {
        let region = Region::from_point(1, 64, Coord::new(0, 63));
        assert_eq!(region.to_text(), "1,64,8000000000000000");
        let full = Region::from_rectangle(1, 64, 0, 0, 1, 64);
        assert_eq!(full.to_text(), "1,64,ffffffffffffffff");
    }

    #[test]
    fn test_rejects_missing_fields() {
        assert!(matches!(
            Region::from_text(""),
            Err(Error::MissingField("width"))
        ));
        assert!(matches!(
            Region::from_text("4"),
            Err(Error::MissingField("height"))
        ));
        assert!(matches!(
            Region::from_text("4,"),
            Err(Error::MissingField("height"))
        ));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(matches!(
            Region::from_text("x,4"),
            Err(Error::InvalidDimension { field: "width", .. })
        ));
        assert!(matches!(
            Region::from_text("4,-1"),
            Err(Error::InvalidDimension { field: "height", .. })
        ));
        assert!(matches!(
            Region::from_text("+2,3,1,0"),
            Err(Error::InvalidDimension { field: "width", .. })
        ));
        assert!(matches!(
            Region::from_text("2,+3,1,0"),
            Err(Error::InvalidDimension { field: "height", .. })
        ));
        let huge = format!("{},{}", usize::MAX, 128);
        assert!(matches!(
            Region::from_text(&huge),
            Err(Error::InvalidDimension { field: "width", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_words() {
        assert!(matches!(
            Region::from_text("2,3,1"),
            Err(Error::WordCount {
                expected: 2,
                actual: 1
            })
        ));
        assert!(matches!(
            Region::from_text("2,3,1,2,3"),
            Err(Error::WordCount {
                expected: 2,
                actual: 3
            })
        ));
        assert!(matches!(
            Region::from_text("2,3,1,zz"),
            Err(Error::InvalidWord { index: 1, .. })
        ));
        assert!(matches!(
            Region::from_text("2,3,1,"),
            Err(Error::InvalidWord { index: 1, .. })
        ));
        assert!(matches!(
            Region::from_text("2,3,1,+0"),
            Err(Error::InvalidWord { index: 1, .. })
        ));
        assert!(matches!(
            Region::from_text("2,3,7,8"),
            Err(Error::TailBitsSet { column: 1 })
        ));
    }

    #[test]
    fn test_write_and_read() {
        let region = Region::from_rectangle(9, 9, 2, 2, 4, 4);
        let mut buffer = Vec::new();
        region.write_text(&mut buffer).unwrap();
        let parsed = Region::read_text(&mut buffer.as_slice()).unwrap();
        assert_eq!(parsed, region);
    }
}
