use crate::domain::model::{RawShelfLife, ShelfLife};
use crate::utils::error::{Result, StampError};

/// Normalizes a raw catalog shelf-life value into a unit plus magnitude.
///
/// Accepted encodings:
/// - a bare integer → months, taken as-is (zero and negative counts pass
///   through; the month shifter tolerates them)
/// - a digit-only string → months (leading zeros parse normally, `"06"` → 6)
/// - `d` or `D` followed by digits → days (`"d120"` → 120 days; whitespace
///   around and after the prefix is ignored, so `"d 120"` also parses)
///
/// Anything else is a catalog data defect and fails with
/// [`StampError::ShelfLifeFormat`].
pub fn parse_shelf_life(raw: &RawShelfLife) -> Result<ShelfLife> {
    match raw {
        RawShelfLife::Number(n) => Ok(ShelfLife::Months(*n)),
        RawShelfLife::Text(s) => {
            let v = s.trim();

            if v.len() >= 2 {
                if let Some(rest) = v.strip_prefix(['d', 'D']) {
                    let num = rest.trim();
                    if is_all_digits(num) {
                        return Ok(ShelfLife::Days(parse_digits(s, num)?));
                    }
                }
            }

            if is_all_digits(v) {
                return Ok(ShelfLife::Months(parse_digits(s, v)?));
            }

            Err(StampError::ShelfLifeFormat {
                raw: format!("{:?}", s),
            })
        }
    }
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// A digit-only string can still overflow i64; treat that as the same
// format defect as a non-numeric entry.
fn parse_digits(raw: &str, digits: &str) -> Result<i64> {
    digits.parse().map_err(|_| StampError::ShelfLifeFormat {
        raw: format!("{:?}", raw),
    })
}
