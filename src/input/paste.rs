//! Pasted CV text terminated by an `END` line

use crate::error::Result;
use std::io::BufRead;

pub const END_MARKER: &str = "END";

/// Collect lines until one that reads `END` (surrounding whitespace ignored)
/// or end of input. The marker line itself is dropped.
pub fn read_pasted_text<R: BufRead>(reader: R) -> Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim() == END_MARKER {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_stops_at_marker() {
        let input = Cursor::new("Jane Doe\nExcel, Valuation\n  END  \nignored\n");
        assert_eq!(read_pasted_text(input).unwrap(), "Jane Doe\nExcel, Valuation");
    }

    #[test]
    fn test_eof_without_marker() {
        let input = Cursor::new("MBA\nConsultant");
        assert_eq!(read_pasted_text(input).unwrap(), "MBA\nConsultant");
    }

    #[test]
    fn test_marker_must_be_whole_line() {
        let input = Cursor::new("ENDURANCE athlete\nEND");
        assert_eq!(read_pasted_text(input).unwrap(), "ENDURANCE athlete");
    }

    #[test]
    fn test_immediate_marker() {
        assert_eq!(read_pasted_text(Cursor::new("END\n")).unwrap(), "");
    }
}
