// src/io/tokenizer.rs

/// Default field delimiter of the periodic table dataset.
pub const DEFAULT_DELIMITER: char = ',';

/// Split one raw line into its fields.
///
/// Every delimiter separates two fields, so empty fields at the start, in the
/// middle and at the end of the line are all kept. `"1,2,3,"` has four fields,
/// the last one empty, and an empty line is a single empty field.
/// Quoting is not interpreted.
pub fn split_record(line: &str, delimiter: char) -> Vec<&str> {
    // str::split already yields the trailing empty field after a final
    // delimiter, which line-stream splitting in other tools tends to drop.
    line.split(delimiter).collect()
}

/// Strip `\n` and the `\r` left over by CRLF files from a raw line.
pub fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// A row is data only when its first character is a decimal digit.
/// Headers, separators, comments and blank lines are skipped.
///
/// Works on raw bytes so a header in a legacy encoding can be skipped
/// without being decoded.
pub fn is_data_row<L: AsRef<[u8]>>(line: L) -> bool {
    line.as_ref().first().is_some_and(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_delimiter_keeps_empty_field() {
        let fields = split_record("1,2,3,", ',');
        assert_eq!(fields, vec!["1", "2", "3", ""]);
    }

    #[test]
    fn test_plain_line() {
        assert_eq!(split_record("1,2,3", ',').len(), 3);
    }

    #[test]
    fn test_empty_fields_in_the_middle_and_front() {
        assert_eq!(split_record(",a,,b", ','), vec!["", "a", "", "b"]);
    }

    #[test]
    fn test_empty_line_is_one_empty_field() {
        assert_eq!(split_record("", ','), vec![""]);
    }

    #[test]
    fn test_other_delimiter() {
        assert_eq!(split_record("1;H;;", ';'), vec!["1", "H", "", ""]);
    }

    #[test]
    fn test_data_row_admission() {
        assert!(is_data_row("1,H,1"));
        assert!(is_data_row("118,Og"));
        assert!(!is_data_row("AtomicNumber,Element"));
        assert!(!is_data_row(""));
        assert!(!is_data_row(" 1,H"));
        assert!(!is_data_row("# comment"));
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(trim_line_ending(b"1,H,255-255-255\r\n"), b"1,H,255-255-255");
        assert_eq!(trim_line_ending(b"1,H\n"), b"1,H");
        assert_eq!(trim_line_ending(b"1,H"), b"1,H");
    }

    #[test]
    fn test_admission_on_undecoded_bytes() {
        assert!(!is_data_row(b"Electronegativit\xe9".as_slice()));
        assert!(is_data_row(b"1,H\xff".as_slice()));
    }
}
