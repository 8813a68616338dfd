//! Spreadsheet cell-reference arithmetic.
//!
//! Column letters form a bijective base-26 numbering: the digits run A=1
//! through Z=26 with no representable zero. Folding left-to-right with
//! 1-based digits and zero-basing the final result is what keeps "A" and
//! "AA" correctly spaced (0 and 26); the naive 0-25 digit formula
//! under-counts every multi-letter column.

/// Converts the leading alphabetic run of a cell reference (e.g. `"AA7"`)
/// to a zero-based column index. Returns `None` when the reference has no
/// leading letters.
pub(crate) fn reference_to_column(reference: &str) -> Option<usize> {
    let mut index = 0usize;
    let mut letters = 0usize;
    for character in reference.chars() {
        if character.is_ascii_alphabetic() {
            let digit = (character.to_ascii_uppercase() as usize) - ('A' as usize) + 1;
            index = index * 26 + digit;
            letters += 1;
        } else {
            break;
        }
    }
    (letters > 0).then(|| index - 1)
}

/// Converts a zero-based column index back to column letters.
/// Kept symmetric with [`reference_to_column`] for round-trip testing.
#[cfg(test)]
pub(crate) fn column_to_reference(index: usize) -> String {
    let mut value = index + 1;
    let mut letters = String::new();
    while value > 0 {
        value -= 1;
        let digit = char::from_u32(('A' as u32) + (value % 26) as u32).expect("column letter");
        letters.insert(0, digit);
        value /= 26;
    }
    letters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_and_double_letter_columns() {
        assert_eq!(reference_to_column("A"), Some(0));
        assert_eq!(reference_to_column("Z"), Some(25));
        assert_eq!(reference_to_column("AA"), Some(26));
        assert_eq!(reference_to_column("AB"), Some(27));
    }

    #[test]
    fn row_digits_are_ignored() {
        assert_eq!(reference_to_column("A1"), Some(0));
        assert_eq!(reference_to_column("AA7"), Some(26));
        assert_eq!(reference_to_column("c12"), Some(2));
    }

    #[test]
    fn reference_without_letters_is_rejected() {
        assert_eq!(reference_to_column(""), None);
        assert_eq!(reference_to_column("12"), None);
    }

    #[test]
    fn round_trip_covers_single_and_double_letters() {
        for index in 0..702 {
            assert_eq!(
                reference_to_column(&column_to_reference(index)),
                Some(index),
                "index {index}",
            );
        }
    }
}
