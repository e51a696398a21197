// Prefix scanners shared by date, amount and menu-choice parsing.
// Each one reads as much of a number as it can from the start of the input
// and leaves whatever follows for the caller to ignore.

/// Byte length of the signed integer at the start of `input`, or 0 if there is none.
/// Example: "12-01" -> 2, "-5x" -> 2, "+" -> 0, "abc" -> 0
pub(crate) fn integer_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = digits_len(&bytes[sign..]);
    if digits == 0 { 0 } else { sign + digits }
}

/// Byte length of the signed decimal at the start of `input`, or 0 if there is none.
/// An exponent is only taken when at least one digit follows the `e`.
/// Example: "12 euros" -> 2, "12.34.56" -> 5, ".5" -> 2, "1e3x" -> 3, "1e" -> 1
pub(crate) fn decimal_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let whole = digits_len(&bytes[end..]);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_len(&bytes[end + 1..]);
        end += 1 + fraction;
    }

    if whole + fraction == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let digits = digits_len(&bytes[exponent..]);
        if digits > 0 {
            end = exponent + digits;
        }
    }

    end
}

fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
