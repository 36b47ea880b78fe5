use std::borrow::Cow;

/// Mnemonics for the control characters `0..=32`.
const CONTROL_NAMES: [&str; 33] = ["NUL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "\\a", "\\b",
                                   "\\t", "\\n", "\\v", "FF", "\\r", "SO", "SI", "DLE", "DC1",
                                   "DC2", "DC3", "DC4", "NAK", "SYN", "ETB", "CAN", "EM", "SUB",
                                   "\\e", "FS", "GS", "RS", "US", "SPACE"];

/// Name of the delete character.
const DELETE_NAME: &str = "DEL";

/// Returns the printable name of a character code.
///
/// Codes `0..=32` and `127` map to mnemonics or escape sequences, other codes
/// up to `255` map to the character itself (Latin-1 above `127`), and codes
/// outside `0..=255` produce an empty string.
///
/// # Example
/// ```
/// use hd::util::ascii::ascii_name;
///
/// assert_eq!(ascii_name(10), "\\n");
/// assert_eq!(ascii_name(65), "A");
/// assert_eq!(ascii_name(127), "DEL");
/// assert_eq!(ascii_name(300), "");
/// ```
#[must_use]
pub fn ascii_name(code: i128) -> Cow<'static, str> {
    let Ok(byte) = u8::try_from(code) else {
        return Cow::Borrowed("");
    };

    match byte {
        0..=32 => Cow::Borrowed(CONTROL_NAMES[usize::from(byte)]),
        127 => Cow::Borrowed(DELETE_NAME),
        _ => Cow::Owned(char::from(byte).to_string()),
    }
}

/// Renders the ASCII table in four column groups.
///
/// Each cell shows the code in decimal, hex and octal followed by its name.
/// The plain table covers `0..=127`; the extended one covers `0..=255`.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn ascii_table(extended: bool) -> String {
    const COLUMNS: usize = 4;

    let limit: usize = if extended { 256 } else { 128 };
    let rows = limit / COLUMNS;
    (0..rows).map(|row| {
                 let cells: Vec<String> =
                     (0..COLUMNS).map(|column| {
                                     let code = column * rows + row;
                                     let name = ascii_name(code as i128);
                                     format!("{code:3} {code:2X} {code:03o} {name:>5}")
                                 })
                                 .collect();
                 format!("{}\n", cells.join("   "))
             })
             .collect()
}
