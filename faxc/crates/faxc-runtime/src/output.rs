//! Output utility - Fax `println`
//!
//! `println!(a, b, c)` writes `"<a> <b> <c>\n"` to stdout. Stream failures
//! are never reported to generated code.

use crate::config::config;
use std::fmt::Display;
use std::io::{self, Write};

/// Written between consecutive items
pub const SEPARATOR: &str = " ";

/// Write `items` space-separated and newline-terminated to `out`
///
/// Zero items produce a single `"\n"`.
pub fn write_items<W: Write + ?Sized>(out: &mut W, items: &[&dyn Display]) -> io::Result<()> {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.write_all(SEPARATOR.as_bytes())?;
        }
        write!(out, "{}", item)?;
    }
    out.write_all(b"\n")
}

/// Write one line of `items` to stdout
///
/// Prefer the [`println!`](crate::println) macro, which builds the slice.
pub fn println(items: &[&dyn Display]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = write_items(&mut out, items).and_then(|()| {
        if config().flush_each_line {
            out.flush()
        } else {
            Ok(())
        }
    });
    if let Err(err) = result {
        log::debug!(target: "faxc_runtime", "println dropped: {}", err);
    }
}

/// Write a single value to stdout, with no separator or newline
pub fn print_item<T: Display + ?Sized>(value: &T) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = write!(out, "{}", value) {
        log::debug!(target: "faxc_runtime", "print_item dropped: {}", err);
    }
}

/// Print any number of `Display` values on one line
///
/// # Examples
///
/// ```
/// faxc_runtime::println!(1, "x", 2); // "1 x 2\n"
/// faxc_runtime::println!(); // "\n"
/// ```
#[macro_export]
macro_rules! println {
    () => {
        $crate::output::println(&[])
    };
    ($($item:expr),+ $(,)?) => {
        $crate::output::println(&[$(&$item as &dyn ::std::fmt::Display),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(items: &[&dyn Display]) -> String {
        let mut buf = Vec::new();
        write_items(&mut buf, items).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_is_newline() {
        assert_eq!(render(&[]), "\n");
    }

    #[test]
    fn test_single_item() {
        assert_eq!(render(&[&42]), "42\n");
    }

    #[test]
    fn test_mixed_items() {
        assert_eq!(render(&[&1, &"x", &2]), "1 x 2\n");
        assert_eq!(render(&[&true, &2.5, &'c', &String::from("s")]), "true 2.5 c s\n");
    }

    #[test]
    fn test_empty_strings_keep_separators() {
        assert_eq!(render(&[&"", &""]), " \n");
    }

    #[test]
    fn test_into_dyn_writer() {
        let mut buf: Vec<u8> = Vec::new();
        let out: &mut dyn Write = &mut buf;
        write_items(out, &[&"a", &"b"]).unwrap();
        assert_eq!(buf, b"a b\n");
    }

    #[test]
    fn test_macro_forms_smoke() {
        crate::println!();
        crate::println!(1, "x", 2);
        crate::println!("trailing",);
        print_item("item");
        print_item(&3);
    }
}
