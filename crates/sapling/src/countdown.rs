//! Descending integer emission

use std::io::{self, Write};

use crate::Value;

/// Iterator over `n, n-1, ..., 1`.
///
/// ```
/// use sapling::{countdown, Value};
///
/// let steps: Vec<i64> = countdown(&Value::Int(3)).collect();
/// assert_eq!(steps, vec![3, 2, 1]);
/// assert_eq!(countdown(&Value::from("a")).count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Countdown {
    next: i64,
}

impl Iterator for Countdown {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.next <= 0 {
            return None;
        }
        let current = self.next;
        self.next -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.next.max(0)).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// Count down from `n`. Anything other than an integer yields nothing.
///
/// Booleans are not integers here, so `countdown(&Value::Bool(true))` is
/// empty rather than yielding `1`.
pub fn countdown(n: &Value) -> Countdown {
    Countdown {
        next: n.as_i64().unwrap_or(0),
    }
}

/// Write `n` down to 1 to `out`, one number per line.
pub fn count_down_to<W: Write>(n: &Value, out: &mut W) -> io::Result<()> {
    for step in countdown(n) {
        writeln!(out, "{}", step)?;
    }
    Ok(())
}

/// Print `n` down to 1 on stdout.
pub fn count_down(n: &Value) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    count_down_to(n, &mut lock)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted(n: &Value) -> String {
        let mut buf = Vec::new();
        count_down_to(n, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_count_down_three() {
        assert_eq!(emitted(&Value::Int(3)), "3\n2\n1\n");
    }

    #[test]
    fn test_count_down_non_positive() {
        assert_eq!(emitted(&Value::Int(0)), "");
        assert_eq!(emitted(&Value::Int(-1)), "");
    }

    #[test]
    fn test_count_down_wrong_type_is_silent() {
        assert_eq!(emitted(&Value::string("a")), "");
        assert_eq!(emitted(&Value::Float(3.0)), "");
        assert_eq!(emitted(&Value::Bool(true)), "");
    }

    #[test]
    fn test_size_hint() {
        let it = countdown(&Value::Int(5));
        assert_eq!(it.size_hint(), (5, Some(5)));
        assert_eq!(countdown(&Value::Int(-3)).size_hint(), (0, Some(0)));
    }
}
