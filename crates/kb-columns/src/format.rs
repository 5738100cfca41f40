use crate::types::{FieldKind, Value};

/// A parsed printf-style column pattern: `%[-][0][width][.precision](d|f|s)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormat {
    pattern: String,
    conversion: Conversion,
    width: usize,
    precision: Option<usize>,
    left: bool,
    zero: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Integer,
    Fixed,
    Text,
}

/// `%f` without an explicit precision prints six decimals.
const DEFAULT_PRECISION: usize = 6;

impl TextFormat {
    /// Parse a pattern. The error is a human-readable reason; the registry wraps it with the
    /// table and column it was declared for.
    pub fn parse(pattern: &str) -> Result<Self, String> {
        let Some(rest) = pattern.strip_prefix('%') else {
            return Err("pattern must start with `%`".to_string());
        };

        let mut chars = rest.chars().peekable();
        let (mut left, mut zero) = (false, false);
        while let Some(&c) = chars.peek() {
            match c {
                '-' => left = true,
                '0' => zero = true,
                _ => break,
            }
            chars.next();
        }

        let width = take_number(&mut chars).unwrap_or(0);
        let precision = if chars.peek() == Some(&'.') {
            chars.next();
            Some(take_number(&mut chars).ok_or("missing precision after `.`")?)
        } else {
            None
        };

        let conversion = match chars.next() {
            Some('d') => Conversion::Integer,
            Some('f') => Conversion::Fixed,
            Some('s') => Conversion::Text,
            Some(other) => return Err(format!("unsupported conversion `{other}`")),
            None => return Err("missing conversion character".to_string()),
        };
        if let Some(trailing) = chars.next() {
            return Err(format!("unexpected `{trailing}` after conversion"));
        }
        if precision.is_some() && conversion != Conversion::Fixed {
            return Err("precision is only supported for `%f`".to_string());
        }
        if zero && conversion == Conversion::Text {
            return Err("zero padding is not supported for `%s`".to_string());
        }

        Ok(Self {
            pattern: pattern.to_string(),
            conversion,
            width,
            precision,
            left,
            zero,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The column kind this pattern can render.
    pub fn kind(&self) -> FieldKind {
        match self.conversion {
            Conversion::Integer => FieldKind::Integer64,
            Conversion::Fixed => FieldKind::Float64,
            Conversion::Text => FieldKind::Text,
        }
    }

    pub fn render(&self, value: &Value) -> String {
        let zero_pad = self.zero && !self.left;
        let width = self.width;
        let body = match value {
            Value::Integer(v) if zero_pad => format!("{v:0width$}"),
            Value::Float(v) => {
                let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
                if zero_pad && v.is_finite() {
                    format!("{v:0width$.precision$}")
                } else {
                    format!("{v:.precision$}")
                }
            }
            other => other.to_string(),
        };
        self.pad(body)
    }

    fn pad(&self, body: String) -> String {
        let width = self.width;
        if body.chars().count() >= width {
            body
        } else if self.left {
            format!("{body:<width$}")
        } else {
            format!("{body:>width$}")
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut number: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        number = Some(number.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
    }
    number
}
