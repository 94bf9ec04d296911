use anyhow::Context;

use bricks_ds::{Scalar, Sequence, Value};

/// Parse a command line value.
///
/// `[a,b,c]` is a sequence whose kind is taken from its first element;
/// everything else is a scalar.
pub(crate) fn parse_value(s: &str) -> anyhow::Result<Value> {
    let trimmed = s.trim();
    if let Some(inner) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        let items = inner
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(parse_scalar)
            .collect::<Vec<_>>();
        let kind = items
            .first()
            .map(Scalar::kind)
            .with_context(|| format!("cannot tell the element kind of empty sequence {}", s))?;
        let sequence = Sequence::new(kind, items).with_context(|| format!("in {}", s))?;
        Ok(sequence.into())
    } else {
        Ok(parse_scalar(trimmed).into())
    }
}

fn parse_scalar(s: &str) -> Scalar {
    if let Ok(i) = s.parse::<i64>() {
        i.into()
    } else if let Ok(f) = s.parse::<f64>() {
        f.into()
    } else {
        s.into()
    }
}

/// Parse a comma separated list of floats.
pub(crate) fn parse_vector(s: &str) -> anyhow::Result<Vec<f64>> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<f64>()
                .with_context(|| format!("not a number: {}", item))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(parse_value("42").unwrap(), Value::from(42i64));
        assert_eq!(parse_value("-1.5").unwrap(), Value::from(-1.5f64));
        assert_eq!(parse_value("abc").unwrap(), Value::from("abc"));
    }

    #[test]
    fn test_sequence() {
        assert_eq!(
            parse_value("[1, 2, 3]").unwrap(),
            Value::from(vec![1i64, 2, 3])
        );
        assert_eq!(
            parse_value("[a,b]").unwrap(),
            Value::from(vec!["a", "b"])
        );
    }

    #[test]
    fn test_sequence_mixed() {
        assert!(parse_value("[1,x]").is_err());
    }

    #[test]
    fn test_sequence_empty() {
        assert!(parse_value("[]").is_err());
    }

    #[test]
    fn test_vector() {
        assert_eq!(parse_vector("0, 1,2").unwrap(), vec![0.0, 1.0, 2.0]);
        assert!(parse_vector("1,two").is_err());
    }
}
