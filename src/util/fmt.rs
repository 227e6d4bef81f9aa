use std::fmt::{self, Debug, Display, Formatter};

/// Writes the contained string as-is when formatted with [`Debug`], so pre-rendered output can be
/// nested inside a `debug_struct` without being quoted.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders every item with [`Display`], separated by `sep`.
pub fn join<I>(items: I, sep: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items.into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(join([1, 2, 3], ", "), "1, 2, 3");
        assert_eq!(join(Vec::<i32>::new(), ", "), "");
        assert_eq!(format!("{:?}", DebugRaw("a -> b".into())), "a -> b");
    }
}
