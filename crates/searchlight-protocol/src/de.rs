use serde::{de, Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// Reads a counter that may arrive as a number or as text.
///
/// Exports leave cells empty when a page had no activity, so a blank string
/// becomes the default (zero). Other text must parse as the target type.
pub fn blank_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr + Default,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cell<T> {
        Number(T),
        Text(String),
    }

    match Cell::<T>::deserialize(deserializer)? {
        Cell::Number(value) => Ok(value),
        Cell::Text(text) if text.trim().is_empty() => Ok(T::default()),
        Cell::Text(text) => text.trim().parse().map_err(de::Error::custom),
    }
}
