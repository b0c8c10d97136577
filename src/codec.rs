//! Encoder and decoder hooks for [`Optional`].
//!
//! Any serde format sees an `Optional<T>` exactly as it would see a bare `T`:
//! * a present value is encoded as the value itself, with no envelope;
//! * an empty value is encoded as `T::default()`, unless the surrounding
//!   struct skips it with `skip_serializing_if = "Optional::is_empty"`;
//! * decoding always yields a present value, zero values included. A field
//!   missing from the input is left to the surrounding decoder, which keeps
//!   the empty default when the field is marked `#[serde(default)]`.
//!
//! ```
//! use optional::Optional;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Reading {
//!     #[serde(default, skip_serializing_if = "Optional::is_empty")]
//!     celsius: Optional<i32>,
//! }
//!
//! let empty = Reading { celsius: Optional::empty() };
//! assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");
//!
//! let zero: Reading = serde_json::from_str(r#"{"celsius":0}"#).unwrap();
//! assert_eq!(zero.celsius, Optional::present(0));
//! ```
//!
//! Plain text goes through [`std::fmt::Display`] and [`FromStr`]. Parse
//! errors of `T` are handed back untouched, so empty text for a numeric
//! type is an error rather than a present zero.

// used for plain-text decoding
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::optional::Optional;

impl<T> Serialize for Optional<T>
where
    T: Serialize + Default,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_ref().into_option() {
            Some(value) => value.serialize(serializer),
            None => T::default().serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer)
            .map(Optional::present)
            .inspect_err(|_| debug!(target_type = std::any::type_name::<T>(), "decode failed"))
    }
}

impl<T: FromStr> FromStr for Optional<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<T>().map(Optional::present).inspect_err(|_| {
            debug!(
                target_type = std::any::type_name::<T>(),
                len = s.len(),
                "plain-text decode failed"
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Omitting {
        #[serde(default, skip_serializing_if = "Optional::is_empty")]
        field: Optional<i64>,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Keeping {
        #[serde(default)]
        field: Optional<i64>,
    }

    #[test]
    fn present_encodes_as_bare_value() {
        assert_eq!(
            serde_json::to_string(&Optional::present(1000)).unwrap(),
            serde_json::to_string(&1000).unwrap()
        );
        assert_eq!(serde_json::to_string(&Optional::present("s")).unwrap(), "\"s\"");
    }

    #[test]
    fn empty_degrades_to_zero_value() {
        assert_eq!(
            serde_json::to_string(&Optional::<i64>::empty()).unwrap(),
            serde_json::to_string(&Optional::present(0i64)).unwrap()
        );
        let kept = Keeping { field: Optional::empty() };
        assert_eq!(serde_json::to_string(&kept).unwrap(), r#"{"field":0}"#);
    }

    #[test]
    fn omit_on_empty() {
        let empty = Omitting { field: Optional::empty() };
        assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");
        let zero = Omitting { field: Optional::present(0) };
        assert_eq!(serde_json::to_string(&zero).unwrap(), r#"{"field":0}"#);
    }

    #[test]
    fn zero_valued_input_decodes_present() {
        let decoded: Omitting = serde_json::from_str(r#"{"field": 0}"#).unwrap();
        assert!(decoded.field.is_present());
        assert_eq!(decoded.field.get(), (0, true));
    }

    #[test]
    fn missing_field_stays_empty() {
        let decoded: Omitting = serde_json::from_str("{}").unwrap();
        assert!(decoded.field.is_empty());
    }

    #[test]
    fn decode_errors_propagate() {
        let err = serde_json::from_str::<Omitting>(r#"{"field": "ten"}"#).unwrap_err();
        assert!(err.is_data(), "{err}");
        assert!(serde_json::from_str::<Optional<bool>>("1").is_err());
    }

    #[test]
    fn plain_text_parse() {
        assert_eq!("2".parse::<Optional<i64>>(), Ok(Optional::present(2)));
        assert_eq!("-2".parse::<Optional<i64>>(), Ok(Optional::present(-2)));
        assert!("".parse::<Optional<i64>>().is_err());
        assert!("asdf".parse::<Optional<bool>>().is_err());
        assert_eq!("false".parse::<Optional<bool>>(), Ok(Optional::present(false)));
    }
}
