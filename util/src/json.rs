//! JSON shortcuts for any serde-serializable value.
//!
//! The plain methods report failures as `None` (and log them at debug level);
//! the `try_*` methods return the underlying [Error].

use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::file::{read_file, write_file, Visibility};

/// Encoding helpers, implemented for every [Serialize] type
pub trait ToJsonExt: Serialize {
    /// Encode as JSON bytes, or `None` if the value cannot be encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use extkit_util::json::ToJsonExt;
    ///
    /// #[derive(serde::Serialize)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let bytes = Point { x: 1, y: 2 }.to_json_bytes().unwrap();
    /// assert_eq!(bytes, br#"{"x":1,"y":2}"#);
    /// ```
    fn to_json_bytes(&self) -> Option<Vec<u8>> {
        self.try_to_json_bytes()
            .map_err(|e| debug!("Could not encode value as JSON: {e}"))
            .ok()
    }

    fn try_to_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Encode and reinterpret as a JSON object; `None` unless the value encodes to an object
    fn to_json_map(&self) -> Option<Map<String, Value>> {
        self.try_to_json_map()
            .map_err(|e| debug!("Could not convert value into a JSON object: {e}"))
            .ok()
    }

    fn try_to_json_map(&self) -> Result<Map<String, Value>> {
        let bytes = self.try_to_json_bytes()?;
        match serde_json::from_slice(&bytes)? {
            Value::Object(map) => Ok(map),
            _ => Err(Error::NotAnObject),
        }
    }

    /// Encode and write to `path`.
    ///
    /// If the value cannot be encoded nothing is written and `Ok(())` is
    /// returned; only the write itself can fail.
    fn write_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        match self.to_json_bytes() {
            Some(bytes) => write_file(path, &bytes, Visibility::Public),
            None => {
                debug!(
                    "Skipping write to {:?}, value did not encode",
                    path.as_ref()
                );
                Ok(())
            }
        }
    }
}

impl<T: Serialize + ?Sized> ToJsonExt for T {}

/// Decoding helpers, implemented for every [DeserializeOwned] type
pub trait FromJsonExt: DeserializeOwned {
    /// Decode from JSON bytes; `None` if they are malformed or do not fit `Self`
    fn from_json_bytes(bytes: &[u8]) -> Option<Self> {
        Self::try_from_json_bytes(bytes)
            .map_err(|e| debug!("Could not decode JSON: {e}"))
            .ok()
    }

    fn try_from_json_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Read and decode the JSON file at `path`; `None` on any read or decode failure
    fn from_json_file<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();
        Self::try_from_json_file(path)
            .map_err(|e| debug!("Could not load JSON from {path:?}: {e}"))
            .ok()
    }

    fn try_from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = read_file(path)?;
        Self::try_from_json_bytes(&bytes)
    }
}

impl<T: DeserializeOwned> FromJsonExt for T {}
