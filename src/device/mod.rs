//! Typed views of the camera-control server's JSON responses.
//!
//! The server answers every route with a small JSON object. The probe prints
//! bodies verbatim, but programmatic consumers of this library can decode
//! them instead:
//!
//! - `GET /` → [`Health`]: the server's hello message.
//! - `GET /getprop` → [`DeviceProperties`]: build and hardware properties.
//! - `POST /takephoto` → [`PhotoResult`]: whether the capture succeeded.
//! - `POST /opencamera` → [`CameraOpened`]: camera status message.
//!
//! All views borrow from the body text, so a decoded value lives no longer
//! than the [`Response`](crate::network::http::Response) it came from.
//!
//! ```rust
//! use camprobe::device::PhotoResult;
//!
//! let body = r#"{"success":true,"message":"Photo captured"}"#;
//! let result = PhotoResult::from_json(body).unwrap();
//! assert!(result.success);
//! ```

use serde::Deserialize;

use crate::network::error::Error;

/// Response to `GET /`, the server's health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Health<'a> {
    /// Free-form liveness message, e.g. `"Ktor server is running"`.
    pub message: &'a str,
}

/// Response to `POST /opencamera`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CameraOpened<'a> {
    /// Camera state message, e.g. `"camera opened"`.
    pub status: &'a str,
}

/// Response to `POST /takephoto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PhotoResult<'a> {
    /// Whether the capture succeeded.
    pub success: bool,
    /// Detail accompanying the outcome.
    pub message: &'a str,
}

/// Response to `GET /getprop`: the device's build and hardware properties.
///
/// The server reports whatever its platform exposes, so every field is
/// optional; unknown keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct DeviceProperties<'a> {
    /// Hardware manufacturer.
    #[serde(default, rename = "Manufacturer")]
    pub manufacturer: Option<&'a str>,
    /// Marketing model name.
    #[serde(default, rename = "Model")]
    pub model: Option<&'a str>,
    /// Industrial device name.
    #[serde(default, rename = "Device")]
    pub device: Option<&'a str>,
    /// Consumer brand.
    #[serde(default, rename = "Brand")]
    pub brand: Option<&'a str>,
    /// Hardware name.
    #[serde(default, rename = "Hardware")]
    pub hardware: Option<&'a str>,
    /// Overall product name.
    #[serde(default, rename = "Product")]
    pub product: Option<&'a str>,
    /// Board name.
    #[serde(default, rename = "Board")]
    pub board: Option<&'a str>,
    /// Bootloader version.
    #[serde(default, rename = "Bootloader")]
    pub bootloader: Option<&'a str>,
    /// Build display identifier.
    #[serde(default, rename = "Display")]
    pub display: Option<&'a str>,
    /// Build fingerprint.
    #[serde(default, rename = "Fingerprint")]
    pub fingerprint: Option<&'a str>,
    /// OS release, e.g. `"14"`.
    #[serde(default, rename = "AndroidVersion")]
    pub android_version: Option<&'a str>,
    /// SDK level, reported as a string.
    #[serde(default, rename = "SDKVersion")]
    pub sdk_version: Option<&'a str>,
    /// Unique installation identifier.
    #[serde(default, rename = "AndroidID")]
    pub android_id: Option<&'a str>,
}

impl<'a> Health<'a> {
    /// Decodes a health-check body.
    pub fn from_json(body: &'a str) -> Result<Self, Error> {
        decode(body)
    }
}

impl<'a> CameraOpened<'a> {
    /// Decodes an open-camera body.
    pub fn from_json(body: &'a str) -> Result<Self, Error> {
        decode(body)
    }
}

impl<'a> PhotoResult<'a> {
    /// Decodes a take-photo body.
    pub fn from_json(body: &'a str) -> Result<Self, Error> {
        decode(body)
    }
}

impl<'a> DeviceProperties<'a> {
    /// Decodes a device-properties body.
    pub fn from_json(body: &'a str) -> Result<Self, Error> {
        decode(body)
    }
}

/// A body that does not decode as the expected shape is a protocol error,
/// the same failure category as a malformed HTTP response.
fn decode<'a, T: Deserialize<'a>>(body: &'a str) -> Result<T, Error> {
    serde_json_core::from_str(body)
        .map(|(value, _)| value)
        .map_err(|_| Error::ProtocolError)
}
