//! Legacy advertising payload
//!
//! The payload carries the complete local name followed by the 128-bit
//! service UUID, both as AD structures (`len`, `type`, `data`).

use core::fmt;

use heapless::Vec;

/// Maximum legacy advertising data length
pub const MAX_ADVERTISING_LEN: usize = 31;

/// AD type: complete local name
const AD_COMPLETE_LOCAL_NAME: u8 = 0x09;
/// AD type: complete list of 128-bit service UUIDs
const AD_COMPLETE_UUID128: u8 = 0x07;

pub type AdvertisingPayload = Vec<u8, MAX_ADVERTISING_LEN>;

/// The payload does not fit a legacy advertisement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvertisingError {
    pub len: usize,
}

impl fmt::Display for AdvertisingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "advertising payload of {} bytes exceeds {} bytes",
            self.len, MAX_ADVERTISING_LEN
        )
    }
}

impl core::error::Error for AdvertisingError {}

/// Build the advertising payload for `name` and one 128-bit service UUID
///
/// The UUID is given in its canonical big-endian form and written
/// little-endian, as the air format requires.
pub fn advertising_payload(
    name: &str,
    service_uuid: u128,
) -> Result<AdvertisingPayload, AdvertisingError> {
    let len = 2 + name.len() + 2 + 16;
    let too_long = AdvertisingError { len };
    if len > MAX_ADVERTISING_LEN {
        return Err(too_long);
    }

    let mut payload = AdvertisingPayload::new();
    payload
        .extend_from_slice(&[name.len() as u8 + 1, AD_COMPLETE_LOCAL_NAME])
        .map_err(|()| too_long)?;
    payload
        .extend_from_slice(name.as_bytes())
        .map_err(|()| too_long)?;
    payload
        .extend_from_slice(&[17, AD_COMPLETE_UUID128])
        .map_err(|()| too_long)?;
    payload
        .extend_from_slice(&service_uuid.to_le_bytes())
        .map_err(|()| too_long)?;

    Ok(payload)
}
