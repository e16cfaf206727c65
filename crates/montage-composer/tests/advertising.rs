mod tests {
    use montage_composer::advertising::MAX_ADVERTISING_LEN;
    use montage_composer::{AdvertisingError, advertising_payload};

    const SERVICE: u128 = 0x3322271e_756a_443d_8a9d_2f90c7a73bf5;

    #[test]
    fn test_payload_layout() {
        let payload = advertising_payload("ESP32_BLE", SERVICE).unwrap();

        assert_eq!(payload.len(), 2 + 9 + 2 + 16);
        assert_eq!(&payload[..2], &[10, 0x09]);
        assert_eq!(&payload[2..11], b"ESP32_BLE");
        assert_eq!(&payload[11..13], &[17, 0x07]);
    }

    #[test]
    fn test_uuid_is_little_endian() {
        let payload = advertising_payload("ESP32_BLE", SERVICE).unwrap();
        let uuid = &payload[13..];

        assert_eq!(uuid[0], 0xf5);
        assert_eq!(uuid[15], 0x33);
    }

    #[test]
    fn test_payload_too_long() {
        let name = "a-device-name-well-past-limit";
        assert_eq!(
            advertising_payload(name, SERVICE),
            Err(AdvertisingError {
                len: 4 + 16 + name.len()
            })
        );
    }

    #[test]
    fn test_longest_name_that_fits() {
        let name = "0123456789a";
        let payload = advertising_payload(name, SERVICE).unwrap();
        assert_eq!(payload.len(), MAX_ADVERTISING_LEN);
    }
}
