#![no_main]

use libfuzzer_sys::fuzz_target;
use push_frame::Frame;

fuzz_target!(|data: &[u8]| {
    // Frame parsing must never panic, and valid frames must re-pack identically
    if let Ok(frame) = Frame::from_bytes(data) {
        let bytes = frame.to_bytes().expect("decoded payload fits the length field");
        assert_eq!(&bytes[..], data);
    }
});
