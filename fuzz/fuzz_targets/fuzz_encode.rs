#![no_main]

use libfuzzer_sys::fuzz_target;
use push_frame::{encode, NotificationRequest};

fuzz_target!(|data: &[u8]| {
    // Arbitrary JSON descriptions: encoding either fails cleanly or yields a parseable frame
    let Ok(request) = serde_json::from_slice::<NotificationRequest>(data) else {
        return;
    };
    if let Ok(frame) = encode(&request) {
        let decoded = frame.decode().expect("encoded frame must decode");
        assert_eq!(decoded.identifier, request.identifier);
    }
});
