#![no_main]

use kadsel::types::method_descriptor::MethodDescriptor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(strict) = MethodDescriptor::parse_from_full_path(data) {
        let split = MethodDescriptor::parse_from_full_name(data);
        // Class names may contain parentheses, which the split parser cannot handle.
        if data.matches(['(', ')']).count() == 2 {
            assert_eq!(Ok(&strict), split.as_ref());
        }
        assert_eq!(strict.fully_qualified_name(), data);
        assert!(strict.matches(&strict));
    }
});
