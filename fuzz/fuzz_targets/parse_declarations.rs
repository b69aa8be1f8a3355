#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for mode in [cssattr::Mode::Strict, cssattr::Mode::Lenient] {
            let options = cssattr::Options::default().mode(mode).quiet(true);

            if let Ok(attributes) = cssattr::parse_declarations(s.to_owned(), &options) {
                let converter = cssattr::Converter::new(&options);

                // stored values convert back to themselves
                for (property, value) in &attributes {
                    if value.is_raw() {
                        continue;
                    }

                    let again = converter.convert(*property, value.as_str());
                    assert_eq!(Some(value), again.as_ref());
                }
            }
        }
    }
});
