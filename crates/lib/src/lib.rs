/*!
This crate validates raw CSS declaration values and stores them, normalized,
in ordered attribute sets.

Every supported property has a rule: a fixed keyword set, a length policy, a
color list, or `url(...)`-or-`none`. In the default strict mode a value that
breaks its property's rule is dropped. Lenient mode keeps a per-property
fallback instead: usually the raw text, but `list-style-type` falls back to
`disc` and the border widths to `medium`.

## Use as library
```
fn main() -> Result<(), Box<cssattr::Error>> {
    let attributes = cssattr::parse_declarations(
        "background-image: url('bg.jpg'); border-color: red green fuchsia aqua",
        &cssattr::Options::default(),
    )?;
    assert_eq!(
        attributes.to_string(),
        "background-image: url('bg.jpg'); border-color: red green fuchsia aqua;"
    );
    Ok(())
}
```

## Use as binary
```bash
cargo install cssattr
cssattr --mode lenient style.css
```
*/

#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    clippy::missing_docs_in_private_items,
    clippy::module_name_repetitions,
    renamed_and_removed_lints,
    clippy::unknown_clippy_lints,
    clippy::single_match,
    clippy::missing_errors_doc,
    clippy::multiple_crate_versions,
    clippy::uninlined_format_args,
    unknown_lints,
)]

pub use cssattr_converter::*;
