use cssattr::{Converter, Mode, NullLogger, Options, Property, RejectionKind, ValueKind};


fn colors(property: Property, raw: &str) -> Vec<[u8; 3]> {
    let converter = Converter::new(&Options::default());
    converter
        .convert(property, raw)
        .unwrap()
        .as_colors()
        .unwrap()
        .iter()
        .map(|color| color.rgb())
        .collect()
}

converts!(
    four_colors_kept_verbatim,
    Property::BorderColor,
    "red green fuchsia aqua",
    "red green fuchsia aqua"
);
converts!(
    single_named_color,
    Property::BorderColor,
    "red",
    "red"
);
converts!(
    preserves_named_color_case,
    Property::Color,
    "OrAnGe",
    "OrAnGe"
);
converts!(
    preserves_hex_color_case,
    Property::BackgroundColor,
    "#FfFfFf",
    "#FfFfFf"
);
converts!(
    short_hex,
    Property::Color,
    "#abc",
    "#abc"
);
converts!(
    rgb_function_is_one_token,
    Property::BorderColor,
    "rgb(1, 2, 3) #abcdef red",
    "rgb(1, 2, 3) #abcdef red"
);
converts!(
    rgb_percentages,
    Property::Color,
    "rgb(100%, 0%, 0%)",
    "rgb(100%, 0%, 0%)"
);

#[test]
fn single_color_is_typed() {
    let converter = Converter::new(&Options::default());
    let value = converter.convert(Property::BorderColor, "red").unwrap();

    assert!(!value.is_raw());
    assert!(matches!(value.kind(), ValueKind::Colors(colors) if colors.len() == 1));
    assert_eq!("red", value.to_string());
}

#[test]
fn multiplicity_is_preserved() {
    assert_eq!(
        vec![[255, 0, 0], [0, 128, 0], [255, 0, 255], [0, 255, 255]],
        colors(Property::BorderColor, "red green fuchsia aqua")
    );
}

#[test]
fn many_colors_are_accepted() {
    let raw = "red green blue black white navy teal olive";
    assert_eq!(8, colors(Property::BorderColor, raw).len());
}

#[test]
fn channel_values() {
    assert_eq!(vec![[255, 0, 0]], colors(Property::Color, "#FF0000"));
    assert_eq!(vec![[0xaa, 0xbb, 0xcc]], colors(Property::Color, "#abc"));
    assert_eq!(vec![[1, 2, 3]], colors(Property::Color, "rgb(1,2,3)"));
    assert_eq!(vec![[255, 0, 0]], colors(Property::Color, "rgb(100%, 0%, 0%)"));
    assert_eq!(vec![[128, 128, 128]], colors(Property::Color, "rgb(50%, 50%, 50%)"));
    assert_eq!(vec![[255, 0, 0]], colors(Property::Color, "rgb(300, -5, 0)"));
    assert_eq!(vec![[128, 128, 128]], colors(Property::Color, "Grey"));
}

#[test]
fn color_literal_is_kept() {
    let converter = Converter::new(&Options::default());
    let value = converter
        .convert(Property::BorderColor, "RED #0F0")
        .unwrap();
    let literals: Vec<&str> = value
        .as_colors()
        .unwrap()
        .iter()
        .map(|color| color.literal())
        .collect();

    assert_eq!(vec!["RED", "#0F0"], literals);
}

rejected!(
    unknown_color_name,
    Property::BorderColor,
    "notacolor",
    RejectionKind::Domain
);
rejected!(
    one_unknown_color_rejects_the_list,
    Property::BorderColor,
    "red green notacolor",
    RejectionKind::Domain
);
rejected!(
    five_hex_digits,
    Property::Color,
    "#12345",
    RejectionKind::Syntax
);
rejected!(
    non_hex_digits,
    Property::Color,
    "#ggg",
    RejectionKind::Syntax
);
rejected!(
    rgb_two_channels,
    Property::Color,
    "rgb(1, 2)",
    RejectionKind::Syntax
);
rejected!(
    rgb_mixed_channels,
    Property::Color,
    "rgb(1%, 2, 3)",
    RejectionKind::Syntax
);
rejected!(
    rgb_unclosed,
    Property::BorderColor,
    "rgb(1, 2, 3",
    RejectionKind::Syntax
);
rejected!(
    unmatched_close_paren,
    Property::BorderColor,
    "red )",
    RejectionKind::Syntax
);
rejected!(
    empty_color,
    Property::BorderColor,
    "",
    RejectionKind::Syntax
);
rejected!(
    color_with_punctuation,
    Property::Color,
    "red-ish",
    RejectionKind::Syntax
);

converts!(
    lenient_keeps_raw_color_list,
    Property::BorderColor,
    "red bogus",
    "red bogus",
    Options::default().mode(Mode::Lenient).logger(&NullLogger)
);

#[test]
fn canonical_colors_are_idempotent() {
    let converter = Converter::new(&Options::default());

    for raw in ["red green fuchsia aqua", "rgb(1, 2, 3)", "#FfFfFf", " blue "] {
        let once = converter.convert(Property::BorderColor, raw).unwrap();
        let twice = converter
            .convert(Property::BorderColor, once.as_str())
            .unwrap();
        assert_eq!(once.as_str(), twice.as_str());
    }
}
