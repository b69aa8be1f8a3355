use cssattr::{Converter, Mode, NullLogger, Number, Options, Property, RejectionKind, Unit};


fn lenient() -> Options<'static> {
    Options::default().mode(Mode::Lenient).logger(&NullLogger)
}

converts!(
    negative_text_indent,
    Property::TextIndent,
    "-11.1pt",
    "-11.1pt"
);
converts!(
    percent_width,
    Property::Width,
    "11.1%",
    "11.1%"
);
converts!(
    negative_percent_text_indent,
    Property::TextIndent,
    "-11.1%",
    "-11.1%"
);
converts!(
    negative_percent_margin,
    Property::MarginLeft,
    "-11.1%",
    "-11.1%"
);
converts!(
    negative_letter_spacing,
    Property::LetterSpacing,
    "-1.5pt",
    "-1.5pt"
);
converts!(
    unitless_line_height,
    Property::LineHeight,
    "1.5",
    "1.5"
);
converts!(
    em_word_spacing,
    Property::WordSpacing,
    "0.25em",
    "0.25em"
);
converts!(
    ex_padding,
    Property::PaddingTop,
    "2ex",
    "2ex"
);
converts!(
    absolute_units,
    Property::Height,
    "2.54cm",
    "2.54cm"
);

rejected!(
    negative_width,
    Property::Width,
    "-11.1pt",
    RejectionKind::Domain
);
rejected!(
    negative_padding,
    Property::PaddingBottom,
    "-1px",
    RejectionKind::Domain
);
rejected!(
    percent_border_width,
    Property::BorderWidth,
    "11.1%",
    RejectionKind::Domain
);
rejected!(
    percent_letter_spacing,
    Property::LetterSpacing,
    "11.1%",
    RejectionKind::Domain
);
rejected!(
    negative_percent_width,
    Property::Width,
    "-11.1%",
    RejectionKind::Domain
);
rejected!(
    negative_percent_word_spacing,
    Property::WordSpacing,
    "-11.1%",
    RejectionKind::Domain
);
rejected!(
    tiny_negative_width,
    Property::Width,
    "-0.000000000001pt",
    RejectionKind::Domain
);
rejected!(
    tiny_negative_border_width,
    Property::BorderWidth,
    "-0.00000000001pt",
    RejectionKind::Domain
);
rejected!(
    negative_line_height,
    Property::LineHeight,
    "-2",
    RejectionKind::Domain
);

converts!(leading_plus_is_dropped, Property::Width, "+5pt", "5pt");
converts!(trailing_zeros_are_dropped, Property::Width, "11.10pt", "11.1pt");
converts!(leading_zeros_are_dropped, Property::Width, "0010px", "10px");
converts!(bare_fraction, Property::TextIndent, ".5em", "0.5em");
converts!(units_are_case_insensitive, Property::Width, "12PT", "12pt");
converts!(negative_zero_is_not_negative, Property::Width, "-0pt", "0pt");

rejected!(
    two_decimal_points,
    Property::Width,
    "11.1.1pt",
    RejectionKind::Syntax
);
rejected!(
    digit_required_after_point,
    Property::Width,
    "1.pt",
    RejectionKind::Syntax
);
rejected!(
    exponent_is_not_a_unit,
    Property::Width,
    "1e3",
    RejectionKind::Syntax
);
rejected!(
    double_sign,
    Property::TextIndent,
    "--1pt",
    RejectionKind::Syntax
);
rejected!(
    space_before_unit,
    Property::Width,
    "12 pt",
    RejectionKind::Syntax
);
rejected!(
    unknown_unit,
    Property::Width,
    "12vw",
    RejectionKind::Syntax
);
rejected!(
    empty_length,
    Property::TextIndent,
    "",
    RejectionKind::Syntax
);
rejected!(
    word_that_is_not_a_keyword,
    Property::Width,
    "wide",
    RejectionKind::Domain
);

converts!(width_auto, Property::Width, "auto", "auto");
converts!(line_height_normal, Property::LineHeight, "normal", "normal");
converts!(border_width_thin, Property::BorderWidth, "thin", "thin");
converts!(border_left_width_thick, Property::BorderLeftWidth, "thick", "thick");
converts!(margin_auto, Property::MarginTop, "auto", "auto");

rejected!(
    length_keywords_are_case_sensitive,
    Property::Width,
    "Auto",
    RejectionKind::Domain
);
rejected!(
    keyword_from_another_property,
    Property::Width,
    "normal",
    RejectionKind::Domain
);
rejected!(
    padding_has_no_keywords,
    Property::PaddingLeft,
    "auto",
    RejectionKind::Domain
);

converts!(
    lenient_border_width_falls_back_to_medium,
    Property::BorderWidth,
    "-3pt",
    "medium",
    lenient()
);
converts!(
    lenient_border_side_width_falls_back_to_medium,
    Property::BorderTopWidth,
    "huge",
    "medium",
    lenient()
);
converts!(
    lenient_width_keeps_raw,
    Property::Width,
    "-11.1pt",
    "-11.1pt",
    lenient()
);
converts!(
    lenient_letter_spacing_keeps_raw_percent,
    Property::LetterSpacing,
    "11.1%",
    "11.1%",
    lenient()
);

#[test]
fn lenient_passthrough_is_raw_not_length() {
    let converter = Converter::new(&lenient());
    let value = converter.convert(Property::Width, "-11.1pt").unwrap();

    assert!(value.is_raw());
    assert_eq!(None, value.as_length());
}

#[test]
fn length_payload() {
    let converter = Converter::new(&Options::default());
    let length = converter
        .convert(Property::TextIndent, "-11.1pt")
        .unwrap()
        .as_length()
        .unwrap();

    assert_eq!(Unit::Pt, length.unit);
    assert_eq!(-11.1, length.number.0);
    assert_eq!(Some(-11.1), length.to_points());
}

#[test]
fn absolute_lengths_convert_to_points() {
    let converter = Converter::new(&Options::default());
    let points = |raw: &str| {
        converter
            .convert(Property::Width, raw)
            .and_then(|value| value.as_length())
            .and_then(|length| length.to_points())
    };

    assert_eq!(Some(72.0), points("1in"));
    assert_eq!(Some(12.0), points("1pc"));
    assert_eq!(Some(7.5), points("10px"));
    assert_eq!(Some(3.0), points("3"));
    assert_eq!(None, points("3em"));
    assert_eq!(None, points("50%"));
}

#[test]
fn canonical_lengths_are_idempotent() {
    let converter = Converter::new(&Options::default());

    for raw in ["+5pt", "11.10pt", ".5em", "0010px", "12PT", "-0pt", "50%", "auto"] {
        let once = converter.convert(Property::MarginRight, raw).unwrap();
        let twice = converter
            .convert(Property::MarginRight, once.as_str())
            .unwrap();
        assert_eq!(once, twice);
        assert_eq!(once.as_str(), twice.as_str());
    }
}

#[test]
fn overflowing_number_is_rejected() {
    let converter = Converter::new(&Options::default());
    let raw = format!("{}pt", "9".repeat(400));

    assert_eq!(
        RejectionKind::Syntax,
        converter.try_convert(Property::Width, &raw).unwrap_err().kind()
    );
}

#[test]
fn number_equality_is_fuzzy() {
    assert_eq!(Number(0.1 + 0.2), Number(0.3));
    assert_ne!(Number(0.1), Number(0.2));
}
