use cssattr::{Converter, Fallback, Mode, Options, Property, RejectionKind, Rule};
use macros::TestLogger;


#[test]
fn default_mode_is_strict() {
    assert_eq!(Mode::Strict, Converter::new(&Options::default()).mode());
    assert_eq!(
        Mode::Lenient,
        Converter::new(&Options::default().mode(Mode::Lenient)).mode()
    );
}

#[test]
fn every_property_has_a_descriptor() {
    let converter = Converter::new(&Options::default());
    let described: Vec<Property> = converter
        .descriptors()
        .map(|descriptor| descriptor.property)
        .collect();

    assert_eq!(Property::ALL.to_vec(), described);
}

#[test]
fn strict_never_falls_back() {
    let converter = Converter::new(&Options::default());

    assert!(converter
        .descriptors()
        .all(|descriptor| descriptor.fallback == Fallback::Reject));
}

#[test]
fn lenient_fallbacks() {
    let converter = Converter::new(&Options::default().mode(Mode::Lenient));

    assert_eq!(
        Fallback::Default("disc"),
        converter.descriptor(Property::ListStyleType).fallback
    );
    assert_eq!(
        Fallback::Default("medium"),
        converter.descriptor(Property::BorderRightWidth).fallback
    );
    assert_eq!(Fallback::Raw, converter.descriptor(Property::Width).fallback);
    assert_eq!(Fallback::Raw, converter.descriptor(Property::Clear).fallback);
}

#[test]
fn both_modes_share_rules() {
    let strict = Converter::new(&Options::default());
    let lenient = Converter::new(&Options::default().mode(Mode::Lenient));

    for (a, b) in strict.descriptors().zip(lenient.descriptors()) {
        assert_eq!(a.property, b.property);
        assert_eq!(a.rule, b.rule);
    }
}

#[test]
fn rule_kinds() {
    let converter = Converter::new(&Options::default());

    assert_eq!(Rule::Colors, converter.descriptor(Property::BorderColor).rule);
    assert_eq!(
        Rule::UrlOrNone,
        converter.descriptor(Property::BackgroundImage).rule
    );
    assert!(matches!(
        converter.descriptor(Property::TextIndent).rule,
        Rule::Length(policy) if policy.negative && policy.percent
    ));
    assert!(matches!(
        converter.descriptor(Property::BorderWidth).rule,
        Rule::Length(policy) if !policy.negative && !policy.percent
    ));
}

#[test]
fn convert_by_name() {
    let converter = Converter::new(&Options::default());

    assert_eq!(
        "repeat-y",
        converter
            .convert_named("background-repeat", "repeat-y")
            .unwrap()
            .as_str()
    );
    assert_eq!(
        "10pt",
        converter.convert_named("WIDTH", "10pt").unwrap().as_str()
    );
}

#[test]
fn unknown_property_name() {
    for mode in [Mode::Strict, Mode::Lenient] {
        let converter = Converter::new(&Options::default().mode(mode).quiet(true));
        let rejection = converter
            .try_convert_named("font-family", "serif")
            .unwrap_err();

        assert_eq!(RejectionKind::UnknownProperty, rejection.kind());
        assert_eq!("Unknown property \"font-family\".", rejection.message());
        assert!(converter.convert_named("", "serif").is_none());
    }
}

#[test]
fn input_is_trimmed() {
    let converter = Converter::new(&Options::default());

    assert_eq!(
        "scroll",
        converter
            .convert(Property::BackgroundAttachment, "  scroll\t\n")
            .unwrap()
            .as_str()
    );
    assert_eq!(
        "-11.1pt",
        converter
            .convert(Property::TextIndent, " -11.1pt ")
            .unwrap()
            .as_str()
    );
}

#[test]
fn rejection_message() {
    let converter = Converter::new(&Options::default());
    let rejection = converter
        .try_convert(Property::Width, "-11.1pt")
        .unwrap_err();

    assert_eq!(RejectionKind::Domain, rejection.kind());
    assert_eq!(
        "Expected non-negative length, was \"-11.1pt\".",
        rejection.to_string()
    );
}

#[test]
fn lenient_fallback_is_logged() {
    let logger = TestLogger::default();
    let converter = Converter::new(&Options::default().mode(Mode::Lenient).logger(&logger));

    assert_eq!(
        "disc",
        converter
            .convert(Property::ListStyleType, "star")
            .unwrap()
            .as_str()
    );
    assert_eq!(
        "bogus",
        converter.convert(Property::Clear, "bogus").unwrap().as_str()
    );
    assert_eq!(
        "left",
        converter.convert(Property::Clear, "left").unwrap().as_str()
    );

    assert_eq!(
        vec![
            "list-style-type: Expected one of disc, circle, square, decimal, lower-roman, upper-roman, lower-alpha, upper-alpha, none, was \"star\". Using \"disc\".".to_owned(),
            "clear: Expected one of none, left, right, both, was \"bogus\". Using \"bogus\".".to_owned(),
        ],
        logger.debug_messages()
    );
}

#[test]
fn strict_rejection_is_not_logged() {
    let logger = TestLogger::default();
    let converter = Converter::new(&Options::default().logger(&logger));

    assert!(converter.convert(Property::Clear, "bogus").is_none());
    assert!(logger.debug_messages().is_empty());
}

#[test]
fn quiet_silences_fallback_log() {
    let logger = TestLogger::default();
    let converter = Converter::new(
        &Options::default()
            .mode(Mode::Lenient)
            .logger(&logger)
            .quiet(true),
    );

    assert!(converter.convert(Property::ListStyleType, "star").is_some());
    assert!(logger.debug_messages().is_empty());
}

#[test]
fn property_names_round_trip() {
    for property in Property::ALL {
        assert_eq!(Some(property), Property::from_name(property.name()));
        assert_eq!(
            Some(property),
            Property::from_name(&property.name().to_ascii_uppercase())
        );
        assert_eq!(property.name(), property.to_string());
    }

    assert_eq!(None, Property::from_name("font-family"));
    assert_eq!(None, Property::from_name(" width"));
}

#[test]
fn convert_free_function() {
    let options = Options::default();

    assert_eq!(
        "-11.1pt",
        cssattr::convert("text-indent", "-11.1pt", &options)
            .unwrap()
            .as_str()
    );
    assert!(cssattr::convert("width", "-11.1pt", &options).is_none());
    assert!(cssattr::convert("no-such-property", "1pt", &options).is_none());
}

#[test]
fn empty_value_is_never_stored() {
    let logger = TestLogger::default();
    let converter = Converter::new(&Options::default().mode(Mode::Lenient).logger(&logger));

    for property in [Property::Clear, Property::Width, Property::ListStyleType, Property::BorderWidth] {
        assert!(converter.convert(property, "").is_none());
        assert!(converter.convert(property, " \t\n").is_none());
    }

    let mut attributes = cssattr::AttributeSet::new();
    assert!(!attributes.add_css_attribute(&converter, Property::Color, "  "));
    assert!(attributes.is_empty());
    assert!(logger.debug_messages().is_empty());
}
