use cssattr::{AttributeSet, Converter, Options, Property};


fn converter() -> Converter<'static> {
    Converter::new(&Options::default())
}

#[test]
fn starts_empty() {
    let attributes = AttributeSet::new();

    assert!(attributes.is_empty());
    assert_eq!(0, attributes.len());
    assert!(attributes.get(Property::Width).is_none());
    assert_eq!("", attributes.to_string());
}

#[test]
fn add_css_attribute_stores_converted_value() {
    let mut attributes = AttributeSet::new();

    assert!(attributes.add_css_attribute(&converter(), Property::BackgroundAttachment, "fixed"));
    assert_eq!(1, attributes.len());
    assert!(attributes.contains(Property::BackgroundAttachment));
    assert_eq!(
        "fixed",
        attributes
            .get(Property::BackgroundAttachment)
            .unwrap()
            .to_string()
    );
}

#[test]
fn rejected_value_leaves_existing_attribute() {
    let converter = converter();
    let mut attributes = AttributeSet::new();

    assert!(attributes.add_css_attribute(&converter, Property::Width, "10pt"));
    assert!(!attributes.add_css_attribute(&converter, Property::Width, "-10pt"));

    assert_eq!(1, attributes.len());
    assert_eq!("10pt", attributes.get(Property::Width).unwrap().as_str());
}

#[test]
fn add_replaces_only_the_same_key() {
    let converter = converter();
    let mut attributes = AttributeSet::new();

    let first = converter.convert(Property::Clear, "left").unwrap();
    let second = converter.convert(Property::Clear, "right").unwrap();
    let other = converter.convert(Property::Float, "left").unwrap();

    assert_eq!(None, attributes.add(Property::Clear, first.clone()));
    assert_eq!(None, attributes.add(Property::Float, other));
    assert_eq!(Some(first), attributes.add(Property::Clear, second));

    assert_eq!(2, attributes.len());
    assert_eq!("clear: right; float: left;", attributes.to_string());
}

#[test]
fn remove_keeps_order() {
    let converter = converter();
    let mut attributes = AttributeSet::new();

    for (property, raw) in [
        (Property::Width, "1pt"),
        (Property::Height, "2pt"),
        (Property::Color, "red"),
    ] {
        assert!(attributes.add_css_attribute(&converter, property, raw));
    }

    assert_eq!("2pt", attributes.remove(Property::Height).unwrap().as_str());
    assert_eq!(None, attributes.remove(Property::Height));
    assert_eq!("width: 1pt; color: red;", attributes.to_string());

    let order: Vec<Property> = attributes.iter().map(|(property, _)| *property).collect();
    assert_eq!(vec![Property::Width, Property::Color], order);
}

#[test]
fn clear_removes_everything() {
    let mut attributes = AttributeSet::new();
    attributes.add_css_attribute(&converter(), Property::Width, "1pt");
    attributes.clear();

    assert!(attributes.is_empty());
}

#[test]
fn equality_ignores_order() {
    let converter = converter();
    let width = converter.convert(Property::Width, "1pt").unwrap();
    let color = converter.convert(Property::Color, "red").unwrap();

    let forward: AttributeSet = [(Property::Width, width.clone()), (Property::Color, color.clone())]
        .into_iter()
        .collect();
    let backward: AttributeSet = [(Property::Color, color), (Property::Width, width)]
        .into_iter()
        .collect();

    assert_eq!(forward, backward);
    assert_ne!(forward.to_string(), backward.to_string());
}
