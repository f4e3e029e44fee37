use golden_borders::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_unit_names_round_trip() {
    for unit in Unit::ALL {
        assert_eq!(unit.name().parse::<Unit>().unwrap(), unit);
        assert_eq!(unit.to_string(), unit.name());
    }
    assert!("km".parse::<Unit>().is_err());
    assert!("MM".parse::<Unit>().is_err());
}

#[test]
fn test_unit_conversion() {
    assert_eq!(Unit::Mm.to_mm(12.0), 12.0);
    assert_eq!(Unit::Cm.to_mm(2.5), 25.0);
    assert_eq!(Unit::Dm.to_mm(1.0), 100.0);
    assert_eq!(Unit::M.to_mm(1.5), 1500.0);
    assert_eq!(Unit::In.to_mm(10.0), 254.0);
    assert_eq!(Unit::Ft.to_mm(1.0), 304.8);
    assert_eq!(Unit::In.from_mm(254.0), 10.0);
}

#[test]
fn test_parse_dim() {
    assert_close(parse_dim("25", Unit::Mm).unwrap(), 25.0);
    assert_close(parse_dim("2.5cm", Unit::Mm).unwrap(), 25.0);
    assert_close(parse_dim("10", Unit::In).unwrap(), 254.0);
    assert_close(parse_dim("1ft", Unit::Mm).unwrap(), 304.8);
    assert_close(parse_dim("-3mm", Unit::In).unwrap(), -3.0);
    assert_close(parse_dim(" 4 in ", Unit::Mm).unwrap(), 101.6);
}

#[test]
fn test_parse_dim_errors() {
    for input in ["", "abc", "10km", "in", "1.2.3", "5 x"] {
        match parse_dim(input, Unit::Mm) {
            Err(BorderError::Parse(msg)) => assert!(msg.contains("Can't parse dimension")),
            other => panic!("Expected Parse error for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_parse_dim_pair() {
    let size = parse_dim_pair("9x6in", Unit::Mm).unwrap();
    assert_close(size.width, 228.6);
    assert_close(size.height, 152.4);

    for input in ["300x200", "300X200", "300,200", "300:200", "300-200"] {
        let size = parse_dim_pair(input, Unit::Mm).unwrap();
        assert_eq!(size, RectSize::new(300.0, 200.0), "input {:?}", input);
    }

    let size = parse_dim_pair("30x20", Unit::Cm).unwrap();
    assert_eq!(size, RectSize::new(300.0, 200.0));
}

#[test]
fn test_parse_dim_pair_single_value() {
    assert_eq!(
        parse_dim_pair("3", Unit::Mm).unwrap(),
        RectSize::new(3.0, 3.0)
    );
    assert_eq!(
        parse_dim_pair("1cm", Unit::Mm).unwrap(),
        RectSize::new(10.0, 10.0)
    );
}

#[test]
fn test_parse_dim_pair_errors() {
    for input in ["", "9x", "x6", "9x6km", "9;6", "nine by six"] {
        match parse_dim_pair(input, Unit::Mm) {
            Err(BorderError::Parse(msg)) => assert!(msg.contains("dimension pair")),
            other => panic!("Expected Parse error for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_format_dim_metric() {
    assert_eq!(format_dim(24.305609916546317, Unit::Mm), "24.3 mm");
    assert_eq!(format_dim(25.0, Unit::Cm), "2.50 cm");
    assert_eq!(format_dim(123.4, Unit::Dm), "1.234 dm");
    assert_eq!(format_dim(1500.0, Unit::M), "1.5000 m");
}

#[test]
fn test_format_dim_inches() {
    assert_eq!(format_dim(228.6, Unit::In), "9.00\"");
    assert_eq!(format_dim(-50.8, Unit::In), "-2.00\"");
}

#[test]
fn test_format_dim_feet() {
    assert_eq!(format_dim(3.5 * 304.8, Unit::Ft), "3'6.00\"");
    assert_eq!(format_dim(3.0 * 304.8 + 4.5 * 25.4, Unit::Ft), "3'4.50\"");
    assert_eq!(format_dim(127.0, Unit::Ft), "5.00\"");
    assert_eq!(format_dim(-127.0, Unit::Ft), "-5.00\"");
}

#[test]
fn test_format_dim_pair() {
    assert_eq!(
        format_dim_pair(RectSize::new(228.6, 152.4), Unit::Mm),
        "228.6 mm x 152.4 mm"
    );
    assert_eq!(
        format_dim_pair(RectSize::new(228.6, 152.4), Unit::In),
        "9.00\" x 6.00\""
    );
}
