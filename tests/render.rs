use quakemap::config_params::{Config, MapExtent};
use quakemap::record::parse_records;
use quakemap::render::Converter;
use quakemap::Panel;

const CONFIG: &str = r#"
    [map]
    width = 400
    height = 400
    output = "quakes.svg"
    background = "white"

    [panel]
    map_style = "mapbox://styles/mapbox/dark-v9"
"#;

const QUAKES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature",
         "geometry": {"type": "Point", "coordinates": [-121.0, 37.0]},
         "properties": {"timestamp": 0, "depth": 0.0, "magnitude": 2.0}},
        {"type": "Feature",
         "geometry": {"type": "Point", "coordinates": [-120.0, 36.0]},
         "properties": {"timestamp": 2678400000, "depth": 100.0, "magnitude": 3.0}},
        {"type": "Feature",
         "geometry": {"type": "Point", "coordinates": [-119.0, 35.0]},
         "properties": {"timestamp": 5356800000, "depth": 25.0, "magnitude": 1.0}}
    ]
}"#;

fn extent() -> MapExtent {
    MapExtent {
        left: -122.0,
        right: -118.0,
        bottom: 34.0,
        top: 38.0,
    }
}

fn panel(data: Option<&str>) -> Panel {
    let config = Config::from_toml(CONFIG).unwrap();
    let records = data.map(|raw| parse_records(raw).unwrap());
    Panel::new(config.panel, config.view, config.layer, records)
}

#[test]
fn range_ends_fade_out_of_the_initial_filter() {
    let extent = extent();
    let converter = Converter::new(400, 400, &extent).unwrap();
    let svg = converter.render(&panel(Some(QUAKES)), Some("white")).unwrap().to_string();
    // The first and last events sit on the hard bounds, where the soft band reaches zero.
    assert_eq!(svg.matches("<circle").count(), 1);
    assert!(svg.contains("rgb(105,50,100)"));
    assert!(svg.contains("data-map-style=\"mapbox://styles/mapbox/dark-v9\""));
    assert!(svg.contains("id=\"earthquakes\""));
    assert!(svg.contains("1970/1"));
    assert!(svg.contains("1970/3"));
    assert!(!svg.contains("No data"));
}

#[test]
fn draws_one_circle_per_visible_record() {
    let extent = extent();
    let converter = Converter::new(400, 400, &extent).unwrap();
    let panel = panel(Some(QUAKES)).with_filter(-10.0, 100.0).unwrap();
    let svg = converter.render(&panel, None).unwrap().to_string();
    assert_eq!(svg.matches("<circle").count(), 3);
    assert!(svg.contains("rgb(255,0,0)"));
    assert!(svg.contains("rgb(105,50,100)"));
    assert!(svg.contains("1969/12"));
    assert!(svg.contains("1970/4"));
}

#[test]
fn filter_hides_records() {
    let extent = extent();
    let converter = Converter::new(400, 400, &extent).unwrap();
    let panel = panel(Some(QUAKES)).with_filter(20.0, 40.0).unwrap();
    let svg = converter.render(&panel, None).unwrap().to_string();
    assert_eq!(svg.matches("<circle").count(), 1);
    assert!(svg.contains("rgb(105,50,100)"));
}

#[test]
fn absent_and_empty_show_no_data() {
    let extent = extent();
    let converter = Converter::new(400, 400, &extent).unwrap();
    let absent = converter.render(&panel(None), None).unwrap().to_string();
    assert!(absent.contains("No data"));
    assert_eq!(absent.matches("<circle").count(), 0);

    let empty = panel(Some(r#"{"type": "FeatureCollection", "features": []}"#));
    let svg = converter.render(&empty, None).unwrap().to_string();
    assert!(svg.contains("No data"));
}

#[test]
fn malformed_dataset_renders_the_error() {
    let extent = extent();
    let converter = Converter::new(400, 400, &extent).unwrap();
    let raw = r#"[{"timestamp": 0, "longitude": 1.0, "latitude": 2.0, "magnitude": 3.0}]"#;
    let err = parse_records(raw).unwrap_err();
    let svg = converter
        .render_error("mapbox://styles/mapbox/light-v9", None, &err)
        .to_string();
    assert!(svg.contains("Error: Record 0"));
    assert!(svg.contains("depth"));
    assert_eq!(svg.matches("<circle").count(), 0);
}

#[test]
fn flat_extent_cannot_be_drawn() {
    let flat = MapExtent {
        left: -120.0,
        right: -120.0,
        bottom: 36.0,
        top: 36.0,
    };
    assert!(Converter::new(400, 400, &flat).is_err());
}
