use core_engine::{BaselineReading, FixedBaselines, PollutionEngine};
use feed_schema::{parse_feature_set, RawRegionRecord};

pub const SAMPLE_FEED: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {
                "Ward_Name": "Rohini",
                "baseline": { "air": 120, "water": 40, "soil": 200 }
            },
            "geometry": null
        },
        {
            "type": "Feature",
            "properties": {
                "Ward_Name": "Okhla",
                "baseline": { "air": 150, "water": 70, "soil": 90 }
            },
            "geometry": null
        },
        {
            "type": "Feature",
            "properties": {
                "name": "Yamuna",
                "isRiver": true,
                "baseline": { "air": 0, "water": 95, "soil": 0 }
            },
            "geometry": null
        },
        {
            "type": "Feature",
            "properties": {
                "shape_area": 1.25,
                "baseline": { "air": 420, "water": 25, "soil": 310 }
            },
            "geometry": null
        }
    ]
}"#;

pub fn sample_records() -> Vec<RawRegionRecord> {
    parse_feature_set(SAMPLE_FEED)
        .expect("sample feed should parse")
        .features
        .into_iter()
        .map(|feature| feature.properties)
        .collect()
}

/// Engine with the builtin catalog and the sample feed loaded.
pub fn loaded_engine() -> PollutionEngine {
    let mut engine = PollutionEngine::with_builtin_catalog();
    let mut baselines = FixedBaselines::new(BaselineReading {
        air: 100,
        water: 20,
        soil: 80,
    });
    engine
        .load_regions(&sample_records(), &mut baselines)
        .expect("sample feed should load");
    engine
}
