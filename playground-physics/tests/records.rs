// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Saved playground records

use playground_physics::{
    Body, BodyBuilder, BodyError, BodyRecord, ShapeKind, SimulationManager, Vector2, WorldConfig,
};

/// Two balls and a ground slab, as a saved playground would store them
const SAVED_PLAYGROUND: &str = r##"[
    {
        "name": "Ground",
        "playground": "64f0c0ffee",
        "mass": 100,
        "position": { "x": 0, "y": 0 },
        "shape": "rectangle",
        "width": 20,
        "height": 1,
        "color": "#444444",
        "isStatic": true
    },
    {
        "name": "Left ball",
        "playground": "64f0c0ffee",
        "position": { "x": 5, "y": 10 },
        "velocity": { "x": 3, "y": 0 },
        "radius": 0.75,
        "coefficientOfRestitution": 1
    },
    {
        "name": "Right ball",
        "playground": "64f0c0ffee",
        "position": { "x": 15, "y": 10 },
        "velocity": { "x": -3, "y": 0 },
        "radius": 0.75,
        "appliedForce": { "x": 0, "y": 0 }
    }
]"##;

#[test]
fn test_load_saved_playground() {
    let records: Vec<BodyRecord> = serde_json::from_str(SAVED_PLAYGROUND).unwrap();
    let bodies: Vec<Body> = records
        .iter()
        .map(Body::try_from)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(bodies.len(), 3);
    assert!(bodies[0].is_static());
    assert_eq!(bodies[0].mass(), 100.0);
    assert_eq!(bodies[1].radius(), Some(0.75));
    assert_eq!(bodies[1].mass(), 1.0);
    assert_eq!(bodies[2].velocity(), Vector2::new(-3.0, 0.0));

    let mut sim = SimulationManager::new(WorldConfig::default());
    let next = sim.step(&bodies, 1.0 / 60.0, Some(0.0));
    assert!((next[1].position().x() - 5.05).abs() < 1e-12);
}

#[test]
fn test_circle_round_trip() {
    let ball = BodyBuilder::circle(0.75)
        .position(Vector2::new(5.0, 10.0))
        .velocity(Vector2::new(3.0, 0.0))
        .mass(2.5)
        .build()
        .unwrap();

    let record = BodyRecord::from_body("ball", "p1", "#ff0000", &ball);
    let json = serde_json::to_string(&record).unwrap();
    let restored: BodyRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, record);
    assert_eq!(Body::try_from(&restored).unwrap(), ball);
}

#[test]
fn test_rectangle_round_trip() {
    let slab = BodyBuilder::rectangle(20.0, 1.0)
        .position(Vector2::zero())
        .mass(100.0)
        .static_body()
        .collidable(true)
        .build()
        .unwrap();

    let record = BodyRecord::from_body("ground", "p1", "#444444", &slab);
    assert_eq!(record.shape, ShapeKind::Rectangle);
    assert_eq!((record.width, record.height), (20.0, 1.0));
    // Unused geometry keeps the schema default
    assert_eq!(record.radius, 10.0);

    let json = serde_json::to_string(&record).unwrap();
    let restored: BodyRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(Body::try_from(&restored).unwrap(), slab);
}

#[test]
fn test_serialized_field_names() {
    let ball = BodyBuilder::circle(1.0)
        .position(Vector2::new(1.0, 2.0))
        .static_body()
        .build()
        .unwrap();
    let value = serde_json::to_value(BodyRecord::from_body("b", "p", "#fff", &ball)).unwrap();

    assert_eq!(value["isStatic"], serde_json::json!(true));
    assert_eq!(value["shape"], serde_json::json!("circle"));
    assert_eq!(value["position"], serde_json::json!({ "x": 1.0, "y": 2.0 }));
    assert!(value.get("points").is_none());
    assert!(value.get("is_static").is_none());
}

#[test]
fn test_missing_dimension_uses_schema_default() {
    let json = r#"{ "name": "box", "playground": "p", "position": { "x": 0, "y": 0 }, "shape": "rectangle" }"#;
    let record: BodyRecord = serde_json::from_str(json).unwrap();
    let body = Body::try_from(&record).unwrap();

    assert_eq!(body.size(), Some((20.0, 20.0)));
}

#[test]
fn test_invalid_mass_rejected() {
    let json = r#"{ "name": "ball", "playground": "p", "position": { "x": 0, "y": 0 }, "mass": 0 }"#;
    let record: BodyRecord = serde_json::from_str(json).unwrap();

    assert_eq!(Body::try_from(&record), Err(BodyError::InvalidMass { value: 0.0 }));
}

#[test]
fn test_missing_position_is_a_parse_error() {
    let json = r#"{ "name": "ball", "playground": "p" }"#;
    assert!(serde_json::from_str::<BodyRecord>(json).is_err());
}

#[test]
fn test_triangle_record() {
    let json = r#"{
        "name": "ramp",
        "playground": "p",
        "position": { "x": 4, "y": 2 },
        "shape": "triangle",
        "points": [ { "x": 0, "y": 0 }, { "x": 2, "y": 0 }, { "x": 0, "y": 1 } ],
        "rotation": 0.5
    }"#;
    let record: BodyRecord = serde_json::from_str(json).unwrap();
    let body = Body::try_from(&record).unwrap();

    assert_eq!(body.kind(), ShapeKind::Triangle);
    assert_eq!(body.rotation(), 0.5);
    assert_eq!(body.outline()[0], Vector2::new(4.0, 2.0));
}
