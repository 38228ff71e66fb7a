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
//! Default playground: two balls rolling toward each other above a ground slab
//!
//! Prints one line per simulated tenth of a second. Usage:
//!
//! ```bash
//! cargo run --example two_balls -- --seconds 5 --gravity 9.8
//! ```

use playground_physics::integration::total_kinetic_energy;
use playground_physics::{Body, BodyBuilder, BodyError, SimulationManager, Vector2, WorldConfig};

/// Frame time of the host render loop
const DT: f64 = 1.0 / 60.0;

/// Demo configuration
struct DemoConfig {
    seconds: f64,
    gravity: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            seconds: 3.0,
            gravity: 9.8,
        }
    }
}

fn parse_args() -> DemoConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = DemoConfig::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1).and_then(|v| v.parse::<f64>().ok());
        match (args[i].as_str(), value) {
            ("--seconds", Some(v)) => config.seconds = v,
            ("--gravity", Some(v)) => config.gravity = v,
            (flag, _) => {
                eprintln!("Ignoring argument '{}'", flag);
                i += 1;
                continue;
            }
        }
        i += 2;
    }

    config
}

fn default_playground() -> Result<Vec<Body>, BodyError> {
    Ok(vec![
        BodyBuilder::rectangle(20.0, 1.0)
            .position(Vector2::new(0.0, 0.0))
            .mass(100.0)
            .static_body()
            .build()?,
        BodyBuilder::circle(0.75)
            .position(Vector2::new(5.0, 10.0))
            .velocity(Vector2::new(3.0, 0.0))
            .build()?,
        BodyBuilder::circle(0.75)
            .position(Vector2::new(15.0, 10.0))
            .velocity(Vector2::new(-3.0, 0.0))
            .build()?,
    ])
}

fn main() -> Result<(), BodyError> {
    let config = parse_args();
    let mut sim = SimulationManager::new(WorldConfig::default());
    let mut bodies = default_playground()?;

    println!("time    left(x, y)        right(x, y)       KE");
    let frames = (config.seconds / DT).round() as usize;
    for frame in 0..frames {
        bodies = sim.step(&bodies, DT, Some(config.gravity));

        if frame % 6 == 5 {
            let (l, r) = (bodies[1].position(), bodies[2].position());
            println!(
                "{:5.2}s  ({:6.3}, {:6.3})  ({:6.3}, {:6.3})  {:.3}",
                (frame + 1) as f64 * DT,
                l.x(),
                l.y(),
                r.x(),
                r.y(),
                total_kinetic_energy(&bodies)
            );
        }
    }

    Ok(())
}
