//! Loads square grid maps and scenarios in the
//! [Moving AI](https://movingai.com/benchmarks/formats.html) `.map` / `.map.scen` formats.
//!
//! Maps live under `maps/<set>/<name>.map` and their scenarios under
//! `scenarios/<set>/<name>.map.scen` inside this crate. Benchmarks are addressed by
//! `<set>/<name>`, for example `demo/maze21`.
use csv::ReaderBuilder;
use grid_util::point::Point;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse scenario record: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed map {name}: {reason}")]
    Map { name: String, reason: String },
    #[error("unknown benchmark {0}")]
    Unknown(String),
}

#[allow(unused)]
#[derive(Debug, Deserialize)]
struct Record {
    bucket: u32,
    file_name: String,
    w: u32,
    h: u32,
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
    distance: f64,
}

/// A start/goal pair with its known optimal 4-directional distance. Points use `x = row` and
/// `y = col`.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub start: Point,
    pub goal: Point,
    pub distance: f64,
}

/// A square map in row-major order together with its scenarios.
#[derive(Clone, Debug)]
pub struct Benchmark {
    pub name: String,
    pub size: usize,
    pub blocked: Vec<bool>,
    pub scenarios: Vec<Scenario>,
}

impl Benchmark {
    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        self.blocked[row * self.size + col]
    }
}

fn data_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf()
}

fn read(path: PathBuf) -> Result<String, ScenarioError> {
    fs::read_to_string(&path).map_err(|source| ScenarioError::Io { path, source })
}

fn malformed(name: &str, reason: impl Into<String>) -> ScenarioError {
    ScenarioError::Map {
        name: name.to_owned(),
        reason: reason.into(),
    }
}

fn parse_map(name: &str, map_str: &str) -> Result<(usize, Vec<bool>), ScenarioError> {
    let lines: Vec<&str> = map_str.lines().collect();
    let parse_line = |ix: usize, key: &str| -> Result<usize, ScenarioError> {
        lines
            .get(ix)
            .and_then(|line| line.split_once(' '))
            .filter(|(k, _)| *k == key)
            .and_then(|(_, v)| v.trim().parse::<usize>().ok())
            .ok_or_else(|| malformed(name, format!("missing {key} header")))
    };
    let h = parse_line(1, "height")?;
    let w = parse_line(2, "width")?;
    if w != h {
        return Err(malformed(name, format!("map is {w}x{h}, expected a square")));
    }
    let offset = 4;
    let rows = lines.get(offset..offset + h).ok_or_else(|| malformed(name, "too few rows"))?;
    let mut blocked = Vec::with_capacity(w * h);
    for (row, line) in rows.iter().enumerate() {
        if line.len() != w {
            return Err(malformed(name, format!("row {row} has {} tiles", line.len())));
        }
        blocked.extend(line.bytes().map(|tile| ![b'.', b'G', b'S'].contains(&tile)));
    }
    Ok((w, blocked))
}

fn parse_scenarios(scen_str: &str) -> Result<Vec<Scenario>, ScenarioError> {
    // The first line holds the format version
    let remaining_data = scen_str.lines().skip(1).collect::<Vec<_>>().join("\n");
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(remaining_data.as_bytes());
    let mut scenarios = Vec::new();
    for result in csv_reader.deserialize() {
        let record: Record = result?;
        scenarios.push(Scenario {
            start: Point::new(record.y1 as i32, record.x1 as i32),
            goal: Point::new(record.y2 as i32, record.x2 as i32),
            distance: record.distance,
        });
    }
    Ok(scenarios)
}

fn load_benchmark(name: &str) -> Result<Benchmark, ScenarioError> {
    let root = data_root();
    let map_str = read(root.join(format!("maps/{name}.map")))?;
    let scen_str = read(root.join(format!("scenarios/{name}.map.scen")))?;
    let (size, blocked) = parse_map(name, &map_str)?;
    let scenarios = parse_scenarios(&scen_str)?;
    Ok(Benchmark {
        name: name.to_owned(),
        size,
        blocked,
        scenarios,
    })
}

/// Names of all bundled maps, sorted.
pub fn get_benchmark_names() -> Vec<String> {
    let root = data_root().join("maps");
    let mut names = Vec::new();
    for entry in WalkDir::new(&root).into_iter().filter_map(Result::ok) {
        let Ok(rel_path) = entry.path().strip_prefix(&root) else {
            continue;
        };
        if rel_path.components().count() >= 2 {
            if let Some((name, _)) = rel_path.to_str().and_then(|p| p.split_once('.')) {
                names.push(name.replace('\\', "/"));
            }
        }
    }
    names.sort();
    names
}

pub fn get_benchmark(name: &str) -> Result<Benchmark, ScenarioError> {
    if get_benchmark_names().iter().any(|n| n == name) {
        load_benchmark(name)
    } else {
        Err(ScenarioError::Unknown(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_maps_are_listed() {
        let names = get_benchmark_names();
        for expected in ["demo/maze21", "demo/open16", "demo/rooms24", "demo/scatter20"] {
            assert!(names.iter().any(|n| n == expected), "{expected} missing");
        }
    }

    #[test]
    fn open_map_loads() {
        let bench = get_benchmark("demo/open16").unwrap();
        assert_eq!(bench.size, 16);
        assert!(bench.blocked.iter().all(|b| !b));
        assert!(!bench.scenarios.is_empty());
        for s in &bench.scenarios {
            assert_eq!(s.distance, s.start.manhattan_distance(&s.goal) as f64);
        }
    }

    #[test]
    fn unknown_benchmark() {
        assert!(matches!(
            get_benchmark("demo/missing"),
            Err(ScenarioError::Unknown(_))
        ));
    }

    #[test]
    fn rectangular_map_is_rejected() {
        let map = "type octile\nheight 2\nwidth 3\nmap\n...\n...\n";
        assert!(matches!(
            parse_map("rect", map),
            Err(ScenarioError::Map { .. })
        ));
    }

    #[test]
    fn blocked_tiles() {
        let map = "type octile\nheight 2\nwidth 2\nmap\n.@\nT.\n";
        let (size, blocked) = parse_map("tiny", map).unwrap();
        assert_eq!(size, 2);
        assert_eq!(blocked, vec![false, true, true, false]);
    }
}
