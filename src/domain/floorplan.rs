// Store floor plan: bounding box and zone polygons
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl BoundingBox {
    pub fn contains(&self, point: &Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// A named area of the store; may be drawn as several polygons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: i64,
    pub name: String,
    /// RGBA
    pub color: [u8; 4],
    pub coords: Vec<Vec<Point>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FloorPlan {
    pub bbox: BoundingBox,
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl FloorPlan {
    /// Points of any zone polygon lying outside the bounding box.
    pub fn stray_points(&self) -> Vec<(i64, Point)> {
        self.zones
            .iter()
            .flat_map(|z| z.coords.iter().flatten().map(move |p| (z.id, *p)))
            .filter(|(_, p)| !self.bbox.contains(p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stray_points() {
        let plan = FloorPlan {
            bbox: BoundingBox {
                min_x: 0,
                max_x: 10,
                min_y: -10,
                max_y: 0,
            },
            zones: vec![Zone {
                id: 1,
                name: "Pasta".to_string(),
                color: [255, 0, 255, 255],
                coords: vec![vec![Point { x: 1, y: -1 }, Point { x: 11, y: -1 }]],
            }],
        };

        assert_eq!(plan.stray_points(), vec![(1, Point { x: 11, y: -1 })]);
    }
}
