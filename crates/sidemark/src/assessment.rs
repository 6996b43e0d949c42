//! Damage-assessment input model and JSON parsing.
//!
//! The wire shape is `{ "sections_of_interest": [ {component,
//! percentage_damage, bbox}, ... ] }`, optionally nested under a
//! `car_side_damage_assessment` or `car_damage_assessment` wrapper key.
//! Individual records that do not match the schema are dropped at parse
//! time; a malformed record never fails the whole document.

use std::path::Path;

use crate::error::RenderError;

/// Axis-aligned bounding box `[x, y, w, h]` in base-image pixel coordinates.
///
/// Out-of-range boxes are not rejected here; drawing outside the buffer is
/// a no-op for those pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u32; 4]", into = "[u32; 4]")]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// A box with zero width or height cannot anchor a marker.
    pub fn is_degenerate(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

impl From<[u32; 4]> for BoundingBox {
    fn from(v: [u32; 4]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            w: v[2],
            h: v[3],
        }
    }
}

impl From<BoundingBox> for [u32; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x, b.y, b.w, b.h]
    }
}

/// One component's damage record.
///
/// `component` conventionally encodes laterality via the `_left_` /
/// `_right_` substrings; names with neither are side-neutral.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ComponentDamage {
    #[serde(default)]
    pub component: String,
    /// Advisory only; the filter keys off `percentage_damage`.
    #[serde(default)]
    pub is_damaged: bool,
    #[serde(default)]
    pub percentage_damage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

/// Ordered damage assessment for one vehicle.
///
/// Order matters for determinism: later markers composite on top of
/// earlier ones. `overall_damage_severity` is advisory and not consumed
/// by the rendering engine.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct DamageAssessment {
    pub sections_of_interest: Vec<ComponentDamage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_damage_severity: Option<String>,
}

#[derive(serde::Deserialize)]
struct AssessmentBody {
    #[serde(default)]
    sections_of_interest: Vec<serde_json::Value>,
    #[serde(default)]
    overall_damage_severity: Option<String>,
}

#[derive(serde::Deserialize)]
struct AssessmentDoc {
    #[serde(default)]
    car_side_damage_assessment: Option<AssessmentBody>,
    #[serde(default)]
    car_damage_assessment: Option<AssessmentBody>,
    #[serde(default)]
    sections_of_interest: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    overall_damage_severity: Option<String>,
}

impl DamageAssessment {
    /// Parse an assessment document, unwrapping the optional wrapper key.
    ///
    /// Records that fail per-record validation are dropped with a warning;
    /// only a malformed document as a whole is an error.
    pub fn from_json_str(data: &str) -> Result<Self, serde_json::Error> {
        let doc: AssessmentDoc = serde_json::from_str(data)?;
        let body = if let Some(b) = doc.car_side_damage_assessment {
            b
        } else if let Some(b) = doc.car_damage_assessment {
            b
        } else {
            AssessmentBody {
                sections_of_interest: doc.sections_of_interest.unwrap_or_default(),
                overall_damage_severity: doc.overall_damage_severity,
            }
        };

        let mut sections = Vec::with_capacity(body.sections_of_interest.len());
        for raw in body.sections_of_interest {
            let component = raw
                .get("component")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string();
            match serde_json::from_value::<ComponentDamage>(raw) {
                Ok(record) => sections.push(record),
                Err(e) => {
                    let err = RenderError::InvalidComponentRecord {
                        component,
                        reason: e.to_string(),
                    };
                    tracing::warn!(%err, "dropping malformed component record");
                }
            }
        }

        Ok(Self {
            sections_of_interest: sections,
            overall_damage_severity: body.overall_damage_severity,
        })
    }

    /// Load an assessment from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data).map_err(Into::into)
    }

    /// Built-in sample assessment matching the reference `side.json` shape.
    pub fn sample() -> Self {
        Self::from_json_str(SAMPLE_ASSESSMENT_JSON).expect("embedded sample assessment is valid")
    }
}

/// Embedded sample document, used by the CLI and as a parsing fixture.
pub(crate) const SAMPLE_ASSESSMENT_JSON: &str = r#"{
  "car_side_damage_assessment": {
    "sections_of_interest": [
      {
        "component": "front_left_door",
        "is_damaged": true,
        "percentage_damage": 12.5,
        "bbox": [200, 250, 150, 100]
      },
      {
        "component": "front_right_door",
        "is_damaged": true,
        "percentage_damage": 5.0,
        "bbox": [200, 240, 150, 100]
      },
      {
        "component": "front_wheel",
        "is_damaged": true,
        "percentage_damage": 20.0,
        "bbox": [150, 320, 80, 80]
      },
      {
        "component": "rear_wheel",
        "is_damaged": true,
        "percentage_damage": 10.0,
        "bbox": [450, 320, 80, 80]
      }
    ],
    "overall_damage_severity": "MEDIUM"
  }
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_sections() {
        let raw = r#"{
            "sections_of_interest": [
                {"component": "front_wheel", "percentage_damage": 20.0, "bbox": [150, 320, 80, 80]}
            ]
        }"#;
        let a = DamageAssessment::from_json_str(raw).expect("valid json");
        assert_eq!(a.sections_of_interest.len(), 1);
        assert_eq!(a.sections_of_interest[0].component, "front_wheel");
        assert_eq!(
            a.sections_of_interest[0].bbox,
            Some(BoundingBox::new(150, 320, 80, 80))
        );
        assert_eq!(a.overall_damage_severity, None);
    }

    #[test]
    fn parses_side_wrapper_with_severity() {
        let a = DamageAssessment::from_json_str(SAMPLE_ASSESSMENT_JSON).expect("valid json");
        assert_eq!(a.sections_of_interest.len(), 4);
        assert_eq!(a.overall_damage_severity.as_deref(), Some("MEDIUM"));
        assert!(a.sections_of_interest[0].is_damaged);
    }

    #[test]
    fn parses_car_wrapper() {
        let raw = r#"{
            "car_damage_assessment": {
                "sections_of_interest": [
                    {"component": "rear_bumper", "percentage_damage": 40.0, "bbox": [500, 200, 90, 60]}
                ],
                "overall_damage_severity": "HIGH"
            }
        }"#;
        let a = DamageAssessment::from_json_str(raw).expect("valid json");
        assert_eq!(a.sections_of_interest.len(), 1);
        assert_eq!(a.overall_damage_severity.as_deref(), Some("HIGH"));
    }

    #[test]
    fn malformed_records_are_dropped_not_fatal() {
        let raw = r#"{
            "sections_of_interest": [
                {"component": "front_wheel", "percentage_damage": 20.0, "bbox": [150, 320, 80, 80]},
                {"component": "bad_bbox", "percentage_damage": 10.0, "bbox": [1, 2, 3]},
                {"component": "bad_pct", "percentage_damage": "lots", "bbox": [1, 2, 3, 4]}
            ]
        }"#;
        let a = DamageAssessment::from_json_str(raw).expect("valid json");
        assert_eq!(a.sections_of_interest.len(), 1);
        assert_eq!(a.sections_of_interest[0].component, "front_wheel");
    }

    #[test]
    fn missing_bbox_parses_as_none() {
        let raw = r#"{
            "sections_of_interest": [
                {"component": "front_left_door", "percentage_damage": 12.5}
            ]
        }"#;
        let a = DamageAssessment::from_json_str(raw).expect("valid json");
        assert_eq!(a.sections_of_interest[0].bbox, None);
    }

    #[test]
    fn bbox_serializes_as_four_element_array() {
        let b = BoundingBox::new(150, 320, 80, 80);
        let json = serde_json::to_string(&b).expect("serialize");
        assert_eq!(json, "[150,320,80,80]");
    }

    #[test]
    fn sample_is_well_formed() {
        let a = DamageAssessment::sample();
        assert_eq!(a.sections_of_interest.len(), 4);
        assert!(a
            .sections_of_interest
            .iter()
            .all(|c| c.bbox.is_some() && c.percentage_damage > 0.0));
    }
}
