//! # Parameter Files
//!
//! JSON description of a shell mesh:
//!
//! ```json
//! { "Center": [0, 0, 0], "Radius": [1, 2], "SliceSplits": 8, "StackSplits": 6 }
//! ```

use crate::shells::ShellParams;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Shell mesh parameters as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SphereMeshParameters {
    /// Common centre
    pub center: DVec3,
    /// Sphere radii, strictly increasing
    pub radius: Vec<f64>,
    /// Longitudinal divisions
    pub slice_splits: u32,
    /// Latitudinal divisions
    pub stack_splits: u32,
}

impl From<SphereMeshParameters> for ShellParams {
    fn from(p: SphereMeshParameters) -> Self {
        ShellParams::new(p.slice_splits, p.stack_splits, p.radius).with_center(p.center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_parameter_file() {
        let json = r#"{
            "Center": [1.0, 2.0, 3.0],
            "Radius": [1, 2, 4],
            "SliceSplits": 8,
            "StackSplits": 6
        }"#;
        let params: SphereMeshParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.center, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(params.radius, vec![1.0, 2.0, 4.0]);

        let shell: ShellParams = params.into();
        assert_eq!(shell.slices, 8);
        assert_eq!(shell.stacks, 6);
        assert_eq!(shell.center, DVec3::new(1.0, 2.0, 3.0));
        assert!(shell.validate().is_ok());
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let json = r#"{ "Center": [0, 0, 0], "Radius": [1, 2], "SliceSplits": 8 }"#;
        let err = serde_json::from_str::<SphereMeshParameters>(json).unwrap_err();
        assert!(err.to_string().contains("StackSplits"));
    }
}
