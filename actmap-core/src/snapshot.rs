//! Activation snapshot: per-neuron scalars for one point in time, shaped
//! like the topology (outer index = layer, inner index = neuron id).
//!
//! Snapshots are transient. Each poll replaces the previous one wholesale;
//! no history is retained.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivationSnapshot(#[serde(deserialize_with = "lenient_layers")] Vec<Vec<f64>>);

/// A non-numeric entry (`null`, string, bool) is a per-neuron problem, not a
/// document problem: it comes through as NaN so the validity policy can zero
/// that one neuron while the rest of the snapshot applies normally.
fn lenient_layers<'de, D>(deserializer: D) -> Result<Vec<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Vec<serde_json::Value>> = Vec::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|layer| {
            layer
                .into_iter()
                .map(|v| v.as_f64().unwrap_or(f64::NAN))
                .collect()
        })
        .collect())
}

impl ActivationSnapshot {
    pub fn new(values: Vec<Vec<f64>>) -> Self {
        Self(values)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Raw lookup by neuron identity. Absent when the snapshot is shorter
    /// than the topology (missing layer or missing index).
    pub fn get(&self, layer: usize, id: usize) -> Option<f64> {
        self.0.get(layer).and_then(|l| l.get(id)).copied()
    }
}

/// Validity policy for one activation value: an absent lookup, a non-numeric
/// entry (carried as NaN), or a negative number all count as "inactive" and
/// substitute 0. The surviving
/// value then clamps into [0,1]; anything above 1 renders as fully hot.
/// One bad entry must never abort a recolor pass.
pub fn effective_intensity(value: Option<f64>) -> f64 {
    let v = match value {
        // NaN fails the comparison and falls through to 0.
        Some(v) if v >= 0.0 => v,
        _ => 0.0,
    };
    v.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_layer_and_id() {
        let snap = ActivationSnapshot::new(vec![vec![0.1, 0.2], vec![0.9]]);
        assert_eq!(snap.get(0, 1), Some(0.2));
        assert_eq!(snap.get(1, 0), Some(0.9));
    }

    #[test]
    fn absent_lookups_are_none() {
        let snap = ActivationSnapshot::new(vec![vec![0.1]]);
        assert_eq!(snap.get(0, 1), None); // missing neuron index
        assert_eq!(snap.get(3, 0), None); // missing layer
    }

    #[test]
    fn invalid_values_substitute_zero() {
        assert_eq!(effective_intensity(None), 0.0);
        assert_eq!(effective_intensity(Some(f64::NAN)), 0.0);
        assert_eq!(effective_intensity(Some(-0.4)), 0.0);
    }

    #[test]
    fn clamps_after_substitution() {
        assert_eq!(effective_intensity(Some(3.7)), 1.0);
        assert_eq!(effective_intensity(Some(f64::INFINITY)), 1.0);
        assert_eq!(effective_intensity(Some(0.25)), 0.25);
    }

    #[test]
    fn non_numeric_entries_degrade_per_neuron() {
        let snap =
            ActivationSnapshot::from_json(r#"[[0.5, null], [1.0, "hot", true]]"#).unwrap();
        // valid neighbors still apply
        assert_eq!(snap.get(0, 0), Some(0.5));
        assert_eq!(snap.get(1, 0), Some(1.0));
        // bad entries zero out individually
        assert!(snap.get(0, 1).unwrap().is_nan());
        assert_eq!(effective_intensity(snap.get(0, 1)), 0.0);
        assert_eq!(effective_intensity(snap.get(1, 1)), 0.0);
        assert_eq!(effective_intensity(snap.get(1, 2)), 0.0);
    }

    #[test]
    fn parses_activation_document() {
        let snap = ActivationSnapshot::from_json("[[0.5, 1.0], [0.0]]").unwrap();
        assert_eq!(snap.get(0, 0), Some(0.5));
        assert!(ActivationSnapshot::from_json(r#"{"not": "an array"}"#).is_err());
    }
}
