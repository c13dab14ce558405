use serde::{Deserialize, Serialize};

use super::builtin::BUILTIN_MATERIALS;
use super::materials::{DriftClass, MaterialId, MaterialProperties, PhaseTarget, Rgb};

/// Immutable material table, one entry per `MaterialId` except `Clean`.
///
/// Built once before a simulation starts; there is no way to mutate a live
/// registry. Lookups are total: ids without an entry get NONE's properties.
#[derive(Clone, Debug)]
pub struct MaterialRegistry {
    materials: Vec<MaterialProperties>,
}

impl MaterialRegistry {
    pub fn from_builtin() -> Self {
        let registry = Self {
            materials: BUILTIN_MATERIALS.to_vec(),
        };
        debug_assert!(
            registry.validate().is_ok(),
            "builtin material table is inconsistent: {:?}",
            registry.validate()
        );
        registry
    }

    /// Raw table without validation, for exercising rejection paths.
    #[cfg(test)]
    pub(crate) fn from_materials_unchecked(materials: Vec<MaterialProperties>) -> Self {
        Self { materials }
    }

    /// Builtin table with selected materials' physics replaced from JSON.
    pub fn from_overrides_json(json: &str) -> Result<Self, String> {
        let bundle: OverrideBundle = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_overrides(bundle)
    }

    #[inline]
    pub fn lookup(&self, id: MaterialId) -> &MaterialProperties {
        self.materials
            .get(id as usize)
            .unwrap_or(&self.materials[MaterialId::None as usize])
    }

    #[inline]
    pub fn density(&self, id: MaterialId) -> f32 {
        self.lookup(id).density
    }

    #[inline]
    pub fn conductivity(&self, id: MaterialId) -> f32 {
        self.lookup(id).conductivity
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn manifest_json(&self) -> String {
        let materials: Vec<ManifestMaterial> = MaterialId::ALL
            .iter()
            .map(|&id| {
                let props = self.lookup(id);
                ManifestMaterial {
                    id: id.as_u8(),
                    key: id.key(),
                    name: props.name,
                    color: props.color.to_abgr(),
                    placeable: id.is_placeable(),
                }
            })
            .collect();
        let out = Manifest {
            format_version: 1,
            materials,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    /// Checks the table-wide invariants: NONE weightless and static, EDGE
    /// denser than everything, phase targets naming real materials,
    /// parameters in range.
    pub fn validate(&self) -> Result<(), String> {
        let edge_density = self.density(MaterialId::Edge);
        let empty = self.lookup(MaterialId::None);
        if empty.density != 0.0 || empty.gravity {
            return Err("none must stay weightless empty space (density 0, no gravity)".to_string());
        }
        for id in MaterialId::ALL {
            let props = self.lookup(id);
            if id != MaterialId::Edge && props.density >= edge_density {
                return Err(format!("{} is at least as dense as edge", id.key()));
            }
            if !(0.0..=1.0).contains(&props.friction) {
                return Err(format!("{} friction out of range: {}", id.key(), props.friction));
            }
            if props.conductivity < 0.0 {
                return Err(format!("{} has negative conductivity", id.key()));
            }
            for target in [props.melting, props.freezing].into_iter().flatten() {
                if !target.becomes.is_placeable() {
                    return Err(format!(
                        "{} transitions into reserved material {}",
                        id.key(),
                        target.becomes.key()
                    ));
                }
            }
        }
        Ok(())
    }

    fn from_overrides(bundle: OverrideBundle) -> Result<Self, String> {
        let mut materials = BUILTIN_MATERIALS.to_vec();

        for entry in bundle.materials.into_iter() {
            let id = MaterialId::from_key(&entry.key)
                .ok_or_else(|| format!("unknown material key: {}", entry.key))?;
            if !id.is_placeable() {
                return Err(format!("material {} cannot be overridden", entry.key));
            }

            let props = &mut materials[id as usize];
            if let Some(v) = entry.density {
                props.density = v;
            }
            if let Some(v) = entry.drift {
                props.drift = v;
            }
            if let Some(v) = entry.friction {
                props.friction = v;
            }
            if let Some(v) = entry.gravity {
                props.gravity = v;
            }
            if let Some(v) = entry.conductivity {
                props.conductivity = v;
            }
            if let Some(v) = entry.starting_temperature {
                props.starting_temperature = v;
            }
            if let Some(c) = entry.color {
                props.color = c;
            }
            if let Some(m) = entry.melting {
                props.melting = resolve_phase(m)?;
            }
            if let Some(f) = entry.freezing {
                props.freezing = resolve_phase(f)?;
            }
        }

        let registry = Self { materials };
        registry.validate()?;
        Ok(registry)
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::from_builtin()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    format_version: u32,
    materials: Vec<ManifestMaterial>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestMaterial {
    id: u8,
    key: &'static str,
    name: &'static str,
    color: u32,
    placeable: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverrideBundle {
    materials: Vec<OverrideMaterial>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverrideMaterial {
    key: String,
    #[serde(default)]
    density: Option<f32>,
    #[serde(default)]
    drift: Option<DriftClass>,
    #[serde(default)]
    friction: Option<f32>,
    #[serde(default)]
    gravity: Option<bool>,
    #[serde(default)]
    conductivity: Option<f32>,
    #[serde(default)]
    starting_temperature: Option<f32>,
    #[serde(default)]
    color: Option<Rgb>,
    /// `null` clears the transition, an object replaces it.
    #[serde(default, deserialize_with = "explicit_null")]
    melting: Option<Option<OverridePhase>>,
    #[serde(default, deserialize_with = "explicit_null")]
    freezing: Option<Option<OverridePhase>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverridePhase {
    threshold: f32,
    becomes: String,
}

fn resolve_phase(phase: Option<OverridePhase>) -> Result<Option<PhaseTarget>, String> {
    let Some(phase) = phase else {
        return Ok(None);
    };
    let becomes = MaterialId::from_key(&phase.becomes)
        .ok_or_else(|| format!("unknown phase target: {}", phase.becomes))?;
    Ok(Some(PhaseTarget {
        threshold: phase.threshold,
        becomes,
    }))
}

/// Distinguishes a missing field (`None`) from an explicit `null`
/// (`Some(None)`).
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid_and_complete() {
        let registry = MaterialRegistry::from_builtin();
        assert!(registry.validate().is_ok());
        assert_eq!(registry.material_count(), MaterialId::ALL.len());
    }

    #[test]
    fn clean_falls_back_to_none() {
        let registry = MaterialRegistry::from_builtin();
        assert_eq!(registry.lookup(MaterialId::Clean), registry.lookup(MaterialId::None));
    }

    #[test]
    fn edge_is_densest_and_inert() {
        let registry = MaterialRegistry::from_builtin();
        let edge = registry.lookup(MaterialId::Edge);
        assert_eq!(edge.density, 1000.0);
        assert!(!edge.gravity);
        assert!(edge.is_insulator());
        assert_eq!(edge.drift, DriftClass::None);
    }

    #[test]
    fn required_material_kinds_exist() {
        let registry = MaterialRegistry::from_builtin();
        let sand = registry.lookup(MaterialId::Sand);
        assert!(sand.gravity && sand.drift == DriftClass::Diagonal);
        let water = registry.lookup(MaterialId::Water);
        assert!(water.gravity && water.drift == DriftClass::Sideways);
        assert!(registry.density(MaterialId::Helium) <= 0.0);
        assert!(!registry.lookup(MaterialId::Stone).gravity);
        assert!(!registry.lookup(MaterialId::Wall).gravity);
    }

    #[test]
    fn overrides_replace_only_listed_fields() {
        let json = r#"{"materials":[{"key":"sand","friction":0.9,"melting":{"threshold":1700,"becomes":"stone"}}]}"#;
        let registry = MaterialRegistry::from_overrides_json(json).unwrap();
        let sand = registry.lookup(MaterialId::Sand);
        assert_eq!(sand.friction, 0.9);
        assert_eq!(sand.density, 5.0);
        assert_eq!(
            sand.melting,
            Some(PhaseTarget {
                threshold: 1700.0,
                becomes: MaterialId::Stone
            })
        );
    }

    #[test]
    fn explicit_null_clears_a_transition() {
        let json = r#"{"materials":[{"key":"water","freezing":null}]}"#;
        let registry = MaterialRegistry::from_overrides_json(json).unwrap();
        assert!(registry.lookup(MaterialId::Water).freezing.is_none());
        assert!(registry.lookup(MaterialId::Water).melting.is_some());
    }

    #[test]
    fn overrides_reject_bad_input() {
        let cases = [
            r#"{"materials":[{"key":"lava"}]}"#,
            r#"{"materials":[{"key":"edge","density":1}]}"#,
            r#"{"materials":[{"key":"sand","friction":1.5}]}"#,
            r#"{"materials":[{"key":"sand","conductivity":-1}]}"#,
            r#"{"materials":[{"key":"sand","density":5000}]}"#,
            r#"{"materials":[{"key":"none","density":50,"gravity":true}]}"#,
            r#"{"materials":[{"key":"none","density":-1}]}"#,
            r#"{"materials":[{"key":"none","gravity":true}]}"#,
            r#"{"materials":[{"key":"ice","melting":{"threshold":0,"becomes":"edge"}}]}"#,
            r#"{"materials":[{"key":"ice","melting":{"threshold":0,"becomes":"clean"}}]}"#,
            "not json",
        ];
        for json in cases {
            assert!(MaterialRegistry::from_overrides_json(json).is_err(), "{json}");
        }
    }

    #[test]
    fn empty_space_keeps_non_physical_overrides() {
        let json = r#"{"materials":[{"key":"none","conductivity":0.2,"color":{"r":0,"g":0,"b":0}}]}"#;
        let registry = MaterialRegistry::from_overrides_json(json).unwrap();
        let none = registry.lookup(MaterialId::None);
        assert_eq!(none.conductivity, 0.2);
        assert_eq!(none.density, 0.0);
        assert!(!none.gravity);
    }

    #[test]
    fn manifest_lists_every_material() {
        let registry = MaterialRegistry::from_builtin();
        let manifest: serde_json::Value = serde_json::from_str(&registry.manifest_json()).unwrap();
        assert_eq!(manifest["formatVersion"], 1);
        let materials = manifest["materials"].as_array().unwrap();
        assert_eq!(materials.len(), MaterialId::ALL.len());
        assert_eq!(materials[3]["key"], "sand");
        assert_eq!(materials[0]["placeable"], false);
    }
}
