//! Configuration schema definitions

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::spec::{default_spec, is_default_name, CurveKind, WarpSpec};

/// A library of user-defined specs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarpConfig {
    /// Named specs, resolved before the built-in defaults
    #[serde(default)]
    pub specs: BTreeMap<String, SpecConfig>,
}

impl WarpConfig {
    /// Validate every spec in the library
    pub fn validate(&self) -> Result<()> {
        for (name, spec) in &self.specs {
            if is_default_name(name) {
                bail!("Spec '{}' shadows a built-in default", name);
            }
            spec.validate(name)?;
        }
        Ok(())
    }

    /// Resolve a name against the user specs, then the built-in defaults
    pub fn resolve(&self, name: &str) -> Result<WarpSpec> {
        if let Some(spec) = self.specs.get(name) {
            log::debug!("resolved '{}' from config", name);
            return spec.build();
        }
        Ok(default_spec(name)?)
    }

    /// User spec names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.specs.keys().map(String::as_str).collect()
    }
}

/// One user-defined spec
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecConfig {
    /// Value at control 0
    pub min: f64,

    /// Value at control 1
    pub max: f64,

    /// Curve name or raised-curve exponent (default: lin)
    #[serde(default)]
    pub curve: CurveConfig,

    /// Rounding step for mapped values (default: 0, continuous)
    #[serde(default)]
    pub step: f64,
}

impl SpecConfig {
    /// Check bounds, curve and step
    pub fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            bail!("Spec '{}' must have finite bounds", name);
        }
        if !(self.step >= 0.0) {
            bail!("Spec '{}' step must not be negative", name);
        }

        if self.min == self.max {
            bail!("Spec '{}' has an empty range", name);
        }

        match self.curve.kind()? {
            CurveKind::Exponential if !(self.min * self.max > 0.0) => bail!(
                "Spec '{}' uses an exponential curve, so min and max must be nonzero with the same sign",
                name
            ),
            CurveKind::DivMul if !((self.min - 1.0) * (self.max - 1.0) < 0.0) => bail!(
                "Spec '{}' uses a divmul curve, so 1 must lie strictly between min and max",
                name
            ),
            _ => {}
        }
        Ok(())
    }

    /// Build the spec
    pub fn build(&self) -> Result<WarpSpec> {
        let curve = self.curve.kind()?;
        Ok(WarpSpec::new(self.min, self.max, curve).with_step(self.step))
    }
}

/// Curve as written in YAML: a symbolic name or a bare exponent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurveConfig {
    Exponent(f64),
    Name(String),
}

impl CurveConfig {
    /// Parse into a curve kind
    pub fn kind(&self) -> Result<CurveKind> {
        let kind = match self {
            CurveConfig::Exponent(exponent) if !exponent.is_finite() => {
                bail!("Curve exponent must be finite, got {}", exponent)
            }
            CurveConfig::Exponent(exponent) => CurveKind::Raised {
                exponent: *exponent,
            },
            CurveConfig::Name(name) => name.parse()?,
        };
        Ok(kind)
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        CurveConfig::Name("lin".to_string())
    }
}

impl fmt::Display for CurveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveConfig::Exponent(exponent) => write!(f, "{}", exponent),
            CurveConfig::Name(name) => f.write_str(name),
        }
    }
}
