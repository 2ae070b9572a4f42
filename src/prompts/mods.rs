//! Mods: students per instructor in each module.

use crate::datasets::Mod;
use crate::error::TransformResult;
use crate::{TransformConfig, from_slice};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModRatio {
    #[serde(rename = "mod")]
    pub module: u32,
    pub students_per_instructor: f64,
}

/// Students per instructor for every mod, in input order.
///
/// # Errors
/// [`TransformError::DivisionByZero`](crate::TransformError::DivisionByZero) for a mod with
/// no instructors, unless `config` supplies a sentinel.
pub fn students_per_mod(mods: &[Mod], config: &TransformConfig) -> TransformResult<Vec<ModRatio>> {
    let ratios = from_slice(mods).try_map(|m| -> TransformResult<ModRatio> {
        let key = format!("mod{}", m.module);
        Ok(ModRatio {
            module: m.module,
            students_per_instructor: config.divide(
                &key,
                m.students.into(),
                m.instructors.into(),
            )?,
        })
    })?;
    Ok(ratios.collect_seq())
}
