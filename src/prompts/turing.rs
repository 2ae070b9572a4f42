//! Turing: instructors, cohorts, and who teaches what.
//!
//! Instructors and cohorts meet on their `module` number. Curriculum topics meet an
//! instructor's `teaches` list by exact name.

use crate::datasets::{Cohort, Instructor};
use crate::error::TransformResult;
use crate::{PCollection, TransformConfig, from_slice};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorStudents {
    pub name: String,
    pub student_count: u32,
}

/// Each instructor with the student count of the cohort in their module.
///
/// When several cohorts share a module the first one listed is used. Instructors whose
/// module has no cohort are handled by `config.missing_match`.
///
/// # Errors
/// [`TransformError::NoMatch`](crate::TransformError::NoMatch) for an instructor without a
/// cohort under [`MissingMatch::Fail`](crate::MissingMatch::Fail).
pub fn students_for_each_instructor(
    instructors: &[Instructor],
    cohorts: &[Cohort],
    config: &TransformConfig,
) -> TransformResult<Vec<InstructorStudents>> {
    let cohort_by_module = from_slice(cohorts)
        .map(|c| (c.module, c.student_count))
        .distinct_by(|(module, _)| *module);
    let joined = from_slice(instructors)
        .map(|i| (i.module, i.name.clone()))
        .join_with(&cohort_by_module, "cohort", config)?;
    Ok(joined
        .map(|(_, (name, student_count))| InstructorStudents {
            name: name.clone(),
            student_count: *student_count,
        })
        .collect_seq())
}

/// Students per instructor for every cohort, keyed `cohort{N}` in cohort order.
///
/// ```
/// use prototypes::datasets::{Cohort, Instructor};
/// use prototypes::prompts::turing::students_per_instructor;
/// use prototypes::TransformConfig;
///
/// let cohorts = vec![Cohort { cohort: 1806, module: 1, student_count: 20, curriculum: vec![] }];
/// let instructors = vec![
///     Instructor { name: "Travis".into(), module: 1, teaches: vec![] },
///     Instructor { name: "Louisa".into(), module: 1, teaches: vec![] },
/// ];
/// let ratios = students_per_instructor(&cohorts, &instructors, &TransformConfig::default())?;
/// assert_eq!(ratios["cohort1806"], 10.0);
/// # anyhow::Result::<()>::Ok(())
/// ```
///
/// # Errors
/// [`TransformError::DivisionByZero`](crate::TransformError::DivisionByZero) for a cohort
/// whose module has no instructors, unless `config` supplies a sentinel.
pub fn students_per_instructor(
    cohorts: &[Cohort],
    instructors: &[Instructor],
    config: &TransformConfig,
) -> TransformResult<IndexMap<String, f64>> {
    let staff = from_slice(instructors).key_by(|i| i.module);
    let ratios = from_slice(cohorts)
        .map(|c| (c.module, (format!("cohort{}", c.cohort), c.student_count)))
        .labelled_ratio_by_count(&staff, config)?;
    Ok(ratios.into_index_map())
}

/// For each instructor, the modules whose curriculum covers something they teach.
///
/// Modules are listed once each, ascending.
pub fn modules_per_teacher(
    instructors: &[Instructor],
    cohorts: &[Cohort],
) -> IndexMap<String, Vec<u32>> {
    from_slice(instructors)
        .map(|i| (i.name.clone(), modules_covering(&i.teaches, cohorts)))
        .into_index_map()
}

fn modules_covering(subjects: &[String], cohorts: &[Cohort]) -> Vec<u32> {
    from_slice(subjects)
        .flat_map(|subject| {
            cohorts
                .iter()
                .filter(|c| c.curriculum.contains(subject))
                .map(|c| c.module)
                .collect::<Vec<_>>()
        })
        .distinct()
        .sort_by_key(|module| *module)
        .collect_seq()
}

/// For each curriculum topic, the instructors who teach it.
///
/// Topics appear in first-seen order across the cohorts. A topic nobody teaches maps to an
/// empty list.
pub fn curriculum_per_teacher(
    instructors: &[Instructor],
    cohorts: &[Cohort],
) -> IndexMap<String, Vec<String>> {
    topics(cohorts)
        .map(|topic| (topic.clone(), teachers_of(topic, instructors)))
        .into_index_map()
}

fn topics(cohorts: &[Cohort]) -> PCollection<String> {
    from_slice(cohorts)
        .flat_map(|c| c.curriculum.clone())
        .distinct()
}

fn teachers_of(topic: &str, instructors: &[Instructor]) -> Vec<String> {
    from_slice(instructors)
        .filter(|i| i.teaches.iter().any(|t| t == topic))
        .map(|i| i.name.clone())
        .distinct()
        .collect_seq()
}
