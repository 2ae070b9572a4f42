use anyhow::Result;
use prototypes::prompts::turing::*;
use prototypes::testing::*;
use prototypes::*;

#[test]
fn students_for_each_instructor_joins_on_module() -> Result<()> {
    let data = Datasets::load()?;
    let rows = students_for_each_instructor(&data.instructors, &data.cohorts, &TransformConfig::default())?;
    let flat: Vec<(&str, u32)> = rows.iter().map(|r| (r.name.as_str(), r.student_count)).collect();
    assert_eq!(
        flat,
        vec![
            ("Pam", 21),
            ("Brittany", 21),
            ("Nathaniel", 21),
            ("Robbie", 18),
            ("Leta", 18),
            ("Travis", 27),
            ("Louisa", 27),
            ("Christie", 27),
            ("Will", 21),
        ]
    );
    Ok(())
}

#[test]
fn instructor_without_a_cohort_follows_the_missing_match_policy() -> Result<()> {
    let instructors = instructors_in_module(3, 1);
    let cohorts = vec![cohort_of_twenty()];

    let skipped = students_for_each_instructor(&instructors, &cohorts, &TransformConfig::default())?;
    assert!(skipped.is_empty());

    let strict = TransformConfig::new().with_missing_match(MissingMatch::Fail);
    let err = students_for_each_instructor(&instructors, &cohorts, &strict).unwrap_err();
    assert_eq!(
        err,
        TransformError::NoMatch {
            relation: "cohort",
            key: "3".to_string()
        }
    );
    Ok(())
}

#[test]
fn ratio_of_twenty_students_to_two_instructors() -> Result<()> {
    let ratios = students_per_instructor(
        &[cohort_of_twenty()],
        &instructors_in_module(1, 2),
        &TransformConfig::default(),
    )?;
    assert_approx_eq!(ratios["cohort1806"], 10.0);
    Ok(())
}

#[test]
fn ratio_with_no_instructors_is_a_division_by_zero() -> Result<()> {
    let cohorts = [cohort_of_twenty()];
    let err = students_per_instructor(&cohorts, &[], &TransformConfig::default()).unwrap_err();
    assert_eq!(
        err,
        TransformError::DivisionByZero {
            key: "cohort1806".to_string()
        }
    );

    let sentinel = TransformConfig::new().with_zero_divisor(ZeroDivisor::Sentinel { value: 0.0 });
    let ratios = students_per_instructor(&cohorts, &[], &sentinel)?;
    assert_approx_eq!(ratios["cohort1806"], 0.0);
    Ok(())
}

#[test]
fn bundled_students_per_instructor() -> Result<()> {
    let data = Datasets::load()?;
    let ratios = students_per_instructor(&data.cohorts, &data.instructors, &TransformConfig::default())?;
    assert_index_map_eq(
        &ratios,
        &[
            ("cohort1806", 9.0),
            ("cohort1804", 10.5),
            ("cohort1803", 10.5),
            ("cohort1801", 9.0),
        ],
    );
    Ok(())
}

#[test]
fn modules_per_teacher_are_unique_and_ascending() -> Result<()> {
    let data = Datasets::load()?;
    let modules = modules_per_teacher(&data.instructors, &data.cohorts);
    assert_index_map_eq(
        &modules,
        &[
            ("Pam", vec![2, 4]),
            ("Brittany", vec![2, 4]),
            ("Nathaniel", vec![2, 4]),
            ("Robbie", vec![4]),
            ("Leta", vec![2, 4]),
            ("Travis", vec![1, 2, 3, 4]),
            ("Louisa", vec![1, 2, 3, 4]),
            ("Christie", vec![1, 2, 3, 4]),
            ("Will", vec![1, 2, 3, 4]),
        ],
    );
    Ok(())
}

#[test]
fn curriculum_per_teacher_lists_every_topic() -> Result<()> {
    let data = Datasets::load()?;
    let curriculum = curriculum_per_teacher(&data.instructors, &data.cohorts);
    let expected: [(&str, &[&str]); 11] = [
        ("html", &["Travis", "Louisa"]),
        ("css", &["Travis", "Louisa"]),
        ("javascript", &["Travis", "Louisa", "Christie", "Will"]),
        ("recursion", &["Pam", "Leta"]),
        ("scope", &["Pam", "Nathaniel"]),
        ("oop", &["Brittany", "Will"]),
        ("react", &["Louisa", "Christie"]),
        ("redux", &["Christie"]),
        ("node", &["Brittany", "Robbie", "Will"]),
        ("pwas", &["Nathaniel"]),
        ("mobile", &["Robbie"]),
    ];
    assert_eq!(curriculum.len(), expected.len());
    for ((topic, teachers), (want_topic, want_teachers)) in curriculum.iter().zip(expected) {
        assert_eq!(topic, want_topic);
        assert_eq!(teachers, want_teachers);
    }
    Ok(())
}

#[test]
fn topic_nobody_teaches_maps_to_no_one() {
    let mut cohort = cohort_of_twenty();
    cohort.curriculum = vec!["javascript".to_string(), "dom".to_string()];
    let curriculum = curriculum_per_teacher(&instructors_in_module(1, 2), &[cohort]);
    assert_eq!(curriculum["javascript"], vec!["Instructor 1", "Instructor 2"]);
    assert!(curriculum["dom"].is_empty());
}

#[test]
fn several_cohorts_in_one_module_share_its_instructors() -> Result<()> {
    let mut second = cohort_of_twenty();
    second.cohort = 1807;
    second.student_count = 30;
    let ratios = students_per_instructor(
        &[cohort_of_twenty(), second],
        &instructors_in_module(1, 3),
        &TransformConfig::default(),
    )?;
    assert_index_map_eq(&ratios, &[("cohort1806", 20.0 / 3.0), ("cohort1807", 10.0)]);
    Ok(())
}
