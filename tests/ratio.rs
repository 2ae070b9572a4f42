use anyhow::Result;
use prototypes::*;

#[test]
fn ratio_per_key_divides_by_summed_denominators() -> Result<()> {
    let students = from_vec(vec![("mod1", 18u32), ("mod2", 11)]);
    let staff = from_vec(vec![("mod1", 1u32), ("mod2", 1), ("mod1", 1)]);
    let ratios = students.ratio_per_key(&staff, &TransformConfig::default())?.collect_seq();
    assert_eq!(ratios, vec![("mod1", 9.0), ("mod2", 11.0)]);
    Ok(())
}

#[test]
fn ratio_by_count_uses_the_number_of_related_rows() -> Result<()> {
    let cohorts = from_vec(vec![(1u32, 20u32)]);
    let instructors = from_vec(vec![(1u32, "Travis"), (1, "Louisa"), (2, "Pam")]);
    let ratios = cohorts.ratio_by_count(&instructors, &TransformConfig::default())?;
    assert_eq!(ratios.collect_seq(), vec![(1, 10.0)]);
    Ok(())
}

#[test]
fn zero_denominator_errors_or_uses_the_sentinel() -> Result<()> {
    let cohorts = from_vec(vec![(1u32, 20u32)]);
    let nobody = from_vec(Vec::<(u32, &str)>::new());

    let err = cohorts
        .ratio_by_count(&nobody, &TransformConfig::default())
        .unwrap_err();
    assert_eq!(err, TransformError::DivisionByZero { key: "1".to_string() });

    let sentinel = TransformConfig::new().with_zero_divisor(ZeroDivisor::Sentinel { value: -1.0 });
    let ratios = cohorts.ratio_by_count(&nobody, &sentinel)?.collect_seq();
    assert_eq!(ratios, vec![(1, -1.0)]);
    Ok(())
}

#[test]
fn empty_numerators_give_an_empty_result() -> Result<()> {
    let none = from_vec(Vec::<(u32, u32)>::new());
    let staff = from_vec(vec![(1u32, 1u32)]);
    assert!(none.ratio_per_key(&staff, &TransformConfig::default())?.is_empty());
    Ok(())
}
