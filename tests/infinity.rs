// kept in its own test binary, since the threshold is process global

use tnlp::nlp::*;

#[test]
fn test_infinity_threshold() {
    let problem = TutorialProblem::<f64>::with_default_data(5, TutorialSettings::default()).unwrap();
    let bounds = problem.bounds(5, 3).unwrap();

    assert_eq!(get_infinity(), 1e19);
    let counts = bounds.variable_counts();
    assert_eq!(counts.lower_and_upper, 5);
    assert_eq!(bounds.constraint_counts().fixed, 3);

    // lower bounds of -1.5 now count as absent
    set_infinity(1.5);
    assert_eq!(get_infinity(), 1.5);
    let counts = bounds.variable_counts();
    assert_eq!(counts.only_upper, 5);
    assert_eq!(counts.lower_and_upper, 0);

    default_infinity();
    assert_eq!(get_infinity(), 1e19);
    assert_eq!(bounds.variable_counts().lower_and_upper, 5);
}
