#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom, Write};
    use tnlp::nlp::*;

    let settings = TutorialSettingsBuilder::default()
        .verbose(false)
        .tol(1e-6)
        .build()
        .unwrap();
    let problem = TutorialProblem::<f64>::with_default_data(6, settings).unwrap();

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    problem.write_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let problem2 = TutorialProblem::<f64>::read_from_file(&mut file).unwrap();
    assert_eq!(problem2.n(), 6);
    assert_eq!(problem2.constants(), problem.constants());
    assert_eq!(problem2.settings, problem.settings);

    // data failing validation is refused on load
    let mut bad = tempfile::tempfile().unwrap();
    let json = r#"{"n":5,"a":[0.1,0.2],"settings":{}}"#;
    bad.write_all(json.as_bytes()).unwrap();
    bad.seek(SeekFrom::Start(0)).unwrap();
    let err = TutorialProblem::<f64>::read_from_file(&mut bad).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);

    // missing settings fields take their defaults
    let mut partial = tempfile::tempfile().unwrap();
    let json = r#"{"n":3,"a":[0.25],"settings":{"max_iter":10}}"#;
    partial.write_all(json.as_bytes()).unwrap();
    partial.seek(SeekFrom::Start(0)).unwrap();
    let problem3 = TutorialProblem::<f64>::read_from_file(&mut partial).unwrap();
    assert_eq!(problem3.settings.max_iter, 10);
    assert_eq!(problem3.settings.jacobian_structure, JacobianStructure::Dense);
}
