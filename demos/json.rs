use std::env;
use std::fs::File;
use std::io::{Seek, SeekFrom};
use tnlp::nlp::*;

fn main() {
    let settings = TutorialSettingsBuilder::default()
        .jacobian_structure(JacobianStructure::Sparse)
        .max_iter(100)
        .build()
        .unwrap();
    let problem = TutorialProblem::<f64>::with_default_data(8, settings).unwrap();

    // write the problem to a scratch file
    let filename = env::temp_dir().join("tnlp_tutorial.json");
    let mut file = File::create(&filename).unwrap();
    problem.write_to_file(&mut file).unwrap();

    // and read it back
    let mut file = File::open(&filename).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut problem2 = TutorialProblem::<f64>::read_from_file(&mut file).unwrap();
    problem2.print_configuration().unwrap();

    println!("constants = {:?}", problem2.constants());
}
