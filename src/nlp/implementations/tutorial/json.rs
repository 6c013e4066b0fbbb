use super::*;
use crate::algebra::*;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

// The data required to reconstruct a problem.  Internal
// state (print targets, reported solutions) is not stored.

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
struct JsonProblemData<T: FloatT> {
    pub n: usize,
    pub a: Vec<T>,
    pub settings: TutorialSettings<T>,
}

impl<T> TutorialProblem<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    /// Write the problem size, constants and settings to a JSON file
    pub fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json_data = JsonProblemData {
            n: self.n(),
            a: self.constants().to_vec(),
            settings: self.settings.clone(),
        };

        // write to file
        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    /// Read a problem previously written with [`write_to_file`](Self::write_to_file)
    pub fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        // read file
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let json_data: JsonProblemData<T> = serde_json::from_str(&buffer)?;

        // re-validates the data and settings
        Self::new(json_data.n, &json_data.a, json_data.settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[test]
fn test_json_io() {
    use crate::io::ConfigurablePrintTarget;
    use crate::nlp::traits::NlpProblem;
    use std::io::{Seek, SeekFrom};

    let settings = TutorialSettingsBuilder::default()
        .jacobian_structure(JacobianStructure::Sparse)
        .max_iter(25)
        .build()
        .unwrap();
    let mut problem = TutorialProblem::<f64>::new(5, &[0.1, -0.2, 0.3], settings).unwrap();
    problem.print_to_sink();

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    problem.write_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let problem2 = TutorialProblem::<f64>::read_from_file(&mut file).unwrap();

    assert_eq!(problem2.constants(), problem.constants());
    assert_eq!(problem2.settings, problem.settings);
    assert_eq!(problem2.shape(), problem.shape());

    let x = [-0.3, -0.7, -1.1, -0.2, -0.9];
    assert_eq!(problem.eval_g(&x).unwrap(), problem2.eval_g(&x).unwrap());
}
