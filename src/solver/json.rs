#![allow(non_snake_case)]

use super::{IterativeSettings, IterativeSolver};
use crate::algebra::*;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

// The problem data as provided by the user.  Solver state and
// diagnostics are not saved.

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
struct JsonProblemData<T: FloatT> {
    pub A: Matrix<T>,
    pub b: Vec<T>,
    pub settings: IterativeSettings<T>,
}

impl<T> IterativeSolver<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    /// Write the problem data and settings to a JSON file
    pub fn save_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let mut json_data = JsonProblemData {
            A: self.A.clone(),
            b: self.b.clone(),
            settings: self.settings.clone(),
        };

        // sanitize settings to remove values that
        // can't be serialized, i.e. infs
        sanitize_settings(&mut json_data.settings);

        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    /// Create a solver from a JSON file written by
    /// [`save_to_file`](Self::save_to_file).  Any `settings`
    /// provided replace those stored in the file.
    pub fn load_from_file(
        file: &mut File,
        settings: Option<IterativeSettings<T>>,
    ) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let mut json_data: JsonProblemData<T> = serde_json::from_str(&buffer)?;

        // restore sanitized settings to their (likely) original values
        desanitize_settings(&mut json_data.settings);

        let settings = settings.unwrap_or(json_data.settings);
        Self::new(&json_data.A, &json_data.b, settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    }
}

fn sanitize_settings<T: FloatT>(settings: &mut IterativeSettings<T>) {
    if settings.time_limit == f64::INFINITY {
        settings.time_limit = f64::MAX;
    }
}

fn desanitize_settings<T: FloatT>(settings: &mut IterativeSettings<T>) {
    if settings.time_limit == f64::MAX {
        settings.time_limit = f64::INFINITY;
    }
}

#[test]
fn test_json_io() {
    use super::IterativeMethod;
    use std::io::{Seek, SeekFrom};

    let A = Matrix::<f64>::circulant_decay(7, 0.5).unwrap();
    let b = vec![1., 0., -1., 2., 0., 1., 3.];
    let settings = IterativeSettings::default();

    let mut solver = IterativeSolver::new(&A, &b, settings).unwrap();
    solver
        .solve(IterativeMethod::ConjugateGradient, &[0.; 7])
        .unwrap();

    let mut file = tempfile::tempfile().unwrap();
    solver.save_to_file(&mut file).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let mut solver2 = IterativeSolver::<f64>::load_from_file(&mut file, None).unwrap();
    assert_eq!(solver2.A, solver.A);
    assert_eq!(solver2.settings.time_limit, f64::INFINITY);

    solver2
        .solve(IterativeMethod::ConjugateGradient, &[0.; 7])
        .unwrap();
    assert_eq!(solver.solution.x, solver2.solution.x);

    // settings can be overridden on load
    file.seek(SeekFrom::Start(0)).unwrap();
    let settings = crate::solver::IterativeSettingsBuilder::default()
        .max_iter(5)
        .build()
        .unwrap();
    let solver3 = IterativeSolver::<f64>::load_from_file(&mut file, Some(settings)).unwrap();
    assert_eq!(solver3.settings.max_iter, 5);
}
