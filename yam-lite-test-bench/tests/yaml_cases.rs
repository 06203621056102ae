extern crate libtest_mimic;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use libtest_mimic::{Arguments, Failed, Trial};
use yam_lite::{decode_str, emit};
use yam_lite_test_bench::write_str_from_value;

#[derive(Default)]
struct TestData {
    desc: String,
    input_yaml: PathBuf,
    is_error: bool,
    tree_event: Option<PathBuf>,
    output_yaml: Option<PathBuf>,
}

fn perform_test(data: TestData) -> Result<(), Failed> {
    let input_yaml = fs::read_to_string(&data.input_yaml)?;
    let loaded = decode_str(&input_yaml);

    let value = match (loaded, data.is_error) {
        (Err(_), true) => return Ok(()),
        (Ok(value), true) => return Err(format!("expected an error, loaded {value:?}").into()),
        (Err(err), false) => return Err(format!("unexpected error: {err}").into()),
        (Ok(value), false) => value,
    };

    if let Some(path) = data.tree_event {
        let mut actual = String::new();
        write_str_from_value(&mut actual, &value);
        let expected = fs::read_to_string(path)?;
        assert_eq!(actual.trim(), expected.trim());
    }

    if let Some(path) = data.output_yaml {
        let emitted = emit(&value)?;
        let expected = fs::read_to_string(path)?;
        assert_eq!(emitted, expected);
        assert_eq!(decode_str(&emitted)?, value, "emitted text loads back");
    }

    Ok(())
}

fn collect_test(
    dir_name: String,
    test_dir_path: &Path,
    tests: &mut Vec<Trial>,
) -> Result<(), Box<dyn Error>> {
    let mut test_data = TestData::default();
    for entry in fs::read_dir(test_dir_path)? {
        let entry = entry?;
        let filename = entry
            .file_name()
            .into_string()
            .expect("non-UTF8 string in path");
        match &*filename {
            "===" => {
                if let Ok(desc) = fs::read_to_string(entry.path()) {
                    test_data.desc = String::from(desc.trim());
                }
            }
            "in.yaml" => test_data.input_yaml = entry.path(),
            "error" => test_data.is_error = true,
            "tree.event" => test_data.tree_event = Some(entry.path()),
            "out.yaml" => test_data.output_yaml = Some(entry.path()),
            _ => {}
        };
    }
    let test = Trial::test(format!("{} ({})", dir_name, &test_data.desc), move || {
        perform_test(test_data)
    });
    tests.push(test);
    Ok(())
}

fn collect_tests(path: &Path) -> Result<Vec<Trial>, Box<dyn Error>> {
    let mut tests = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            let dir_name = entry
                .file_name()
                .into_string()
                .expect("non-UTF8 string in path");
            collect_test(dir_name, &entry.path(), &mut tests)?;
        }
    }
    Ok(tests)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Arguments::from_args();

    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("cases");

    let tests = collect_tests(&path)?;

    libtest_mimic::run(&args, tests).exit();
}
