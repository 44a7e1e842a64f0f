#![no_main]

use libfuzzer_sys::fuzz_target;

use brainsnake::{compile, execute, settings::Settings, Error, Target};
use brainsnake_fuzz::FuzzInputSrc;

fuzz_target!(|data: FuzzInputSrc| {
    let settings = Settings::default().with_step_limit(500);
    let run = execute(&data.code, &data.input, &settings);
    for target in [Target::Python, Target::C] {
        let code = compile(&data.code, &settings.with_target(target));
        match (&run, code) {
            (Err(Error::Syntax(e1)), Err(Error::Syntax(e2))) => assert_eq!(*e1, e2),
            (Err(Error::Syntax(_)), Ok(_)) | (Ok(_) | Err(Error::Runtime(_)), Err(_)) => {
                panic!("execute and compile disagree on validity")
            }
            _ => (),
        }
    }
});
