mod util;

mod arg_tests;

#[cfg(target_os = "linux")]
mod report_tests;
