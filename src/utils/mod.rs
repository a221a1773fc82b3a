pub mod path_validator;

/// Environment switch set by `--verbose`.
pub const VERBOSE_ENV: &str = "POM_RETARGET_VERBOSE";

pub fn is_verbose() -> bool {
    std::env::var(VERBOSE_ENV).is_ok()
}

/// Prints a `[VERBOSE]` diagnostic to stderr when verbose output is enabled.
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::utils::is_verbose() {
            eprintln!("[VERBOSE] {}", format_args!($($arg)*));
        }
    };
}

pub(crate) use verbose;
