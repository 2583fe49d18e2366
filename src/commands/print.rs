use crate::infrastructure::color::{PrintOptions, cprint};

/// Print styled text to stdout
pub fn run(text: &str, options: &PrintOptions) {
    let options = PrintOptions {
        return_formatted: false,
        ..options.clone()
    };
    cprint(text, &options);
}
