// SPDX-License-Identifier: MPL-2.0
use palm_toast::app::{self, Flags, HELP};

fn main() -> iced::Result {
    if let Err(err) = palm_toast::logging::init() {
        eprintln!("failed to initialise logging: {err}");
    }

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match Flags::from_args(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
