// SPDX-License-Identifier: MPL-2.0
use regalbuto_heritage::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        section: args.opt_value_from_str("--section").ok().flatten(),
        theme: args.opt_value_from_str("--theme").ok().flatten(),
    };

    app::run(flags)
}
