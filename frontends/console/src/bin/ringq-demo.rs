
use std::process;

use ringq_console::DemoFrontend;

fn main() {
    let matches = DemoFrontend::args("ringq-demo").get_matches();

    if let Err(err) = DemoFrontend.start(matches) {
        log::error!("{}", err);
        process::exit(1);
    }
}
