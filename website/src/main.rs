use leptos::prelude::*;
use principal_toolkit_website::App;

fn main() {
    console_error_panic_hook::set_once();
    principal_toolkit_website::logging::init().expect("error initializing logger");
    mount_to_body(App);
}
