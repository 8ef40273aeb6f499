//! glass web - Demo page for the glass style panel
//!
//! Renders a glass card whose stylesheet reads the panel's variables, plus a
//! live `:root` snippet of the current values.

fn main() {
    dioxus::launch(glass_web::App);
}
