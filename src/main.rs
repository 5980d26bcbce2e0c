#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

fn main() {
    ecopack_advisor::run();
}
