#[cfg(windows)]
fn main() {
    use supported_resolutions::DisplayMode;

    env_logger::init();

    for mode in DisplayMode::enumerate() {
        println!("{mode:#?}");
        println!("\t{}", mode.resolution());
    }
}

#[cfg(not(windows))]
fn main() {
    env_logger::init();

    println!("Display modes can only be enumerated on Windows.");
}
