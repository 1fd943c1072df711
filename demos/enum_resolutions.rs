use supported_resolutions::supported_resolutions;

fn main() {
    env_logger::init();

    let resolutions = supported_resolutions();
    if resolutions.is_empty() {
        println!("No display modes reported.");
    }
    for res in resolutions {
        println!("{}x{} : {}", res.width(), res.height(), res.refresh_rate());
    }
}
