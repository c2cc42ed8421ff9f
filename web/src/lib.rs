use clap::Parser;
use wasm_bindgen::prelude::*;

mod board;
mod render;
mod session;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of boxes, anything below 5 is raised to 5, above 64 is ignored
    #[arg(short, long, allow_negative_numbers = true)]
    box_count: Option<i64>,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    let box_count = args
        .box_count
        .and_then(utils::checked_box_count)
        .or_else(|| {
            root.get_attribute("data-box-count")
                .and_then(|raw| utils::parse_box_count(&raw))
        })
        .unwrap_or(boxhunt_core::MIN_BOX_COUNT);
    let seed = args.seed.unwrap_or_else(utils::js_random_seed);
    log::debug!("seed: {}, box count: {}", seed, box_count);

    log::debug!("App started");
    yew::Renderer::<board::GameView>::with_root_and_props(root, board::GameProps { box_count, seed })
        .render();
}
