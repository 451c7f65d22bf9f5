use trajviz_plot::{TimeSpaceStyle, VisualizationCfg};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 6 {
        eprintln!(
            "Usage: {} <pole> <camera> <lane> <start_frame> <end_frame> [data_dir] [banded|scatter]",
            args[0]
        );
        std::process::exit(1);
    }

    let pole_num: u32 = args[1].parse().expect("pole must be an integer");
    let camera_num: u32 = args[2].parse().expect("camera must be an integer");
    let lane_num: u32 = args[3].parse().expect("lane must be an integer");
    let start_frame: u64 = args[4].parse().expect("start_frame must be an integer");
    let end_frame: u64 = args[5].parse().expect("end_frame must be an integer");

    let mut cfg = VisualizationCfg::default();
    if let Some(data_dir) = args.get(6) {
        cfg = cfg.data_dir(data_dir);
    }

    let vis = cfg.finalize(pole_num, camera_num).expect("bad camera id");

    let style = match args.get(7).map(String::as_str) {
        Some("scatter") => TimeSpaceStyle::FrameScatter,
        _ => TimeSpaceStyle::BandedFill,
    };

    let time_space = vis
        .time_space_graph(lane_num, start_frame, end_frame, style)
        .expect("time-space plot failed");
    log::info!("time-space: {}", time_space.display());

    let speed = vis
        .time_speed_graph(lane_num, start_frame, end_frame)
        .expect("time-speed plot failed");
    log::info!("time-speed: {}", speed.display());
}
