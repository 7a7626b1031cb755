use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,

    #[arg(long, value_name = "ROWS", help = "Rows fetched per page")]
    pub page_size: Option<u32>,

    #[arg(
        long,
        value_name = "MILLIS",
        help = "Simulated latency of each page fetch"
    )]
    pub fetch_delay_ms: Option<u64>,

    #[arg(long, help = "Enable mouse wheel scrolling and click selection")]
    pub mouse: bool,
}
