use clap::Parser;
use std::net::SocketAddr;

pub const DEFAULT_HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

#[derive(Debug, Clone, Parser)]
#[command(name = "housfy_site")]
#[command(about = "Serves the HOUSFY real-estate landing page")]
#[command(version)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "HOUSFY_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Max worker threads for the HTTP server
    #[arg(long, env = "HOUSFY_WORKERS", default_value_t = 8)]
    pub workers: usize,

    /// Showcase card width in pixels; also drives the carousel offset
    #[arg(long, env = "HOUSFY_CARD_WIDTH", default_value_t = 350)]
    pub card_width: u32,

    /// Where the page loads htmx from
    #[arg(long, env = "HOUSFY_HTMX_SRC", default_value = DEFAULT_HTMX_SRC)]
    pub htmx_src: String,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "HOUSFY_LOG", default_value = "info")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 8,
            card_width: 350,
            htmx_src: DEFAULT_HTMX_SRC.to_string(),
            log_level: "info".to_string(),
        }
    }
}
