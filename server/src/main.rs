// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::env;
use std::fs;

use engine::ParkingEngine;
use model::json_serialisation::load_parking_instance_from_json;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments to get the instance and the port number
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <instance_file> [port]", args[0]);
        std::process::exit(1)
    }
    let port: u16 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(3000);

    let engine = match load_engine(&args[1]) {
        Ok(engine) => engine,
        Err(message) => {
            error!("{}", message);
            std::process::exit(1)
        }
    };

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("cannot bind port {}: {}", port, e);
            std::process::exit(1)
        }
    };
    info!(
        "Server running on port {} (http://localhost:{}/health)",
        port, port
    );
    if let Err(e) = axum::serve(listener, server::app(engine)).await {
        error!("server stopped: {}", e);
    }
}

fn load_engine(path: &str) -> Result<ParkingEngine, String> {
    let input_data = fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
    let input_data: serde_json::Value =
        serde_json::from_str(&input_data).map_err(|e| format!("{}: {}", path, e))?;
    let (layout, fee_schedule) =
        load_parking_instance_from_json(input_data).map_err(|e| e.to_string())?;
    ParkingEngine::with_system_clock(layout, fee_schedule).map_err(|e| e.to_string())
}
